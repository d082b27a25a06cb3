use clap::Parser;
use eyre::WrapErr;
use procsim::{ProcessConfig, ProcessView, print_process_overview};
use ratatui::crossterm::event;
use std::{
    fs::File,
    path::PathBuf,
    time::{Duration, Instant},
};

mod common;
mod controller;
mod model;
mod view;

pub use common::*;
pub use controller::*;
pub use model::*;
pub use view::*;

/// Four tanks, three pipes and a pump, animated in the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with process settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial text of the level input
    #[arg(long, allow_hyphen_values = true)]
    level: Option<String>,

    /// Initial text of the speed input
    #[arg(long, allow_hyphen_values = true)]
    speed: Option<String>,

    /// Tick interval in milliseconds
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run the given number of ticks without a terminal UI and print the tanks
    #[arg(long, value_name = "TICKS")]
    headless: Option<usize>,
}

fn main() {
    let args = Args::parse();

    if let Err(err) = init_logging(&args) {
        eprintln!("Failed to initialize logging: {err:?}");
        std::process::exit(1);
    }

    log::info!("Process simulation v{RELEASE_VERSION_STR}");

    match main_impl(args) {
        Ok(()) => {
            log::info!("Terminated.");
        }
        Err(err) => {
            log::error!("Failure: {err:?}");
            eprintln!("Failure: {err:?}");
            std::process::exit(1);
        }
    }
}

fn init_logging(args: &Args) -> eyre::Result<()> {
    let default_filter = if args.headless.is_some() || args.log_file.is_some() {
        LOG_FILTER
    } else {
        TUI_LOG_FILTER
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn load_config(args: &Args) -> eyre::Result<ProcessConfig> {
    let mut config = match &args.config {
        Some(path) => ProcessConfig::load_from_json(path)?,
        None => ProcessConfig::default(),
    };

    if let Some(level) = &args.level {
        config.default_level = level.clone();
    }
    if let Some(speed) = &args.speed {
        config.default_speed = speed.clone();
    }
    if let Some(tick_ms) = args.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    config.validate()?;

    Ok(config)
}

fn main_impl(args: Args) -> eyre::Result<()> {
    let config = load_config(&args)?;
    log::debug!("{config:?}");

    match args.headless {
        Some(ticks) => run_headless(&config, ticks),
        None => run_tui(&config),
    }
}

fn run_headless(config: &ProcessConfig, ticks: usize) -> eyre::Result<()> {
    let mut process = ProcessView::new(config);

    process
        .start(&config.default_level, &config.default_speed, Instant::now())
        .wrap_err("rejected start inputs")?;

    for _ in 0..ticks {
        process.tick();
    }

    print_process_overview(&process);

    Ok(())
}

fn run_tui(config: &ProcessConfig) -> eyre::Result<()> {
    let mut launcher = Launcher::init(&format!("Process simulation v{RELEASE_VERSION_STR}"))?;

    let result = event_loop(&mut launcher, config);

    launcher.fini()?;

    result
}

fn event_loop(launcher: &mut Launcher, config: &ProcessConfig) -> eyre::Result<()> {
    let mut model = ProcModel::new(config);

    let mut view = ProcView::new(config);

    let mut controller = ProcController::new();

    let idle_poll = Duration::from_millis(IDLE_POLL_MS);
    let mut needs_draw = true;

    while !controller.wants_to_quit() {
        // Wait for user input or until it is time for the next tick
        let timeout = model
            .process()
            .timer()
            .time_until_due(Instant::now())
            .unwrap_or(idle_poll);
        if event::poll(timeout)? {
            let event = event::read()?;
            controller.on_win_event(&mut model, &mut view, event);
            needs_draw = true;
        }

        model.on_tick(Instant::now());

        // Draw when the process asked for it or the user did something
        if model.take_redraw_request() || needs_draw {
            launcher
                .terminal_mut()
                .draw(|frame| view.view(&model, frame))?;
            needs_draw = false;
        }
    }

    Ok(())
}
