use eyre::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
            enable_raw_mode,
        },
    },
};
use std::io::{Stdout, stdout};

type Terminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while the UI is running and puts it back afterwards
pub struct Launcher {
    terminal: Terminal,
}

impl Launcher {
    pub fn init(title: &str) -> Result<Self> {
        set_panic_hook();

        init_terminal(title)?;

        let backend = CrosstermBackend::new(stdout());

        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal {
        &mut self.terminal
    }

    pub fn fini(&mut self) -> Result<()> {
        self.terminal.show_cursor()?;
        try_restore_terminal()
    }
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        hook(info);
    }));
}

fn init_terminal(title: &str) -> Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    execute!(stdout(), SetTitle(title))?;
    Ok(())
}

fn restore_terminal() {
    if let Err(err) = try_restore_terminal() {
        eprintln!("Failed to restore terminal: {err}");
    }
}

fn try_restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}
