use procsim::{ProcessView, print_process_overview};
use std::time::Instant;

// Runs the process without a screen: T1 at 80, speed 2.5, 60 ticks.
fn main() {
    env_logger::Builder::from_default_env()
        .parse_filters("info")
        .init();

    let mut view = ProcessView::default();
    let mut now = Instant::now();

    view.start("80", "2.5", now).expect("valid inputs");

    println!("Initial:");
    print_process_overview(&view);

    let interval = view.timer().interval();
    for i in 0..60 {
        now += interval;
        if let Some(report) = view.poll(now) {
            if i % 10 == 0 {
                println!("Iteration {i}: {report:?}");
                print_process_overview(&view);
            }
        }
    }

    println!("Final:");
    print_process_overview(&view);

    view.reset();
    println!("After reset:");
    print_process_overview(&view);
}
