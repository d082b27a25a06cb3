use procsim::{ProcessConfig, ProcessView, StartError, TickReport};
use std::time::Instant;

pub struct ProcModel {
    process: ProcessView,
}

impl ProcModel {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            process: ProcessView::new(config),
        }
    }

    pub fn process(&self) -> &ProcessView {
        &self.process
    }

    pub fn start(&mut self, level: &str, speed: &str, now: Instant) -> Result<(), StartError> {
        self.process.start(level, speed, now)
    }

    pub fn reset(&mut self) {
        self.process.reset();
    }

    /// Advances the process if its timer is due
    pub fn on_tick(&mut self, now: Instant) -> Option<TickReport> {
        self.process.poll(now)
    }

    pub fn take_redraw_request(&mut self) -> bool {
        self.process.take_redraw_request()
    }
}
