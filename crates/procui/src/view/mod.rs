mod canvas_painter;
mod help_view;
mod input_field;
mod launcher;
mod process_panel;

pub use canvas_painter::*;
pub use help_view::*;
pub use input_field::*;
pub use launcher::*;
pub use process_panel::*;

use crate::ProcModel;
use procsim::ProcessConfig;
use ratatui as rat;

pub trait View {
    fn view(&mut self, model: &ProcModel, frame: &mut rat::Frame);
}

/// Views drawn on top of the process panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    Help,
}

pub struct ProcView {
    pub process: ProcessPanel,
    pub help: HelpView,

    pub overlay_view: Option<OverlayKind>,
}

impl ProcView {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            process: ProcessPanel::new(config),
            help: HelpView::new(),
            overlay_view: None,
        }
    }
}

impl View for ProcView {
    fn view(&mut self, model: &ProcModel, frame: &mut rat::Frame) {
        self.process.view(model, frame);

        match self.overlay_view {
            Some(OverlayKind::Help) => self.help.view(model, frame),
            None => {}
        }
    }
}
