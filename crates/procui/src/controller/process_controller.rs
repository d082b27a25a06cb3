use crate::{
    FieldKind, ProcModel, ProcView,
    controller::{Controller, ControllerChangeRequest, UserInput},
};
use gems::CycleDirection;
use std::time::Instant;

pub struct ProcessController {}

impl Controller for ProcessController {
    fn on_enter(&mut self, _model: &mut ProcModel, view: &mut ProcView) {
        view.overlay_view = None;
    }

    fn on_event(
        &mut self,
        model: &mut ProcModel,
        view: &mut ProcView,
        event: UserInput,
    ) -> Option<ControllerChangeRequest> {
        let inputs = &mut view.process.inputs;
        match event {
            UserInput::Text(ch) => {
                inputs.push(ch);
                None
            }
            UserInput::Backspace => {
                inputs.pop();
                None
            }
            UserInput::Tab => {
                inputs.cycle_focus(CycleDirection::Forward);
                None
            }
            UserInput::BackTab => {
                inputs.cycle_focus(CycleDirection::Backward);
                None
            }
            UserInput::Start => {
                let level = inputs.text(FieldKind::Level);
                let speed = inputs.text(FieldKind::Speed);
                // Rejected input is dropped without telling the user
                if let Err(err) = model.start(level, speed, Instant::now()) {
                    log::debug!("start ignored: {err}");
                }
                None
            }
            UserInput::Reset => {
                model.reset();
                None
            }
            UserInput::Help => Some(ControllerChangeRequest::Help),
            UserInput::Escape => Some(ControllerChangeRequest::AppTerminate),
        }
    }
}
