use crate::{
    OverlayKind, ProcModel, ProcView,
    controller::{Controller, ControllerChangeRequest, UserInput},
};

pub struct HelpController {}

impl Controller for HelpController {
    fn on_enter(&mut self, _model: &mut ProcModel, view: &mut ProcView) {
        view.overlay_view = Some(OverlayKind::Help);
    }

    fn on_exit(&mut self, _model: &mut ProcModel, view: &mut ProcView) {
        view.overlay_view = None;
    }

    fn on_event(
        &mut self,
        _model: &mut ProcModel,
        _view: &mut ProcView,
        event: UserInput,
    ) -> Option<ControllerChangeRequest> {
        match event {
            UserInput::Help | UserInput::Escape => Some(ControllerChangeRequest::Process),
            _ => None,
        }
    }
}
