use crate::{
    Controller, ControllerChangeRequest, ProcModel, ProcView, UserInput,
    controller::{help_controller::HelpController, process_controller::ProcessController},
};

pub struct ControllerDispatch {
    wants_to_quit: bool,
    active: ControllerKind,
    process_ctrl: ProcessController,
    help_ctrl: HelpController,
}

#[derive(Clone, PartialEq)]
enum ControllerKind {
    Process,
    Help,
}

impl ControllerDispatch {
    pub fn new() -> Self {
        Self {
            wants_to_quit: false,
            active: ControllerKind::Process,
            process_ctrl: ProcessController {},
            help_ctrl: HelpController {},
        }
    }

    pub fn transition(
        &mut self,
        change_request: ControllerChangeRequest,
        model: &mut ProcModel,
        view: &mut ProcView,
    ) {
        self.on_exit(model, view);
        self.active = match change_request {
            ControllerChangeRequest::Process => ControllerKind::Process,
            ControllerChangeRequest::Help => ControllerKind::Help,
            ControllerChangeRequest::AppTerminate => {
                self.wants_to_quit = true;
                return;
            }
        };
        self.on_enter(model, view);
    }

    pub fn wants_to_quit(&self) -> bool {
        self.wants_to_quit
    }
}

impl Controller for ControllerDispatch {
    fn on_enter(&mut self, model: &mut ProcModel, view: &mut ProcView) {
        match &mut self.active {
            ControllerKind::Process => self.process_ctrl.on_enter(model, view),
            ControllerKind::Help => self.help_ctrl.on_enter(model, view),
        }
    }

    fn on_exit(&mut self, model: &mut ProcModel, view: &mut ProcView) {
        match &mut self.active {
            ControllerKind::Process => self.process_ctrl.on_exit(model, view),
            ControllerKind::Help => self.help_ctrl.on_exit(model, view),
        }
    }

    fn on_event(
        &mut self,
        model: &mut ProcModel,
        view: &mut ProcView,
        event: UserInput,
    ) -> Option<ControllerChangeRequest> {
        match &mut self.active {
            ControllerKind::Process => self.process_ctrl.on_event(model, view, event),
            ControllerKind::Help => self.help_ctrl.on_event(model, view, event),
        }
    }
}
