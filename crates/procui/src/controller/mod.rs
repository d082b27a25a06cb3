use crate::{ProcModel, ProcView, controller::dispatch::ControllerDispatch};
use ratatui::crossterm::event::{Event, KeyCode, KeyEventKind};

mod dispatch;
mod help_controller;
mod process_controller;

pub trait Controller {
    fn on_enter(&mut self, _model: &mut ProcModel, _view: &mut ProcView) {}

    fn on_exit(&mut self, _model: &mut ProcModel, _view: &mut ProcView) {}

    fn on_event(
        &mut self,
        model: &mut ProcModel,
        view: &mut ProcView,
        event: UserInput,
    ) -> Option<ControllerChangeRequest>;
}

pub enum ControllerChangeRequest {
    Process,
    Help,
    AppTerminate,
}

#[derive(Debug, PartialEq)]
pub enum UserInput {
    Start,
    Reset,
    Help,
    Escape,
    Backspace,
    Tab,
    BackTab,
    Text(char),
}

impl UserInput {
    /// Maps a terminal event to an input. Key releases and repeats are ignored.
    pub fn from_event(event: &Event) -> Option<Self> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Enter | KeyCode::F(5) => Some(UserInput::Start),
            KeyCode::F(6) => Some(UserInput::Reset),
            KeyCode::F(1) => Some(UserInput::Help),
            KeyCode::Esc => Some(UserInput::Escape),
            KeyCode::Backspace => Some(UserInput::Backspace),
            KeyCode::Tab => Some(UserInput::Tab),
            KeyCode::BackTab => Some(UserInput::BackTab),
            KeyCode::Char(ch) if !ch.is_control() => Some(UserInput::Text(ch)),
            _ => None,
        }
    }
}

pub struct ProcController {
    dispatch: ControllerDispatch,
}

impl ProcController {
    pub fn new() -> Self {
        Self {
            dispatch: ControllerDispatch::new(),
        }
    }

    pub fn on_win_event(&mut self, model: &mut ProcModel, view: &mut ProcView, event: Event) {
        if let Some(input) = UserInput::from_event(&event) {
            self.on_input(model, view, input);
        }
    }

    pub fn on_input(&mut self, model: &mut ProcModel, view: &mut ProcView, input: UserInput) {
        let maybe_ctrl_change_request = self.dispatch.on_event(model, view, input);

        if let Some(ctrl_change_request) = maybe_ctrl_change_request {
            self.dispatch.transition(ctrl_change_request, model, view);
        }
    }

    pub fn wants_to_quit(&self) -> bool {
        self.dispatch.wants_to_quit()
    }
}
