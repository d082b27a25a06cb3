use gems::{Cycle, CycleDirection};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
};

/// Longest text accepted by an input field
const MAX_INPUT_LEN: usize = 24;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Level,
    Speed,
}

impl FieldKind {
    fn label(self) -> &'static str {
        match self {
            FieldKind::Level => "Initial level (%)",
            FieldKind::Speed => "Flow speed",
        }
    }
}

#[derive(Clone, Debug)]
pub struct InputField {
    kind: FieldKind,
    text: String,
}

/// The two text inputs of the start command. One of them has the focus.
pub struct InputFields {
    fields: Cycle<InputField>,
}

impl InputFields {
    pub fn new(level: &str, speed: &str) -> Self {
        Self {
            fields: Cycle::from_iter([
                InputField {
                    kind: FieldKind::Level,
                    text: level.to_string(),
                },
                InputField {
                    kind: FieldKind::Speed,
                    text: speed.to_string(),
                },
            ]),
        }
    }

    pub fn text(&self, kind: FieldKind) -> &str {
        self.fields
            .iter()
            .find(|f| f.kind == kind)
            .map_or("", |f| f.text.as_str())
    }

    pub fn focus(&self) -> FieldKind {
        self.fields.selection().kind
    }

    pub fn cycle_focus(&mut self, direction: CycleDirection) {
        self.fields.cycle(direction);
    }

    pub fn push(&mut self, ch: char) {
        let text = &mut self.fields.selection_mut().text;
        if text.chars().count() < MAX_INPUT_LEN {
            text.push(ch);
        }
    }

    pub fn pop(&mut self) {
        self.fields.selection_mut().text.pop();
    }

    pub fn render(&self, frame: &mut Frame, areas: [Rect; 2]) {
        let focus = self.focus();
        for (field, area) in self.fields.iter().zip(areas) {
            let mut block = Block::default()
                .borders(Borders::ALL)
                .title(field.kind.label());
            let mut text = field.text.clone();
            if field.kind == focus {
                block = block.border_style(Style::default().fg(Color::Yellow));
                text.push('_');
            }
            let paragraph = Paragraph::new(text).block(block).white();
            frame.render_widget(paragraph, area);
        }
    }
}
