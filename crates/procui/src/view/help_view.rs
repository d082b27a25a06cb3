use crate::{ProcModel, View};
use ratatui::{
    Frame,
    layout::Constraint,
    prelude::{Rect, Stylize},
    style::Style,
    widgets::{Block, Clear, Row, Table},
};

const KEYS: [(&str, &str); 7] = [
    ("Enter / F5", "Start with the entered level and speed"),
    ("F6", "Reset: stop and drain all tanks"),
    ("Tab", "Next input field"),
    ("Shift+Tab", "Previous input field"),
    ("Backspace", "Delete last character"),
    ("F1", "Toggle this help"),
    ("Esc", "Close help / quit"),
];

pub struct HelpView {}

impl HelpView {
    pub fn new() -> Self {
        Self {}
    }
}

impl View for HelpView {
    fn view(&mut self, _model: &ProcModel, frame: &mut Frame) {
        let area = frame.area();
        let width = 60.min(area.width);
        let height = (KEYS.len() as u16 + 2).min(area.height);
        let popup_area = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup_area);

        let rows = KEYS.iter().map(|(key, what)| Row::new(vec![*key, *what]));
        let table = Table::new(rows, [Constraint::Length(16), Constraint::Length(42)])
            .block(Block::bordered().title("Keys"))
            .style(Style::new().white());

        frame.render_widget(table, popup_area);
    }
}
