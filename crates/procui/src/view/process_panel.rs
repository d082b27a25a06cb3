use crate::{CanvasPainter, INPUT_PANEL_HEIGHT, InputFields, ProcModel, View};
use procsim::{Drawable, ProcessConfig, RunState, SCENE_SIZE};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, canvas::Canvas},
};

const BACKGROUND: Color = Color::Rgb(240, 240, 240);

/// Canvas with the process and the input panel below it
pub struct ProcessPanel {
    pub inputs: InputFields,
}

impl ProcessPanel {
    pub fn new(config: &ProcessConfig) -> Self {
        Self {
            inputs: InputFields::new(&config.default_level, &config.default_speed),
        }
    }
}

impl View for ProcessPanel {
    fn view(&mut self, model: &ProcModel, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(INPUT_PANEL_HEIGHT),
            ])
            .split(frame.area());

        frame.render_widget(status_line(model), chunks[0]);

        // Scene
        let block = Block::default().borders(Borders::ALL).title("Process");
        let inner = block.inner(chunks[1]);
        let cell = (
            SCENE_SIZE.0 / f64::from(inner.width.max(1)),
            SCENE_SIZE.1 / f64::from(inner.height.max(1)),
        );
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(BACKGROUND)
            .x_bounds([0., SCENE_SIZE.0])
            .y_bounds([0., SCENE_SIZE.1])
            .paint(|ctx| {
                let mut painter = CanvasPainter::new(ctx, SCENE_SIZE.1, cell);
                model.process().draw(&mut painter);
            });
        frame.render_widget(canvas, chunks[1]);

        // Inputs and key legend
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26),
                Constraint::Length(26),
                Constraint::Fill(1),
            ])
            .split(chunks[2]);
        self.inputs.render(frame, [chunks[0], chunks[1]]);

        let legend = Paragraph::new("Enter/F5 start  F6 reset  Tab next field  F1 help  Esc quit")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan));
        frame.render_widget(legend, chunks[2]);
    }
}

fn status_line(model: &ProcModel) -> Paragraph<'static> {
    let process = model.process();
    let state = match process.state() {
        RunState::Idle => Span::styled("IDLE", Style::default().fg(Color::Gray)),
        RunState::Running => Span::styled("RUNNING", Style::default().fg(Color::Green)),
    };
    Paragraph::new(Line::from(vec![
        Span::raw(" "),
        state,
        Span::raw(format!(
            "  speed {}  tick {} ms  pump {:3.0} deg",
            process.speed(),
            process.timer().interval().as_millis(),
            process.pump().angle()
        )),
    ]))
}
