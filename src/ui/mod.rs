mod console;
mod constants;
mod nodes;
mod sandbox;
mod status_line;
mod text;


use crate::app::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use console::ConsoleRenderer;
pub use constants::accent_color;
pub use nodes::NodesRenderer;
pub use sandbox::SandboxRenderer;
pub use status_line::StatusLineRenderer;
pub use text::TextWrapper;

// Main render function
pub fn render(frame: &mut Frame, app: &AppState) {
    let size = frame.area();
    let instruction = app.session.render();
    let accent = accent_color(instruction.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);

    if instruction.fullwindow {
        // Sandbox over the whole top area; keep the input so `exit` can be typed
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(chunks[0]);
        SandboxRenderer::render(frame, &instruction, rows[0], accent);
        ConsoleRenderer::render_input(frame, app, rows[1], accent);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(28),
                Constraint::Percentage(50),
                Constraint::Percentage(22),
            ])
            .split(chunks[0]);
        ConsoleRenderer::render(frame, app, columns[0], accent);
        SandboxRenderer::render(frame, &instruction, columns[1], accent);
        NodesRenderer::render(frame, app, columns[2], accent);
    }

    StatusLineRenderer::render(frame, &instruction, chunks[1], accent);
}
