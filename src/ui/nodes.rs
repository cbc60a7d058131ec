use crate::app::AppState;
use crate::ui::constants::{ACTIVE_MARKER, INACTIVE_MARKER};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// Node cards: label, URL, active marker and panel selection
pub struct NodesRenderer;

impl NodesRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect, accent: Color) {
        let current = &app.session.state().current_node;
        let mut lines = Vec::new();

        for (idx, node) in app.session.catalog().iter().enumerate() {
            let active = &node.id == current;
            let marker = if active { ACTIVE_MARKER } else { INACTIVE_MARKER };

            let mut title_style = Style::default().add_modifier(Modifier::BOLD);
            if active {
                title_style = title_style.fg(accent);
            }
            if idx == app.selected_node {
                title_style = title_style.add_modifier(Modifier::REVERSED);
            }

            lines.push(Line::styled(format!("{}{}", marker, node.label), title_style));
            lines.push(Line::styled(
                format!("{}{}", INACTIVE_MARKER, node.url),
                Style::default().fg(Color::DarkGray),
            ));
            lines.push(Line::from(""));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Nodes ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
