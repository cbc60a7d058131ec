use crate::render::RenderInstruction;
use crate::ui::constants::{APP_TITLE, KEY_HINTS};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut Frame, instruction: &RenderInstruction, area: Rect, accent: Color) {
        let paragraph = Paragraph::new(Self::content(instruction)).style(
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(paragraph, area);
    }

    pub fn content(instruction: &RenderInstruction) -> String {
        let mut content = format!(
            "{} | {} [{}] | theme {}",
            APP_TITLE, instruction.node, instruction.mode, instruction.theme
        );
        if instruction.fullwindow {
            content.push_str(" | FULLWINDOW (exit to leave)");
        }
        content.push_str(" | ");
        content.push_str(KEY_HINTS);
        content
    }
}
