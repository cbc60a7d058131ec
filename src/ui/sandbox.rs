use crate::render::RenderInstruction;
use crate::ui::constants::{ASCII_FRAME_EDGE, FLUX_GLYPH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_WIDTH: usize = 10;

// Stand-in for the embedded page: shows what the page renderer would receive.
pub struct SandboxRenderer;

impl SandboxRenderer {
    pub fn render(frame: &mut Frame, instruction: &RenderInstruction, area: Rect, accent: Color) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let lines = Self::build_lines(instruction, inner_width, accent);

        let mut border = Style::default().fg(accent);
        if instruction.mode.overrides_theme() {
            border = border.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" Sandbox — {} ", instruction.label));
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    pub fn build_lines(
        instruction: &RenderInstruction,
        width: usize,
        accent: Color,
    ) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let skin = if instruction.skin_class.is_empty() {
            "(none)"
        } else {
            instruction.skin_class
        };
        let overlays = match (instruction.overlay_flux, instruction.overlay_ascii) {
            (true, true) => "flux ascii",
            (true, false) => "flux",
            (false, true) => "ascii",
            (false, false) => "none",
        };
        let window = if instruction.fullwindow {
            "fullwindow"
        } else {
            "docked"
        };

        let fields = [
            ("Node", instruction.node.clone()),
            ("URL", instruction.url.clone()),
            ("Strategy", instruction.strategy.as_str().to_string()),
            ("Mode", instruction.mode.to_string()),
            ("Skin", skin.to_string()),
            ("Sound", instruction.sound_key.to_string()),
            ("Theme", instruction.theme.to_string()),
            ("Overlays", overlays.to_string()),
            ("Window", window.to_string()),
        ];

        for (name, value) in fields {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", name, width = FIELD_WIDTH),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ]));
        }

        // Overlays frame the fields: ascii inside, flux outside
        if instruction.overlay_ascii {
            let edge: String = std::iter::repeat(ASCII_FRAME_EDGE).take(width).collect();
            lines.insert(0, Line::from(edge.clone()));
            lines.push(Line::from(edge));
        }
        if instruction.overlay_flux {
            let band = Line::styled(FLUX_GLYPH.repeat(width), Style::default().fg(accent));
            lines.insert(0, band.clone());
            lines.push(band);
        }

        lines
    }
}
