use crate::app::AppState;
use crate::ui::constants::INPUT_TITLE;
use crate::ui::text::TextWrapper;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const INPUT_HEIGHT: u16 = 3;

// Transcript and input line
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    pub fn render(frame: &mut Frame, app: &AppState, area: Rect, accent: Color) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)])
            .split(area);

        Self::render_log(frame, app, chunks[0], accent);
        Self::render_input(frame, app, chunks[1], accent);
    }

    fn render_log(frame: &mut Frame, app: &AppState, area: Rect, accent: Color) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let inner_height = area.height.saturating_sub(2) as usize;

        let rows = Self::log_rows(app.session.log(), inner_width);
        // Follow the tail of the transcript
        let skip = rows.len().saturating_sub(inner_height);
        let lines: Vec<Line> = rows
            .into_iter()
            .skip(skip)
            .map(|row| {
                if row.starts_with("> ") {
                    Line::styled(row, Style::default().fg(accent))
                } else {
                    Line::from(row)
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Console ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    pub fn log_rows(log: &[String], width: usize) -> Vec<String> {
        log.iter()
            .flat_map(|entry| TextWrapper::wrap(entry, width))
            .collect()
    }

    pub fn render_input(frame: &mut Frame, app: &AppState, area: Rect, accent: Color) {
        let inner_width = area.width.saturating_sub(2) as usize;

        let before_cursor: String = app.input.chars().take(app.cursor_pos).collect();
        let cursor_col = UnicodeWidthStr::width(before_cursor.as_str());

        // Scroll horizontally once the cursor would leave the box
        let (visible, cursor_col) = if inner_width > 0 && cursor_col >= inner_width {
            let overflow = cursor_col + 1 - inner_width;
            let mut dropped = 0;
            let visible: String = app
                .input
                .chars()
                .skip_while(|c| {
                    if dropped < overflow {
                        dropped += UnicodeWidthChar::width(*c).unwrap_or(0);
                        true
                    } else {
                        false
                    }
                })
                .collect();
            (visible, cursor_col - dropped)
        } else {
            (app.input.clone(), cursor_col)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(INPUT_TITLE);
        frame.render_widget(Paragraph::new(visible).block(block), area);

        if area.width > 2 && area.height > 2 {
            let x = area.x + 1 + (cursor_col as u16).min(area.width - 3);
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}
