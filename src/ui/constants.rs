use crate::model::Theme;
use ratatui::style::Color;

pub const ACTIVE_MARKER: &str = "▶ ";
pub const INACTIVE_MARKER: &str = "  ";
pub const INPUT_TITLE: &str = " >_ ";
pub const FLUX_GLYPH: &str = "≋";
pub const ASCII_FRAME_EDGE: char = '#';
pub const APP_TITLE: &str = "MAEGIA Console";

pub const KEY_HINTS: &str = "Tab select · F2 connect · F5-F8 holo/hard/hack/elite · Ctrl-C quit";

pub fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Cyan => Color::Cyan,
        Theme::Purple => Color::Magenta,
        Theme::Hacker => Color::Green,
    }
}
