use maegia_console::{Catalog, Mode, Node, Session, Theme};
use ratatui::buffer::Buffer;

#[allow(dead_code)]
pub const DEFAULT_NODE: &str = "cybermind";

/// Session over the built-in catalog, booted the way the binary boots.
pub fn create_test_session() -> Session {
    Session::new(Catalog::builtin(), DEFAULT_NODE, Theme::Cyan).unwrap()
}

/// Small catalog covering every default mode, hacker family included.
#[allow(dead_code)]
pub fn create_mixed_catalog() -> Catalog {
    Catalog::new(vec![
        Node::new("alpha", "ALPHA // Holo", "https://alpha.example.org", Mode::Holo),
        Node::new("bravo", "BRAVO // Hard", "https://bravo.example.org", Mode::Hardcore),
        Node::new("charlie", "CHARLIE // Full", "https://charlie.example.org", Mode::Fullscreen),
        Node::new("delta", "DELTA // Hack", "https://delta.streamlit.app", Mode::Hacker),
        Node::new("echo", "ECHO // Elite", "https://echo.example.org/?embed=true", Mode::Elite),
    ])
    .unwrap()
}

/// Runs each command in order and returns the session.
#[allow(dead_code)]
pub fn run_commands(commands: &[&str]) -> Session {
    let mut session = create_test_session();
    for command in commands {
        session.submit(command);
    }
    session
}

/// Buffer rows as plain strings, one per terminal row.
#[allow(dead_code)]
pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

#[allow(dead_code)]
pub fn buffer_contains(buffer: &Buffer, needle: &str) -> bool {
    buffer_rows(buffer).iter().any(|row| row.contains(needle))
}
