use crate::app::InputAction;
use crate::model::Mode;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub fn handle_events(tick: Duration) -> Result<Option<InputAction>> {
    if event::poll(tick)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_event(key));
            }
        }
    }
    Ok(None)
}

pub fn handle_key_event(key: KeyEvent) -> Option<InputAction> {
    use KeyCode::*;

    match (key.code, key.modifiers) {
        // Quit
        (Char('c'), KeyModifiers::CONTROL) | (Char('q'), KeyModifiers::CONTROL) => {
            Some(InputAction::Quit)
        }

        // Line editing shortcuts
        (Char('a'), KeyModifiers::CONTROL) => Some(InputAction::MoveCursorHome),
        (Char('e'), KeyModifiers::CONTROL) => Some(InputAction::MoveCursorEnd),
        (Char('u'), KeyModifiers::CONTROL) => Some(InputAction::ClearInput),

        // Node panel
        (Tab, _) => Some(InputAction::SelectNextNode),
        (BackTab, _) => Some(InputAction::SelectPrevNode),
        (F(2), _) => Some(InputAction::ConnectSelected(None)),
        (F(5), _) => Some(InputAction::ConnectSelected(Some(Mode::Holo))),
        (F(6), _) => Some(InputAction::ConnectSelected(Some(Mode::Hardcore))),
        (F(7), _) => Some(InputAction::ConnectSelected(Some(Mode::Hacker))),
        (F(8), _) => Some(InputAction::ConnectSelected(Some(Mode::Elite))),

        // Input line
        (Enter, _) => Some(InputAction::Submit),
        (Esc, _) => Some(InputAction::ClearInput),
        (Backspace, _) => Some(InputAction::Backspace),
        (Delete, _) => Some(InputAction::Delete),
        (Left, _) => Some(InputAction::MoveCursorLeft),
        (Right, _) => Some(InputAction::MoveCursorRight),
        (Home, _) => Some(InputAction::MoveCursorHome),
        (End, _) => Some(InputAction::MoveCursorEnd),
        (Up, _) => Some(InputAction::HistoryPrev),
        (Down, _) => Some(InputAction::HistoryNext),
        (Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(InputAction::TypeChar(c)),

        _ => None,
    }
}
