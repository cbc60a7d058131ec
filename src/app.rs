use crate::actions::Action;
use crate::config::AppConfig;
use crate::model::Mode;
use crate::session::Session;
use std::time::Duration;

const MAX_HISTORY: usize = 100;

/// Key-level intents produced by `event.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Quit,

    // Input line editing
    TypeChar(char),
    Backspace,
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    ClearInput,
    Submit,

    // Command history
    HistoryPrev,
    HistoryNext,

    // Node panel
    SelectNextNode,
    SelectPrevNode,
    ConnectSelected(Option<Mode>),
}

pub struct AppState {
    pub running: bool,
    pub session: Session,
    pub config: AppConfig,

    // Input line; `cursor_pos` counts chars, not bytes
    pub input: String,
    pub cursor_pos: usize,

    // Submitted commands, oldest first
    pub history: Vec<String>,
    pub history_index: Option<usize>,

    pub selected_node: usize,
}

impl AppState {
    pub fn new(config: AppConfig, session: Session) -> Self {
        let selected_node = session
            .catalog()
            .position(&session.state().current_node)
            .unwrap_or(0);

        Self {
            running: true,
            session,
            config,
            input: String::new(),
            cursor_pos: 0,
            history: Vec::new(),
            history_index: None,
            selected_node,
        }
    }

    /// How long the event loop waits for a key before redrawing.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.config.tick_rate_ms)
    }

    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::Quit => self.running = false,

            InputAction::TypeChar(c) => {
                let idx = self.byte_index();
                self.input.insert(idx, c);
                self.cursor_pos += 1;
            }
            InputAction::Backspace => {
                if self.cursor_pos > 0 {
                    self.cursor_pos -= 1;
                    let idx = self.byte_index();
                    self.input.remove(idx);
                }
            }
            InputAction::Delete => {
                if self.cursor_pos < self.input_len() {
                    let idx = self.byte_index();
                    self.input.remove(idx);
                }
            }
            InputAction::MoveCursorLeft => self.cursor_pos = self.cursor_pos.saturating_sub(1),
            InputAction::MoveCursorRight => {
                self.cursor_pos = (self.cursor_pos + 1).min(self.input_len())
            }
            InputAction::MoveCursorHome => self.cursor_pos = 0,
            InputAction::MoveCursorEnd => self.cursor_pos = self.input_len(),
            InputAction::ClearInput => self.set_input(String::new()),
            InputAction::Submit => self.submit(),

            InputAction::HistoryPrev => self.history_prev(),
            InputAction::HistoryNext => self.history_next(),

            InputAction::SelectNextNode => {
                let count = self.session.catalog().len();
                if count > 0 {
                    self.selected_node = (self.selected_node + 1) % count;
                }
            }
            InputAction::SelectPrevNode => {
                let count = self.session.catalog().len();
                if count > 0 {
                    self.selected_node = (self.selected_node + count - 1) % count;
                }
            }
            InputAction::ConnectSelected(mode) => self.connect_selected(mode),
        }
    }

    fn submit(&mut self) {
        let line = self.input.trim().to_string();
        self.set_input(String::new());
        self.history_index = None;
        if line.is_empty() {
            return;
        }

        if self.history.last() != Some(&line) {
            self.history.push(line.clone());
            if self.history.len() > MAX_HISTORY {
                self.history.remove(0);
            }
        }

        self.session.submit(&line);
        self.sync_selection();
    }

    fn connect_selected(&mut self, mode: Option<Mode>) {
        let node = match self.session.catalog().iter().nth(self.selected_node) {
            Some(node) => node.id.clone(),
            None => return,
        };
        self.session.dispatch(Action::LoadNode { node, mode });
    }

    fn history_prev(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let idx = match self.history_index {
            Some(i) => i.saturating_sub(1),
            None => self.history.len() - 1,
        };
        self.history_index = Some(idx);
        self.set_input(self.history[idx].clone());
    }

    fn history_next(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => {
                self.history_index = Some(i + 1);
                self.set_input(self.history[i + 1].clone());
            }
            Some(_) => {
                self.history_index = None;
                self.set_input(String::new());
            }
            None => {}
        }
    }

    fn set_input(&mut self, input: String) {
        self.input = input;
        self.cursor_pos = self.input_len();
    }

    // Keep the highlighted card on the node the console just loaded.
    fn sync_selection(&mut self) {
        if let Some(idx) = self
            .session
            .catalog()
            .position(&self.session.state().current_node)
        {
            self.selected_node = idx;
        }
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
