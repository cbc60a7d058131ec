use crate::catalog::Catalog;
use crate::errors::CommandError;
use crate::model::{Mode, NodeId, Theme};

pub const BOOT_MESSAGES: [&str; 3] = [
    "System initialized.",
    "Default node : {node}",
    "Type 'help' for commands.",
];

/// The global theme together with the theme it displaced when a hacker-family
/// mode forced the override.
///
/// `push_override` saves the current theme only when no override is active, so
/// entering hacker twice in a row keeps the original shadow. `pop_override`
/// restores the shadow only while overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStack {
    theme: Theme,
    shadow: Theme,
}

impl ThemeStack {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            shadow: theme,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Theme to return to once the override ends.
    pub fn shadow(&self) -> Theme {
        self.shadow
    }

    pub fn is_overridden(&self) -> bool {
        self.theme == Theme::Hacker
    }

    /// A user theme change. The shadow tracks the outgoing theme unless an
    /// override is active.
    pub fn select(&mut self, theme: Theme) {
        if !self.is_overridden() {
            self.shadow = self.theme;
        }
        self.theme = theme;
    }

    pub fn push_override(&mut self) {
        if !self.is_overridden() {
            self.shadow = self.theme;
        }
        self.theme = Theme::Hacker;
    }

    pub fn pop_override(&mut self) {
        if self.is_overridden() {
            self.theme = self.shadow;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub current_node: NodeId,
    pub current_mode: Mode,
    pub themes: ThemeStack,
    pub flux_enabled: bool,
    pub ascii_enabled: bool,
    pub fullwindow: bool,
    pub log: Vec<String>,
}

impl ViewState {
    pub fn new(catalog: &Catalog, default_node: &str, theme: Theme) -> Result<Self, CommandError> {
        // The shadow must always hold a theme the user can return to.
        if !theme.is_user_selectable() {
            return Err(CommandError::ReservedTheme(theme.to_string()));
        }

        let id = default_node.trim().to_lowercase();
        let node = catalog
            .get(&id)
            .ok_or_else(|| CommandError::UnknownNode(default_node.to_string()))?;

        let mut themes = ThemeStack::new(theme);
        if node.default_mode.overrides_theme() {
            themes.push_override();
        }

        let log = BOOT_MESSAGES
            .iter()
            .map(|line| line.replace("{node}", &node.id))
            .collect();

        Ok(Self {
            current_node: node.id.clone(),
            current_mode: node.default_mode,
            themes,
            flux_enabled: false,
            ascii_enabled: false,
            fullwindow: false,
            log,
        })
    }

    pub fn theme(&self) -> Theme {
        self.themes.theme()
    }

    pub fn theme_before_override(&self) -> Theme {
        self.themes.shadow()
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new(&Catalog::builtin(), "cybermind", Theme::Cyan).unwrap();
        assert_eq!(state.current_node, "cybermind");
        assert_eq!(state.current_mode, Mode::Holo);
        assert_eq!(state.theme(), Theme::Cyan);
        assert_eq!(state.theme_before_override(), Theme::Cyan);
        assert!(!state.flux_enabled && !state.ascii_enabled && !state.fullwindow);
        assert_eq!(
            state.log,
            vec![
                "System initialized.",
                "Default node : cybermind",
                "Type 'help' for commands."
            ]
        );
    }

    #[test]
    fn test_unknown_default_node() {
        let result = ViewState::new(&Catalog::builtin(), "nowhere", Theme::Cyan);
        assert_eq!(result, Err(CommandError::UnknownNode("nowhere".to_string())));
    }

    #[test]
    fn test_hacker_default_node_starts_overridden() {
        let catalog = Catalog::new(vec![Node::new(
            "den",
            "DEN",
            "https://den.example.org",
            Mode::Hacker,
        )])
        .unwrap();
        let state = ViewState::new(&catalog, "den", Theme::Purple).unwrap();
        assert_eq!(state.theme(), Theme::Hacker);
        assert_eq!(state.theme_before_override(), Theme::Purple);
    }

    #[test]
    fn test_double_push_keeps_first_shadow() {
        let mut themes = ThemeStack::new(Theme::Purple);
        themes.push_override();
        themes.push_override();
        assert_eq!(themes.shadow(), Theme::Purple);
        themes.pop_override();
        assert_eq!(themes.theme(), Theme::Purple);
    }

    #[test]
    fn test_pop_without_override_is_noop() {
        let mut themes = ThemeStack::new(Theme::Cyan);
        themes.select(Theme::Purple);
        themes.pop_override();
        assert_eq!(themes.theme(), Theme::Purple);
        assert_eq!(themes.shadow(), Theme::Cyan);
    }

    #[test]
    fn test_select_while_overridden_keeps_shadow() {
        let mut themes = ThemeStack::new(Theme::Cyan);
        themes.push_override();
        themes.select(Theme::Purple);
        assert_eq!(themes.theme(), Theme::Purple);
        assert_eq!(themes.shadow(), Theme::Cyan);
    }

    #[test]
    fn test_hacker_is_not_a_starting_theme() {
        let result = ViewState::new(&Catalog::builtin(), "cybermind", Theme::Hacker);
        assert_eq!(
            result,
            Err(CommandError::ReservedTheme("hacker".to_string()))
        );
    }

    #[test]
    fn test_default_node_is_case_insensitive() {
        let state = ViewState::new(&Catalog::builtin(), " CyberMind ", Theme::Purple).unwrap();
        assert_eq!(state.current_node, "cybermind");
        assert_eq!(state.log[1], "Default node : cybermind");
    }
}
