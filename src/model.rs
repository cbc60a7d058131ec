use crate::errors::CommandError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub type NodeId = String;

/// Presentation skin applied to the embedded destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Holo,
    Hardcore,
    Fullscreen,
    Hacker,
    Elite,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Holo,
        Mode::Hardcore,
        Mode::Fullscreen,
        Mode::Hacker,
        Mode::Elite,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Holo => "holo",
            Mode::Hardcore => "hardcore",
            Mode::Fullscreen => "fullscreen",
            Mode::Hacker => "hacker",
            Mode::Elite => "elite",
        }
    }

    /// Modes that force the global theme to `hacker` while active.
    pub fn overrides_theme(self) -> bool {
        matches!(self, Mode::Hacker | Mode::Elite)
    }

    pub fn skin_class(self) -> &'static str {
        match self {
            Mode::Holo => "cyber-holo cyber-holo-active",
            Mode::Hardcore => "cyber-hardcore",
            Mode::Fullscreen => "",
            Mode::Hacker => "cyber-hacker cyber-glitch",
            Mode::Elite => "cyber-elite cyber-glitch",
        }
    }

    pub fn sound_key(self) -> &'static str {
        match self {
            Mode::Holo => "holo_chime",
            Mode::Hardcore => "hardcore_pulse",
            Mode::Hacker => "hacker_glitch",
            Mode::Elite => "elite_fanfare",
            // No cue of its own
            Mode::Fullscreen => Mode::Holo.sound_key(),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommandError::UnknownMode(s.to_string()))
    }
}

/// Global colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Cyan,
    Purple,
    Hacker,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Cyan, Theme::Purple, Theme::Hacker];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Cyan => "cyan",
            Theme::Purple => "purple",
            Theme::Hacker => "hacker",
        }
    }

    /// `hacker` is only reachable through a mode override.
    pub fn is_user_selectable(self) -> bool {
        !matches!(self, Theme::Hacker)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CommandError::UnknownTheme(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub url: String,
    pub default_mode: Mode,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        url: impl Into<String>,
        default_mode: Mode,
    ) -> Self {
        Self {
            id: id.into().to_lowercase(),
            label: label.into(),
            url: url.into(),
            default_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_is_case_insensitive() {
        assert_eq!("HOLO".parse::<Mode>().unwrap(), Mode::Holo);
        assert_eq!("Elite".parse::<Mode>().unwrap(), Mode::Elite);
        assert_eq!("fullscreen".parse::<Mode>().unwrap(), Mode::Fullscreen);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let err = "disco".parse::<Mode>().unwrap_err();
        assert!(matches!(err, CommandError::UnknownMode(ref m) if m == "disco"));
    }

    #[test]
    fn test_override_family() {
        let overriding: Vec<Mode> = Mode::ALL
            .into_iter()
            .filter(|m| m.overrides_theme())
            .collect();
        assert_eq!(overriding, vec![Mode::Hacker, Mode::Elite]);
    }

    #[test]
    fn test_fullscreen_skin_is_empty_and_sound_falls_back() {
        assert_eq!(Mode::Fullscreen.skin_class(), "");
        assert_eq!(Mode::Fullscreen.sound_key(), Mode::Holo.sound_key());
        assert_eq!(Mode::Holo.skin_class(), "cyber-holo cyber-holo-active");
    }

    #[test]
    fn test_theme_selectability() {
        assert!(Theme::Cyan.is_user_selectable());
        assert!(Theme::Purple.is_user_selectable());
        assert!(!Theme::Hacker.is_user_selectable());
        assert!("magenta".parse::<Theme>().is_err());
    }

    #[test]
    fn test_node_id_is_lowercased() {
        let node = Node::new("Game", "GAME // Arcade", "https://example.com", Mode::Holo);
        assert_eq!(node.id, "game");
    }
}
