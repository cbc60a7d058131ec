use crate::config::ConfigError;
use crate::model::{Mode, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw node description as it appears in a config file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct NodeEntry {
    pub id: String,
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub default_mode: Option<String>,
}

/// Ordered, read-only set of destinations. Iteration follows declaration
/// order so the node list and the side panel stay stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    nodes: Vec<Node>,
}

impl Catalog {
    pub fn builtin() -> Self {
        let nodes = vec![
            Node::new(
                "game",
                "GAME // Arcade",
                "https://game.maegia.tv/?embed=true",
                Mode::Holo,
            ),
            Node::new(
                "kragzouy",
                "KRAGZOUY // Zone X",
                "https://kragzouy.maegia.tv/?embed=true",
                Mode::Holo,
            ),
            Node::new(
                "oracle",
                "ORACLE // Divination",
                "https://oracle.maegia.tv/?embed=true",
                Mode::Holo,
            ),
            Node::new(
                "pali",
                "PALI // Linguistique",
                "https://pali.maegia.tv/?embed=true",
                Mode::Hardcore,
            ),
            Node::new(
                "cybermind",
                "CYBERMIND // Central",
                "https://cybermind.fr",
                Mode::Holo,
            ),
            Node::new("ganimed", "GANIMED // Nexus", "https://ganimed.fr", Mode::Holo),
        ];
        Self { nodes }
    }

    pub fn new(nodes: Vec<Node>) -> Result<Self, ConfigError> {
        if nodes.is_empty() {
            return Err(ConfigError::Validation(
                "node catalog must contain at least one node".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for node in &nodes {
            if node.id.is_empty() || node.id.split_whitespace().count() != 1 {
                return Err(ConfigError::Validation(format!(
                    "invalid node id '{}'",
                    node.id
                )));
            }
            if !seen.insert(node.id.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate node id '{}'",
                    node.id
                )));
            }
        }

        Ok(Self { nodes })
    }

    pub fn from_entries(entries: Vec<NodeEntry>) -> Result<Self, ConfigError> {
        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            let default_mode = match entry.default_mode.as_deref() {
                Some(raw) => raw.trim().parse::<Mode>().map_err(|_| {
                    ConfigError::Validation(format!(
                        "node '{}' has unknown default_mode '{}'",
                        entry.id, raw
                    ))
                })?,
                None => Mode::Holo,
            };
            nodes.push(Node::new(
                entry.id.trim(),
                entry.label,
                entry.url,
                default_mode,
            ));
        }
        Self::new(nodes)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// One `- id: label` line per node, in catalog order.
    pub fn listing(&self) -> String {
        self.nodes
            .iter()
            .map(|node| format!("- {}: {}", node.id, node.label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn entry(id: &str, mode: Option<&str>) -> NodeEntry {
        NodeEntry {
            id: id.to_string(),
            label: format!("{} label", id),
            url: format!("https://{}.example.org", id),
            default_mode: mode.map(str::to_string),
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get("pali").unwrap().default_mode, Mode::Hardcore);
        assert_eq!(catalog.get("cybermind").unwrap().url, "https://cybermind.fr");
        assert!(catalog.get("bogus").is_none());
    }

    #[test]
    fn test_listing_preserves_order() {
        assert_snapshot!(Catalog::builtin().listing(), @r"
        - game: GAME // Arcade
        - kragzouy: KRAGZOUY // Zone X
        - oracle: ORACLE // Divination
        - pali: PALI // Linguistique
        - cybermind: CYBERMIND // Central
        - ganimed: GANIMED // Nexus
        ");
    }

    #[test]
    fn test_from_entries_defaults_mode_to_holo() {
        let catalog = Catalog::from_entries(vec![entry("Alpha", None)]).unwrap();
        let node = catalog.get("alpha").unwrap();
        assert_eq!(node.default_mode, Mode::Holo);
    }

    #[test]
    fn test_from_entries_rejects_unknown_mode() {
        let result = Catalog::from_entries(vec![entry("alpha", Some("disco"))]);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = Catalog::from_entries(vec![entry("alpha", None), entry("ALPHA", None)]);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(Catalog::from_entries(Vec::new()).is_err());
    }
}
