use crate::catalog::Catalog;
use crate::model::{Mode, NodeId, Theme};
use crate::state::ViewState;
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

const EMBED_MARKER: &str = "?embed=true";

/// How the front-end should show the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStrategy {
    /// Embed the live page.
    Iframe,
    /// Fetch the page once and show a script-free snapshot.
    Mirror,
}

impl RenderStrategy {
    pub fn for_url(url: &str) -> Self {
        if url.contains(EMBED_MARKER) {
            return RenderStrategy::Mirror;
        }
        match url_host(url) {
            Some(host) if host.ends_with("streamlit.app") || host.contains("maegia.tv") => {
                RenderStrategy::Mirror
            }
            _ => RenderStrategy::Iframe,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderStrategy::Iframe => "iframe",
            RenderStrategy::Mirror => "mirror",
        }
    }
}

fn url_host(url: &str) -> Option<String> {
    static HOST: OnceLock<Option<Regex>> = OnceLock::new();
    let re = HOST
        .get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://(?:[^@/?#]*@)?([^/:?#]+)").ok())
        .as_ref()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|host| host.as_str().to_lowercase())
}

/// Everything the rendering collaborator needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderInstruction {
    pub node: NodeId,
    pub label: String,
    pub url: String,
    pub strategy: RenderStrategy,
    pub mode: Mode,
    pub skin_class: &'static str,
    pub sound_key: &'static str,
    pub theme: Theme,
    pub overlay_flux: bool,
    pub overlay_ascii: bool,
    pub fullwindow: bool,
}

pub fn build(state: &ViewState, catalog: &Catalog) -> RenderInstruction {
    let (label, url) = catalog
        .get(&state.current_node)
        .map(|node| (node.label.clone(), node.url.clone()))
        .unwrap_or_else(|| (state.current_node.to_uppercase(), String::new()));

    let skin_mode = if state.fullwindow {
        Mode::Fullscreen
    } else {
        state.current_mode
    };

    RenderInstruction {
        node: state.current_node.clone(),
        label,
        strategy: RenderStrategy::for_url(&url),
        url,
        mode: state.current_mode,
        skin_class: skin_mode.skin_class(),
        sound_key: state.current_mode.sound_key(),
        theme: state.theme(),
        overlay_flux: state.flux_enabled,
        overlay_ascii: state.ascii_enabled,
        fullwindow: state.fullwindow,
    }
}
