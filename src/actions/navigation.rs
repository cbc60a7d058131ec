use crate::model::{Mode, Node};
use crate::state::ViewState;

/// Loads `node`, resolving a missing mode to the node's default, and applies
/// the theme coupling: hacker-family modes push the hacker override, every
/// other mode pops it.
pub fn load_node(state: &mut ViewState, node: &Node, mode: Option<Mode>) {
    let mode = mode.unwrap_or(node.default_mode);

    if mode.overrides_theme() {
        state.themes.push_override();
    } else {
        state.themes.pop_override();
    }
    log::debug!(
        "mode {} -> theme {} (shadow {})",
        mode,
        state.theme(),
        state.theme_before_override()
    );

    state.push_log(format!("Loading {} [{}]", node.id, mode));
    state.current_node = node.id.clone();
    state.current_mode = mode;
}

pub fn enter_fullwindow(state: &mut ViewState, node: &Node) {
    state.push_log(format!("Opening {} in fullwindow", node.id));
    state.current_node = node.id.clone();
    state.fullwindow = true;
}

pub fn exit_fullwindow(state: &mut ViewState) {
    state.fullwindow = false;
    state.push_log("Leaving fullwindow");
}
