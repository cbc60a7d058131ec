mod console;
mod display;
mod help;
mod navigation;

use crate::catalog::Catalog;
use crate::errors::CommandError;
use crate::model::{Mode, NodeId};
use crate::state::ViewState;

pub use console::*;
pub use display::*;
pub use help::*;
pub use navigation::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Transcript
    ShowHelp,
    ShowNodeList,
    ClearLog,
    Print(String),
    Noop,

    // Overlays and theme
    SetFlux(bool),
    SetAscii(bool),
    SetTheme(String),

    // Navigation
    LoadNode { node: NodeId, mode: Option<Mode> },
    EnterFullwindow(NodeId),
    ExitFullwindow,
}

/// Applies `action` to `state`.
///
/// Never fails. A node id missing from `catalog` logs an unknown-node line
/// and leaves the rest of the state as it was.
pub fn reduce(state: &mut ViewState, catalog: &Catalog, action: Action) {
    match action {
        Action::ShowHelp => help::show_help(state),
        Action::ShowNodeList => help::show_node_list(state, catalog),
        Action::ClearLog => console::clear_log(state),
        Action::Print(text) => console::print(state, text),
        Action::Noop => {}

        Action::SetFlux(on) => display::set_flux(state, on),
        Action::SetAscii(on) => display::set_ascii(state, on),
        Action::SetTheme(name) => display::set_theme(state, &name),

        Action::LoadNode { node, mode } => match catalog.get(&node) {
            Some(entry) => navigation::load_node(state, entry, mode),
            None => unknown_node(state, node),
        },
        Action::EnterFullwindow(node) => match catalog.get(&node) {
            Some(entry) => navigation::enter_fullwindow(state, entry),
            None => unknown_node(state, node),
        },
        Action::ExitFullwindow => navigation::exit_fullwindow(state),
    }
}

fn unknown_node(state: &mut ViewState, node: NodeId) {
    log::warn!("action names unknown node '{}'", node);
    console::print(state, CommandError::UnknownNode(node).to_string());
}
