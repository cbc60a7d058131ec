use crate::actions::Action;
use crate::catalog::Catalog;
use crate::errors::CommandError;
use crate::model::Mode;

const MODE_FLAG: &str = "--mode";

/// Turns one console line into an [`Action`].
///
/// Never fails: anything that does not match the grammar becomes an
/// [`Action::Print`] carrying the matching [`CommandError`] text. Node ids are
/// checked against `catalog` here so the reducer only sees valid nodes.
pub fn parse(line: &str, catalog: &Catalog) -> Action {
    let raw = line.trim();
    let lowered = raw.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Action::Noop,
        ["help" | "?" | "man"] => Action::ShowHelp,
        ["list" | "ls" | "nodes"] => Action::ShowNodeList,
        ["clear" | "cls" | "reset"] => Action::ClearLog,
        ["flux", switch] => match parse_switch(switch) {
            Some(on) => Action::SetFlux(on),
            None => unknown_command(raw),
        },
        ["ascii", switch] => match parse_switch(switch) {
            Some(on) => Action::SetAscii(on),
            None => unknown_command(raw),
        },
        ["theme", name] => Action::SetTheme(name.to_string()),
        ["open", node] => match lookup(catalog, node) {
            Ok(id) => Action::EnterFullwindow(id),
            Err(err) => Action::Print(err.to_string()),
        },
        ["exit" | "quit" | "back"] => Action::ExitFullwindow,
        ["connect", node, rest @ ..] => match lookup(catalog, node) {
            Ok(id) => Action::LoadNode {
                node: id,
                mode: mode_flag(rest),
            },
            Err(err) => Action::Print(err.to_string()),
        },
        [node] if catalog.contains(node) => Action::LoadNode {
            node: node.to_string(),
            mode: None,
        },
        _ => unknown_command(raw),
    }
}

fn parse_switch(token: &str) -> Option<bool> {
    match token {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

fn lookup(catalog: &Catalog, node: &str) -> Result<String, CommandError> {
    catalog
        .get(node)
        .map(|n| n.id.clone())
        .ok_or_else(|| CommandError::UnknownNode(node.to_string()))
}

/// Value following `--mode`, if it names a known mode. A dangling or
/// unrecognised flag is dropped so the node default applies.
fn mode_flag(args: &[&str]) -> Option<Mode> {
    let idx = args.iter().position(|arg| *arg == MODE_FLAG)?;
    match args.get(idx + 1).map(|value| value.parse::<Mode>()) {
        Some(Ok(mode)) => Some(mode),
        Some(Err(err)) => {
            log::debug!("ignoring --mode: {}", err);
            None
        }
        None => {
            log::debug!("ignoring --mode without a value");
            None
        }
    }
}

fn unknown_command(raw: &str) -> Action {
    Action::Print(CommandError::UnknownCommand(raw.to_string()).to_string())
}
