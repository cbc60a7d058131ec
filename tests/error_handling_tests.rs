use maegia_console::errors::CommandError;
use maegia_console::{Action, Catalog, Mode, Session, Theme};

mod common;
use common::*;

#[test]
fn test_unknown_node_does_not_mutate() {
    let mut session = create_test_session();
    let before = session.state().clone();

    session.submit("connect bogus");

    let after = session.state();
    assert_eq!(after.current_node, before.current_node);
    assert_eq!(after.current_mode, before.current_mode);
    assert_eq!(after.themes, before.themes);
    assert_eq!(after.log.len(), before.log.len() + 2);
    assert_eq!(after.log.last().unwrap(), "Unknown node 'bogus'");
}

#[test]
fn test_unknown_node_in_open() {
    let session = run_commands(&["open atlantis"]);
    assert!(!session.state().fullwindow);
    assert_eq!(session.state().current_node, DEFAULT_NODE);
    assert_eq!(session.log().last().unwrap(), "Unknown node 'atlantis'");
}

#[test]
fn test_dangling_mode_flag_uses_default() {
    let session = run_commands(&["connect game --mode"]);
    assert_eq!(session.state().current_node, "game");
    assert_eq!(session.state().current_mode, Mode::Holo);

    let session = run_commands(&["connect pali --mode turbo"]);
    assert_eq!(session.state().current_mode, Mode::Hardcore);
}

#[test]
fn test_unknown_theme_is_logged() {
    let session = run_commands(&["theme neon"]);
    assert_eq!(session.state().theme(), Theme::Cyan);
    assert_eq!(session.log().last().unwrap(), "Unknown theme 'neon'");
}

#[test]
fn test_hacker_theme_cannot_be_set_directly() {
    let session = run_commands(&["theme hacker"]);
    assert_eq!(session.state().theme(), Theme::Cyan);
    assert_eq!(session.state().theme_before_override(), Theme::Cyan);
}

#[test]
fn test_theme_change_while_overridden_keeps_shadow() {
    let session = run_commands(&[
        "connect game --mode hacker",
        "theme purple",
        "connect game --mode holo",
    ]);
    // The user's explicit choice wins; the shadow from before the override
    // is left alone.
    assert_eq!(session.state().theme(), Theme::Purple);
    assert_eq!(session.state().theme_before_override(), Theme::Cyan);
}

#[test]
fn test_garbage_is_echoed() {
    let session = run_commands(&["Rm -Rf /"]);
    assert_eq!(
        session.log().last().unwrap(),
        "Unknown command 'Rm -Rf /'"
    );
}

#[test]
fn test_malformed_switches() {
    let session = run_commands(&["flux", "ascii sideways", "theme"]);
    let tail: Vec<&str> = session
        .log()
        .iter()
        .rev()
        .step_by(2)
        .take(3)
        .map(String::as_str)
        .collect();
    assert_eq!(
        tail,
        vec![
            "Unknown command 'theme'",
            "Unknown command 'ascii sideways'",
            "Unknown command 'flux'",
        ]
    );
    assert!(!session.state().flux_enabled);
    assert!(!session.state().ascii_enabled);
}

#[test]
fn test_errors_never_halt_the_session() {
    let session = run_commands(&["connect", "open", "???", "connect game"]);
    assert_eq!(session.state().current_node, "game");
}

#[test]
fn test_dispatched_unknown_node_leaves_state() {
    let mut session = create_test_session();
    let before = session.state().clone();

    session.dispatch(Action::EnterFullwindow("atlantis".to_string()));
    session.dispatch(Action::LoadNode {
        node: "atlantis".to_string(),
        mode: Some(Mode::Elite),
    });

    let after = session.state();
    assert_eq!(after.current_node, before.current_node);
    assert_eq!(after.current_mode, before.current_mode);
    assert_eq!(after.themes, before.themes);
    assert!(!after.fullwindow);
    assert_eq!(after.log.len(), before.log.len() + 2);
}

#[test]
fn test_session_refuses_hacker_start_theme() {
    let result = Session::new(Catalog::builtin(), DEFAULT_NODE, Theme::Hacker);
    assert!(matches!(result, Err(CommandError::ReservedTheme(_))));
}
