use crate::catalog::Catalog;
use crate::state::ViewState;

pub struct HelpSection {
    pub title: &'static str,
    pub items: &'static [(&'static str, &'static str)],
}

pub const SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "COMMANDS:",
        items: &[
            ("help", "Show help"),
            ("list", "List nodes"),
            ("clear", "Clear console"),
        ],
    },
    HelpSection {
        title: "NODES:",
        items: &[
            ("connect <node>", "Load a node in its default mode"),
            (
                "connect <node> --mode <m>",
                "holo/hardcore/fullscreen/hacker/elite",
            ),
            ("<node>", "Same as connect <node>"),
            ("open <node>", "Open a node fullwindow"),
            ("exit", "Leave fullwindow"),
        ],
    },
    HelpSection {
        title: "OTHER:",
        items: &[
            ("theme cyan/purple", "Switch theme"),
            ("flux on/off", "Flux overlay"),
            ("ascii on/off", "ASCII overlay"),
        ],
    },
];

const ITEM_WIDTH: usize = 26;

pub fn help_text() -> String {
    let mut lines = Vec::new();
    for section in SECTIONS {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(section.title.to_string());
        for (usage, desc) in section.items {
            lines.push(format!("  {:<width$}  {}", usage, desc, width = ITEM_WIDTH));
        }
    }
    lines.join("\n")
}

pub fn show_help(state: &mut ViewState) {
    state.push_log(help_text());
}

pub fn show_node_list(state: &mut ViewState, catalog: &Catalog) {
    state.push_log(catalog.listing());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use insta::assert_snapshot;

    #[test]
    fn test_help_text() {
        assert_snapshot!(help_text(), @r"
        COMMANDS:
          help                        Show help
          list                        List nodes
          clear                       Clear console

        NODES:
          connect <node>              Load a node in its default mode
          connect <node> --mode <m>   holo/hardcore/fullscreen/hacker/elite
          <node>                      Same as connect <node>
          open <node>                 Open a node fullwindow
          exit                        Leave fullwindow

        OTHER:
          theme cyan/purple           Switch theme
          flux on/off                 Flux overlay
          ascii on/off                ASCII overlay
        ");
    }

    #[test]
    fn test_help_and_list_go_to_log() {
        let catalog = Catalog::builtin();
        let mut state = ViewState::new(&catalog, "cybermind", Theme::Cyan).unwrap();

        show_help(&mut state);
        assert_eq!(state.log.last().unwrap(), &help_text());

        show_node_list(&mut state, &catalog);
        assert!(state.log.last().unwrap().starts_with("- game: GAME // Arcade"));
    }
}
