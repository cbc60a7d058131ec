use crate::actions::{self, Action};
use crate::catalog::Catalog;
use crate::errors::CommandError;
use crate::model::Theme;
use crate::parser;
use crate::render::{self, RenderInstruction};
use crate::state::ViewState;

/// One console session: a read-only catalog and the view-state it drives.
/// Sessions share nothing, so a server would hold one per client.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    state: ViewState,
}

impl Session {
    pub fn new(catalog: Catalog, default_node: &str, theme: Theme) -> Result<Self, CommandError> {
        let state = ViewState::new(&catalog, default_node, theme)?;
        Ok(Self { catalog, state })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn log(&self) -> &[String] {
        &self.state.log
    }

    /// Echoes `line` into the transcript, then parses and applies it.
    pub fn submit(&mut self, line: &str) -> RenderInstruction {
        let line = line.trim();
        log::info!("command: {:?}", line);
        self.state.push_log(format!("> {}", line));

        let action = parser::parse(line, &self.catalog);
        self.dispatch(action)
    }

    /// Applies an action built outside the parser, such as a node panel
    /// shortcut. Node ids missing from this session's catalog are reported in
    /// the transcript and change nothing else.
    pub fn dispatch(&mut self, action: Action) -> RenderInstruction {
        log::debug!("action: {:?}", action);
        actions::reduce(&mut self.state, &self.catalog, action);
        self.render()
    }

    pub fn render(&self) -> RenderInstruction {
        render::build(&self.state, &self.catalog)
    }
}
