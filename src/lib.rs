pub mod actions;
pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;
pub mod state;
pub mod ui;

// Internal modules
pub mod event;

// Re-export commonly used types
pub use actions::Action;
pub use app::AppState;
pub use catalog::Catalog;
pub use config::AppConfig;
pub use model::{Mode, Node, NodeId, Theme};
pub use render::{RenderInstruction, RenderStrategy};
pub use session::Session;
pub use state::ViewState;
