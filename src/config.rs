use crate::catalog::{Catalog, NodeEntry};
use crate::model::Theme;
use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_NODE: &str = "cybermind";
const DEFAULT_THEME: Theme = Theme::Cyan;
const DEFAULT_TICK_RATE_MS: u64 = 50;
const ENV_PREFIX: &str = "MAEGIA";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Failed to determine config directory")]
    DirectoryNotFound,
    #[error("Validation error: {0}")]
    Validation(String),
}

// Everything optional so each layer only overrides what it sets.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    default_node: Option<String>,
    theme: Option<String>,
    tick_rate_ms: Option<u64>,
    log_file: Option<PathBuf>,
    nodes: Option<Vec<NodeEntry>>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub default_node: String,
    pub theme: Theme,
    pub tick_rate_ms: u64,
    pub log_file: Option<PathBuf>,
    pub catalog: Catalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            default_node: DEFAULT_NODE.to_string(),
            theme: DEFAULT_THEME,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            log_file: None,
            catalog: Catalog::builtin(),
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "MAEGIA sandbox console", long_about = None)]
pub struct CliArgs {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Node loaded at startup
    #[arg(long)]
    pub default_node: Option<String>,

    /// Initial theme (cyan or purple)
    #[arg(long)]
    pub theme: Option<String>,

    /// Write diagnostic logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Event poll interval in milliseconds
    #[arg(long)]
    pub tick_rate_ms: Option<u64>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run a console command without the terminal UI (repeatable)
    #[arg(short = 'e', long = "exec", value_name = "COMMAND")]
    pub exec: Vec<String>,

    /// With --exec, print the final render instruction as JSON
    #[arg(long, requires = "exec")]
    pub json: bool,
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("", "", "maegia-console")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .ok_or(ConfigError::DirectoryNotFound)
}

pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__");
    // Missing variables are fine; only collect failures are dropped here.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

// Separate from `load_config` so tests can supply their own override map.
fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = match args.config.clone() {
        Some(path) => Some(path),
        None => default_config_path().ok(),
    };

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        log::debug!("config file: {}", path.display());
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let catalog = match loaded.nodes {
        Some(entries) => Catalog::from_entries(entries)?,
        None => Catalog::builtin(),
    };

    let theme = match args.theme.clone().or(loaded.theme) {
        Some(raw) => parse_theme(&raw)?,
        None => DEFAULT_THEME,
    };

    let default_node = args
        .default_node
        .clone()
        .or(loaded.default_node)
        .unwrap_or_else(|| DEFAULT_NODE.to_string())
        .trim()
        .to_lowercase();

    let config = AppConfig {
        default_node,
        theme,
        tick_rate_ms: args
            .tick_rate_ms
            .or(loaded.tick_rate_ms)
            .unwrap_or(DEFAULT_TICK_RATE_MS),
        log_file: args.log_file.clone().or(loaded.log_file),
        catalog,
    };

    validate_config(&config)?;
    Ok(config)
}

fn parse_theme(raw: &str) -> Result<Theme, ConfigError> {
    let theme: Theme = raw
        .trim()
        .parse()
        .map_err(|err| ConfigError::Validation(format!("{}", err)))?;
    if !theme.is_user_selectable() {
        return Err(ConfigError::Validation(format!(
            "theme '{}' cannot be selected directly",
            theme
        )));
    }
    Ok(theme)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if !config.catalog.contains(&config.default_node) {
        return Err(ConfigError::Validation(format!(
            "default_node '{}' is not in the node catalog",
            config.default_node
        )));
    }
    if config.tick_rate_ms == 0 {
        return Err(ConfigError::Validation(
            "tick_rate_ms must be at least 1".to_string(),
        ));
    }
    Ok(())
}
