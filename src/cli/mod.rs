//! CLI module for catalog-rs
//!
//! - Argument parsing with clap
//! - Configuration merging (CLI args + config files)
//! - Command execution

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use crate::config::Settings;
use crate::config::error::ConfigError;
use crate::logger::{LoggerError, init_logger};

/// Load configuration from files and environment, then apply CLI overrides.
pub fn load_and_merge_config(cli: &Cli) -> Result<Settings, ConfigError> {
    ConfigurationMerger::from_cli(cli)?.merge_cli_args(cli)
}

/// Install the global logger described by the settings.
pub fn init_logger_from_settings(settings: &Settings) -> Result<(), LoggerError> {
    let logger_config = settings
        .logger
        .to_logger_config()
        .map_err(|e| LoggerError::config(e.to_string()))?;
    init_logger(&logger_config)
}
