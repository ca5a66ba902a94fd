//! Error type for CLI command execution.

use std::fmt;

/// Errors that terminate a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// No studios configured, or the configuration is otherwise unusable.
    Config(String),
    /// The MCP server failed to start or crashed.
    Server(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "{}", msg),
            CliError::Server(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CliError {}
