//! Stamtavla CLI library.
//!
//! This library provides the pieces of the `stamtavla` command-line tool:
//! argument parsing, configuration management, draft loading, command
//! execution and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod source;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use source::JsonSource;
