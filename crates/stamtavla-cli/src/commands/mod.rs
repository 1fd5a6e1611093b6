//! Command implementations.

pub mod build;
pub mod config;

pub use self::build::execute_build;
pub use self::config::execute_config;
