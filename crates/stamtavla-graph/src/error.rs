//! Error types for the family graph core

use stamtavla_domain::MemberId;
use thiserror::Error;

/// Errors that can occur while building a family graph
#[derive(Error, Debug)]
pub enum GraphError {
    /// Parent/child relations form a cycle, so generations cannot converge
    #[error("Parent/child cycle detected after {passes} relaxation passes involving: {}", join_ids(.members))]
    CycleDetected {
        /// Relaxation passes run before giving up
        passes: usize,
        /// Members still changing, or never reached, when the bound was hit
        members: Vec<MemberId>,
    },

    /// Draft does not have the expected shape
    #[error("Invalid draft format: {0}")]
    InvalidFormat(String),

    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(e: serde_json::Error) -> Self {
        GraphError::JsonParse(e.to_string())
    }
}

fn join_ids(ids: &[MemberId]) -> String {
    ids.iter()
        .map(MemberId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
