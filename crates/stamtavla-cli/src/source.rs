//! Loading entity drafts from files or stdin.

use crate::error::{CliError, Result};
use stamtavla_domain::traits::EntitySource;
use stamtavla_domain::EntityDraft;
use stamtavla_graph::parse_entity_draft;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Entity draft stored as JSON in a file, or piped on stdin.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: Option<PathBuf>,
}

impl JsonSource {
    /// Read from `path`, or stdin when it is `None` or `-`.
    pub fn new(path: Option<PathBuf>) -> Self {
        let path = path.filter(|p| p.as_os_str() != "-");
        Self { path }
    }

    fn read_raw(&self) -> Result<String> {
        match &self.path {
            Some(path) => {
                debug!("Reading draft from {}", path.display());
                Ok(fs::read_to_string(path)?)
            }
            None => {
                debug!("Reading draft from stdin");
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
        }
    }
}

impl EntitySource for JsonSource {
    type Error = CliError;

    fn load(&self) -> Result<EntityDraft> {
        let raw = self.read_raw()?;
        if raw.trim().is_empty() {
            return Err(CliError::InvalidInput("entity draft is empty".to_string()));
        }
        Ok(parse_entity_draft(&raw)?)
    }
}
