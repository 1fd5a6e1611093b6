//! Trait definitions for external interactions
//!
//! These traits define the boundary between the family graph core and the
//! collaborators around it. Implementations live in other crates.

use crate::EntityDraft;

/// Something that can hand over an entity draft
///
/// The production source is the text-understanding service; the CLI
/// implements it over files and stdin.
pub trait EntitySource {
    /// Error type for loading
    type Error;

    /// Load one draft
    fn load(&self) -> Result<EntityDraft, Self::Error>;
}
