//! Stamtavla Domain Layer
//!
//! This crate contains the value types shared by every other Stamtavla crate.
//! It holds no algorithms beyond name normalization: the graph building,
//! generation assignment and layout live in `stamtavla-graph`.
//!
//! ## Key Concepts
//!
//! - **Entity draft**: persons, places, dates, events and relationships as
//!   produced by an external text-understanding service
//! - **Relation type**: the closed Swedish vocabulary (`mor`, `far`, `son`, ...)
//!   and the edge shape each word implies
//! - **Member**: one deduplicated person in the family graph
//! - **Connection**: a typed edge handed to the rendering layer
//! - **Subject**: the writer of the diary, always normalized to one label
//!
//! ## Architecture
//!
//! - Only `serde` for the JSON boundaries on either side
//! - Trait definitions for the external collaborators live in [`traits`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod connection;
pub mod entity;
pub mod member;
pub mod normalize;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use confidence::Confidence;
pub use connection::{Connection, ConnectionType};
pub use entity::{EntityDraft, Person, Relationship};
pub use member::{Gender, Member, MemberId};
pub use normalize::{is_subject, member_id, normalize_name, SUBJECT_LABEL};
pub use relation::{EdgeShape, RelationType};
