//! Stamtavla Graph
//!
//! Turns an entity draft (persons and relationships extracted from diary
//! text) into a positioned family graph ready for rendering.
//!
//! # Overview
//!
//! Every request builds a fresh graph from the draft it was given. Nothing is
//! cached or shared between calls, so the whole pipeline is a synchronous,
//! deterministic function of its input.
//!
//! # Architecture
//!
//! ```text
//! EntityDraft → MemberRegistry → GraphBuilder → generations → Layout → connections
//! ```
//!
//! - **Registry**: deduplicates persons by normalized name and runs the
//!   best-effort description heuristics once per person
//! - **Builder**: classifies each relationship into parent, child, spouse or
//!   lateral edges
//! - **Generations**: bounded relaxation over parent edges; a cycle is an
//!   error, never a hang
//! - **Layout**: banded grid or centered radial coordinates
//! - **Connections**: flat `child`/`spouse` records for the renderer
//!
//! # Example Usage
//!
//! ```
//! use stamtavla_graph::{FamilyTree, parse_entity_draft};
//!
//! # fn example() -> Result<(), stamtavla_graph::GraphError> {
//! let draft = parse_entity_draft(r#"{
//!     "persons": [{"name": "Anna", "description": "Erik's mother, born 1921"}],
//!     "relationships": [{"person1": "Anna", "person2": "Erik", "type": "mor"}]
//! }"#)?;
//!
//! let tree = FamilyTree::default_config();
//! let payload = tree.build(&draft)?;
//!
//! assert_eq!(payload.metadata.total_members, 2);
//! assert_eq!(payload.metadata.generations, 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod builder;
mod config;
mod connections;
mod enrichment;
mod error;
mod generation;
mod layout;
mod parser;
mod registry;
mod tree;
mod types;


pub use builder::{FamilyGraph, GraphBuilder, RelationEdge};
pub use config::{GraphConfig, LayoutMode};
pub use connections::materialize;
pub use enrichment::{enrich, Enrichment};
pub use error::GraphError;
pub use generation::{assign_generations, GenerationReport};
pub use layout::{apply_layout, layout_for, BandedGrid, CenteredRadial, Layout, Point};
pub use parser::parse_entity_draft;
pub use registry::MemberRegistry;
pub use tree::FamilyTree;
pub use types::{TreeMetadata, TreePayload};
