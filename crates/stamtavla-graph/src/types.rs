//! Output payload for the rendering layer

use crate::builder::RelationEdge;
use serde::{Deserialize, Serialize};
use stamtavla_domain::{Connection, Member};

/// Summary numbers for the rendered tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeMetadata {
    /// Number of members
    pub total_members: usize,

    /// Number of distinct generation values present
    pub generations: usize,
}

/// Positioned family graph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TreePayload {
    /// Members in insertion order
    pub members: Vec<Member>,

    /// Child and spouse connections
    pub connections: Vec<Connection>,

    /// Every recorded relationship, lateral ones included
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<RelationEdge>,

    /// Summary
    pub metadata: TreeMetadata,
}
