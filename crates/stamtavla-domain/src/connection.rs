//! Connections handed to the rendering layer

use crate::MemberId;
use serde::{Deserialize, Serialize};

/// Kind of a rendered connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Directed, parent to child
    Child,
    /// Undirected, emitted once per pair
    Spouse,
}

/// A typed edge between two members
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Source member (the parent for [`ConnectionType::Child`])
    pub from: MemberId,

    /// Target member
    pub to: MemberId,

    /// Connection kind
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
}

impl Connection {
    /// Parent to child connection
    pub fn child(parent: MemberId, child: MemberId) -> Self {
        Self {
            from: parent,
            to: child,
            connection_type: ConnectionType::Child,
        }
    }

    /// Spouse connection
    pub fn spouse(a: MemberId, b: MemberId) -> Self {
        Self {
            from: a,
            to: b,
            connection_type: ConnectionType::Spouse,
        }
    }
}
