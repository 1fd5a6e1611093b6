//! Flatten members into connection records

use stamtavla_domain::{Connection, Member};

/// Emit the connections the renderer draws
///
/// One `child` connection per recorded child, parent to child. Spouse pairs
/// are emitted once, from the member whose id sorts first; the builder keeps
/// spouse slots symmetric, so no pair is lost.
pub fn materialize(members: &[Member]) -> Vec<Connection> {
    let mut connections = Vec::new();
    for member in members {
        for child in &member.children {
            connections.push(Connection::child(member.id.clone(), child.clone()));
        }
        if let Some(spouse) = &member.spouse {
            if member.id < *spouse {
                connections.push(Connection::spouse(member.id.clone(), spouse.clone()));
            }
        }
    }
    connections
}
