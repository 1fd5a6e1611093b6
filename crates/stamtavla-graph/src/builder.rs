//! Graph builder: classify relationships and wire up the registry

use crate::config::GraphConfig;
use crate::registry::MemberRegistry;
use serde::{Deserialize, Serialize};
use stamtavla_domain::{
    normalize_name, Confidence, EdgeShape, MemberId, Person, RelationType, Relationship,
};
use tracing::{debug, warn};

/// One relationship as recorded for rendering
///
/// Every relationship becomes an edge, including lateral ones (kusin, vän,
/// unknown words) that never influence generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    /// `person1` after normalization
    pub from: MemberId,

    /// `person2` after normalization
    pub to: MemberId,

    /// Relation word, preserved
    #[serde(rename = "type")]
    pub relation: RelationType,

    /// Extractor confidence
    pub confidence: Confidence,
}

impl RelationEdge {
    /// How the relation shaped the graph
    pub fn shape(&self) -> EdgeShape {
        self.relation.shape()
    }
}

/// Result of a build: the member arena plus every recorded edge
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    /// Members with their relation sets filled in
    pub registry: MemberRegistry,

    /// Relationships in input order
    pub edges: Vec<RelationEdge>,
}

/// Builds a [`FamilyGraph`] from persons and relationships
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    enrich_attributes: bool,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            enrich_attributes: true,
        }
    }
}

impl GraphBuilder {
    /// Create a builder following the configuration
    pub fn new(config: &GraphConfig) -> Self {
        Self {
            enrich_attributes: config.enrich_attributes,
        }
    }

    /// Build a fresh graph
    ///
    /// Persons are registered first so their descriptions seed the member
    /// attributes. Relationships naming someone absent from `persons` still
    /// create that member.
    pub fn build(&self, persons: &[Person], relationships: &[Relationship]) -> FamilyGraph {
        let mut registry = MemberRegistry::new();

        for person in persons {
            if normalize_name(&person.name).is_empty() {
                warn!("Skipping person with empty name");
                continue;
            }
            registry.register_person(person, self.enrich_attributes);
        }

        let mut edges = Vec::with_capacity(relationships.len());
        for relationship in relationships {
            if let Some(edge) = self.add_relationship(&mut registry, relationship) {
                edges.push(edge);
            }
        }

        debug!(
            "Built graph with {} members and {} edges",
            registry.len(),
            edges.len()
        );

        FamilyGraph { registry, edges }
    }

    fn add_relationship(
        &self,
        registry: &mut MemberRegistry,
        relationship: &Relationship,
    ) -> Option<RelationEdge> {
        if normalize_name(&relationship.person1).is_empty()
            || normalize_name(&relationship.person2).is_empty()
        {
            warn!(
                "Skipping '{}' relationship with an empty name",
                relationship.relation_type
            );
            return None;
        }

        let first = registry.upsert_index(&relationship.person1);
        let second = registry.upsert_index(&relationship.person2);
        registry.note_relationship_confidence(first, relationship.confidence);
        if second != first {
            registry.note_relationship_confidence(second, relationship.confidence);
        }

        match relationship.relation_type.shape() {
            EdgeShape::ParentOf => link_parent(registry, first, second),
            EdgeShape::ChildOf => link_parent(registry, second, first),
            EdgeShape::Spouse => link_spouses(registry, first, second),
            EdgeShape::Lateral => {
                if !relationship.relation_type.is_known() {
                    warn!(
                        "Unknown relation type '{}', kept for display only",
                        relationship.relation_type
                    );
                }
            }
        }

        Some(RelationEdge {
            from: registry.members()[first].id.clone(),
            to: registry.members()[second].id.clone(),
            relation: relationship.relation_type.clone(),
            confidence: relationship.confidence,
        })
    }
}

fn link_parent(registry: &mut MemberRegistry, parent: usize, child: usize) {
    let parent_id = registry.members()[parent].id.clone();
    let child_id = registry.members()[child].id.clone();
    registry.member_mut(parent).add_child(child_id);
    registry.member_mut(child).add_parent(parent_id);
}

/// Single spouse slot, last write wins
///
/// When a member is re-partnered, the previous partner's slot is cleared if
/// it still points back, so the relation stays symmetric.
fn link_spouses(registry: &mut MemberRegistry, a: usize, b: usize) {
    if a == b {
        warn!(
            "Ignoring spouse relation of '{}' with itself",
            registry.members()[a].id
        );
        return;
    }

    for (this, other) in [(a, b), (b, a)] {
        let this_id = registry.members()[this].id.clone();
        let other_id = registry.members()[other].id.clone();
        let previous = registry.member_mut(this).spouse.replace(other_id.clone());

        if let Some(previous) = previous.filter(|p| *p != other_id) {
            warn!(
                "Spouse of '{}' changes from '{}' to '{}'",
                this_id, previous, other_id
            );
            if let Some(prev_idx) = registry.index_of(&previous) {
                let prev_member = registry.member_mut(prev_idx);
                if prev_member.spouse.as_ref() == Some(&this_id) {
                    prev_member.spouse = None;
                }
            }
        }
    }
}
