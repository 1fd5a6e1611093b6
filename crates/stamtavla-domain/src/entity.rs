//! Entity draft: what the external extractor hands over

use crate::{Confidence, RelationType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A person mentioned in the source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Raw name as written
    pub name: String,

    /// Free-text description gathered by the extractor
    #[serde(default)]
    pub description: String,

    /// Extractor confidence
    #[serde(default)]
    pub confidence: Confidence,
}

impl Person {
    /// Create a person with an empty description and neutral confidence
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            confidence: Confidence::NEUTRAL,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a confidence
    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }
}

/// A pairwise relationship between two raw names
///
/// `relation_type` reads as "`person1` is the <type> of `person2`":
/// `{Anna, Erik, mor}` says Anna is Erik's mother.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// First person, raw name
    pub person1: String,

    /// Second person, raw name
    pub person2: String,

    /// Relation word
    #[serde(rename = "type")]
    pub relation_type: RelationType,

    /// Extractor confidence
    #[serde(default)]
    pub confidence: Confidence,
}

impl Relationship {
    /// Create a relationship with neutral confidence
    pub fn new(
        person1: impl Into<String>,
        person2: impl Into<String>,
        relation_type: RelationType,
    ) -> Self {
        Self {
            person1: person1.into(),
            person2: person2.into(),
            relation_type,
            confidence: Confidence::NEUTRAL,
        }
    }
}

/// Everything the extractor found in one submission
///
/// Only `persons` and `relationships` feed the family graph; places, dates
/// and events are carried as opaque JSON for downstream display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityDraft {
    /// Persons
    #[serde(default)]
    pub persons: Vec<Person>,

    /// Places, untouched
    #[serde(default)]
    pub places: Vec<Value>,

    /// Dates, untouched
    #[serde(default)]
    pub dates: Vec<Value>,

    /// Events, untouched
    #[serde(default)]
    pub events: Vec<Value>,

    /// Relationships
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl EntityDraft {
    /// Whether the draft carries nothing the graph can use
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.relationships.is_empty()
    }

    /// Append another submission's entities to this one
    ///
    /// Nothing is deduplicated here; colliding names merge when the graph
    /// is built.
    pub fn merge(&mut self, other: EntityDraft) {
        self.persons.extend(other.persons);
        self.places.extend(other.places);
        self.dates.extend(other.dates);
        self.events.extend(other.events);
        self.relationships.extend(other.relationships);
    }
}
