//! Member module - one deduplicated person in the family graph

use crate::Confidence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a member, derived from its normalized name
///
/// See [`crate::member_id`] for the derivation. Ids order lexically, which
/// the connection materializer relies on to emit each spouse pair once.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Wrap an already-derived id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inferred gender, never authoritative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Unknown or other
    #[default]
    Other,
}

impl Gender {
    /// Get the gender name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Generation value of a member whose generation has not been computed
pub const UNSET_GENERATION: i32 = -1;

/// A node of the family graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique id
    pub id: MemberId,

    /// Display name after normalization
    pub name: String,

    /// Generation depth, [`UNSET_GENERATION`] until assigned
    pub generation: i32,

    /// Horizontal position
    pub x: f64,

    /// Vertical position
    pub y: f64,

    /// Parent ids, in insertion order without duplicates
    pub parents: Vec<MemberId>,

    /// Child ids, in insertion order without duplicates
    pub children: Vec<MemberId>,

    /// Current partner, at most one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spouse: Option<MemberId>,

    /// Inferred gender
    pub gender: Gender,

    /// Year of birth found in the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,

    /// Year of death found in the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub death_year: Option<i32>,

    /// Occupation found in the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,

    /// Place found in the description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Confidence carried from the source entity, or averaged over signals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl Member {
    /// Create a member with no relations and no attributes
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            generation: UNSET_GENERATION,
            x: 0.0,
            y: 0.0,
            parents: Vec::new(),
            children: Vec::new(),
            spouse: None,
            gender: Gender::Other,
            birth_year: None,
            death_year: None,
            occupation: None,
            location: None,
            confidence: None,
        }
    }

    /// Record a parent, keeping the set free of duplicates
    ///
    /// Returns `false` if the parent was already recorded.
    pub fn add_parent(&mut self, parent: MemberId) -> bool {
        push_unique(&mut self.parents, parent)
    }

    /// Record a child, keeping the set free of duplicates
    ///
    /// Returns `false` if the child was already recorded.
    pub fn add_child(&mut self, child: MemberId) -> bool {
        push_unique(&mut self.children, child)
    }
}

fn push_unique(ids: &mut Vec<MemberId>, id: MemberId) -> bool {
    if ids.contains(&id) {
        false
    } else {
        ids.push(id);
        true
    }
}
