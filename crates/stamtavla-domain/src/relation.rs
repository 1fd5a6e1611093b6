//! Relation vocabulary and the edge shape each relation implies

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation type named by the extractor
///
/// The vocabulary is Swedish and closed. Anything outside it is kept
/// verbatim in [`RelationType::Other`] so it can still be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    /// Mother
    Mor,
    /// Father
    Far,
    /// Son
    Son,
    /// Daughter
    Dotter,
    /// Husband
    Make,
    /// Wife
    Maka,
    /// Partner
    Partner,
    /// Maternal grandmother
    Mormor,
    /// Maternal grandfather
    Morfar,
    /// Paternal grandmother
    Farmor,
    /// Paternal grandfather
    Farfar,
    /// Cousin
    Kusin,
    /// Friend
    Van,
    /// Colleague
    Kollega,
    /// Sister
    Syster,
    /// Brother
    Bror,
    /// Unrecognized relation, lower-cased and trimmed
    Other(String),
}

/// How a relation affects the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeShape {
    /// `person1` is a parent of `person2`
    ParentOf,
    /// `person1` is a child of `person2`
    ChildOf,
    /// `person1` and `person2` are partners
    Spouse,
    /// Drawn, but carries no generational ordering
    Lateral,
}

impl RelationType {
    /// Parse a relation type, case-insensitive and whitespace tolerant
    ///
    /// Never fails: unknown words become [`RelationType::Other`].
    pub fn parse(s: &str) -> Self {
        let lowered = s.trim().to_lowercase();
        match lowered.as_str() {
            "mor" => RelationType::Mor,
            "far" => RelationType::Far,
            "son" => RelationType::Son,
            "dotter" => RelationType::Dotter,
            "make" => RelationType::Make,
            "maka" => RelationType::Maka,
            "partner" => RelationType::Partner,
            "mormor" => RelationType::Mormor,
            "morfar" => RelationType::Morfar,
            "farmor" => RelationType::Farmor,
            "farfar" => RelationType::Farfar,
            "kusin" => RelationType::Kusin,
            "vän" => RelationType::Van,
            "kollega" => RelationType::Kollega,
            "syster" => RelationType::Syster,
            "bror" => RelationType::Bror,
            _ => RelationType::Other(lowered),
        }
    }

    /// Get the relation as its vocabulary word
    pub fn as_str(&self) -> &str {
        match self {
            RelationType::Mor => "mor",
            RelationType::Far => "far",
            RelationType::Son => "son",
            RelationType::Dotter => "dotter",
            RelationType::Make => "make",
            RelationType::Maka => "maka",
            RelationType::Partner => "partner",
            RelationType::Mormor => "mormor",
            RelationType::Morfar => "morfar",
            RelationType::Farmor => "farmor",
            RelationType::Farfar => "farfar",
            RelationType::Kusin => "kusin",
            RelationType::Van => "vän",
            RelationType::Kollega => "kollega",
            RelationType::Syster => "syster",
            RelationType::Bror => "bror",
            RelationType::Other(word) => word,
        }
    }

    /// Classify the relation into the edge shape used by the graph builder
    ///
    /// Grandparent words are lateral: they skip a generation and the
    /// intermediate parent is not known.
    pub fn shape(&self) -> EdgeShape {
        match self {
            RelationType::Mor | RelationType::Far => EdgeShape::ParentOf,
            RelationType::Son | RelationType::Dotter => EdgeShape::ChildOf,
            RelationType::Make | RelationType::Maka | RelationType::Partner => EdgeShape::Spouse,
            _ => EdgeShape::Lateral,
        }
    }

    /// Whether the word belongs to the closed vocabulary
    pub fn is_known(&self) -> bool {
        !matches!(self, RelationType::Other(_))
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RelationType {
    fn from(s: String) -> Self {
        RelationType::parse(&s)
    }
}

impl From<RelationType> for String {
    fn from(r: RelationType) -> Self {
        r.as_str().to_string()
    }
}
