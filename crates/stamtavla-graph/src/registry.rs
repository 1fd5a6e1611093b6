//! Member registry: an arena of members keyed by normalized name

use crate::enrichment::enrich;
use stamtavla_domain::{member_id, normalize_name, Confidence, Member, MemberId, Person};
use std::collections::HashMap;

/// Confidence signals seen for one member
#[derive(Debug, Clone, Default)]
struct Signals {
    persons: Vec<Confidence>,
    relationships: Vec<Confidence>,
}

impl Signals {
    /// Person entities outrank relationships mentioning the name
    fn confidence(&self) -> Option<Confidence> {
        if self.persons.is_empty() {
            Confidence::average(self.relationships.iter().copied())
        } else {
            Confidence::average(self.persons.iter().copied())
        }
    }
}

/// Deduplicating store of members, in insertion order
///
/// The registry lives for one graph build. Members are addressed by index
/// inside the builder and by [`MemberId`] everywhere else.
#[derive(Debug, Clone, Default)]
pub struct MemberRegistry {
    members: Vec<Member>,
    signals: Vec<Signals>,
    index: HashMap<MemberId, usize>,
}

impl MemberRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Get a member by id
    pub fn get(&self, id: &MemberId) -> Option<&Member> {
        self.index.get(id).map(|&idx| &self.members[idx])
    }

    /// Get a member by raw name
    pub fn find(&self, name: &str) -> Option<&Member> {
        self.get(&member_id(name))
    }

    /// Members in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Consume the registry, keeping insertion order
    pub fn into_members(self) -> Vec<Member> {
        self.members
    }

    /// Get or create the member for a raw name
    ///
    /// An existing member is returned unchanged.
    pub fn upsert(&mut self, name: &str) -> &mut Member {
        let idx = self.upsert_index(name);
        &mut self.members[idx]
    }

    /// Register a person entity
    ///
    /// The description heuristics run for every registration; values they
    /// find overwrite earlier ones, values they miss leave earlier ones in
    /// place. The person's confidence joins the member's signals.
    pub fn register_person(&mut self, person: &Person, enrich_attributes: bool) -> &Member {
        let idx = self.upsert_index(&person.name);
        if enrich_attributes {
            let display_name = self.members[idx].name.clone();
            enrich(&display_name, &person.description).apply_to(&mut self.members[idx]);
        }
        self.signals[idx].persons.push(person.confidence);
        self.refresh_confidence(idx);
        &self.members[idx]
    }

    pub(crate) fn upsert_index(&mut self, name: &str) -> usize {
        let id = member_id(name);
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.members.len();
        self.members.push(Member::new(id.clone(), normalize_name(name)));
        self.signals.push(Signals::default());
        self.index.insert(id, idx);
        idx
    }

    pub(crate) fn index_of(&self, id: &MemberId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn member_mut(&mut self, idx: usize) -> &mut Member {
        &mut self.members[idx]
    }

    pub(crate) fn note_relationship_confidence(&mut self, idx: usize, confidence: Confidence) {
        self.signals[idx].relationships.push(confidence);
        self.refresh_confidence(idx);
    }

    fn refresh_confidence(&mut self, idx: usize) {
        self.members[idx].confidence = self.signals[idx].confidence();
    }
}
