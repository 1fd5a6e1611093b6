//! Confidence scores attached to extracted entities

use serde::{Deserialize, Serialize};

/// Confidence assigned by the extractor, in [0.0, 1.0]
///
/// A member may be backed by several signals (one person entity per
/// submission, or a handful of relationships naming it). Its confidence is
/// then the plain average of those signals.
///
/// Deserialization goes through [`Confidence::new`], so out-of-range values
/// are rejected at the JSON boundary too.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    /// Confidence used when the extractor omitted one
    pub const NEUTRAL: Confidence = Confidence(0.5);

    /// Create a new confidence value
    ///
    /// # Errors
    /// Returns error if the value is not a finite number in [0, 1]
    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(format!("confidence {} out of range [0.0, 1.0]", value));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Average of several signals, `None` when there are none
    pub fn average<I>(signals: I) -> Option<Confidence>
    where
        I: IntoIterator<Item = Confidence>,
    {
        let (sum, count) = signals
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), c| (sum + c.0, count + 1));
        if count == 0 {
            None
        } else {
            Some(Confidence(sum / count as f64))
        }
    }
}

impl TryFrom<f64> for Confidence {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(confidence: Confidence) -> Self {
        confidence.0
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
