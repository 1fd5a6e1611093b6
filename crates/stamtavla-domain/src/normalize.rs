//! Name normalization
//!
//! Diary text refers to its writer in many ways ("jag", "skribenten",
//! "the author", ...). All of them collapse to one display label before any
//! graph operation runs, so the writer becomes exactly one member.

use crate::MemberId;

/// Display name of the diary writer
pub const SUBJECT_LABEL: &str = "Skribenten";

/// Lower-cased aliases that refer to the writer, Swedish first
const SUBJECT_ALIASES: &[&str] = &[
    "skribenten",
    "skribent",
    "författaren",
    "berättaren",
    "dagboksskrivaren",
    "jag",
    "mig",
    "the writer",
    "writer",
    "the author",
    "author",
    "the narrator",
    "narrator",
    "i",
    "me",
];

/// Canonicalize a raw name
///
/// Aliases of the writer become [`SUBJECT_LABEL`]; any other name is only
/// trimmed.
///
/// # Examples
///
/// ```
/// use stamtavla_domain::{normalize_name, SUBJECT_LABEL};
///
/// assert_eq!(normalize_name("  Jag "), SUBJECT_LABEL);
/// assert_eq!(normalize_name(" Anna Berg "), "Anna Berg");
/// ```
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();
    if SUBJECT_ALIASES.contains(&lowered.as_str()) {
        SUBJECT_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Derive the member id for a raw name
///
/// The name is normalized, lower-cased and every run of internal whitespace
/// becomes a single hyphen.
///
/// # Examples
///
/// ```
/// use stamtavla_domain::member_id;
///
/// assert_eq!(member_id(" Anna  Berg").as_str(), "anna-berg");
/// ```
pub fn member_id(raw: &str) -> MemberId {
    let normalized = normalize_name(raw).to_lowercase();
    let slug: Vec<&str> = normalized.split_whitespace().collect();
    MemberId::new(slug.join("-"))
}

/// Whether a raw name refers to the writer
pub fn is_subject(raw: &str) -> bool {
    normalize_name(raw) == SUBJECT_LABEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_map_to_subject() {
        for alias in ["jag", "Skribenten", "THE WRITER", " I ", "the narrator", "Författaren"] {
            assert_eq!(normalize_name(alias), SUBJECT_LABEL, "alias {alias:?}");
        }
    }

    #[test]
    fn test_other_names_are_trimmed_only() {
        assert_eq!(normalize_name("  Erik "), "Erik");
        assert_eq!(normalize_name("Ingrid Johansdotter"), "Ingrid Johansdotter");
    }

    #[test]
    fn test_alias_must_match_whole_name() {
        assert_eq!(normalize_name("Ivar"), "Ivar");
        assert_eq!(normalize_name("jag själv"), "jag själv");
    }

    #[test]
    fn test_member_id_slug() {
        assert_eq!(member_id("Anna Berg").as_str(), "anna-berg");
        assert_eq!(member_id("Anna \t Berg").as_str(), "anna-berg");
        assert_eq!(member_id("jag").as_str(), "skribenten");
    }

    #[test]
    fn test_is_subject() {
        assert!(is_subject("The Author"));
        assert!(!is_subject("Anna"));
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(normalize_name("   "), "");
        assert_eq!(member_id("   ").as_str(), "");
    }
}
