//! Best-effort attribute heuristics over person descriptions
//!
//! Each heuristic is independent and returns `None` when it finds nothing.
//! They are deliberately low-precision: a wrong guess is acceptable, a panic
//! is not. Nothing in generation or layout depends on them.

use regex::Regex;
use stamtavla_domain::{Gender, Member};
use std::sync::LazyLock;

// ============================================================================
// Patterns
// ============================================================================

static BIRTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:born|född)\b\D{0,24}?(?:\d{1,2}\s+\p{L}+\.?\s+)?(\d{4})\b")
        .expect("Invalid regex")
});

static DEATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:died|död|avled)\b\D{0,24}?(?:\d{1,2}\s+\p{L}+\.?\s+)?(\d{4})\b")
        .expect("Invalid regex")
});

static DAGGER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"†\s*(?:\d{1,2}\s+\p{L}+\.?\s+)?(\d{4})\b").expect("Invalid regex"));

/// Location patterns, most specific first
static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(?:[Bb]osatt|[Bb]odde|[Bb]or|[Ff]lyttade|[Vv]äxte upp)\s+(?:i|på|till)\s+(\p{Lu}[\p{L}-]+(?: \p{Lu}[\p{L}-]+)?)",
        r"\b(?:[Rr]esident|[Ll]ived|[Ll]ives|[Mm]oved|[Ss]ettled|[Gg]rew up)\s+(?:in|to|at)\s+(\p{Lu}[\p{L}-]+(?: \p{Lu}[\p{L}-]+)?)",
        r"\b(?:[Ff]rån|[Ff]rom)\s+(\p{Lu}[\p{L}-]+)",
        r"\b(?:i|in)\s+(\p{Lu}[\p{L}-]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid regex"))
    .collect()
});

const MALE_KEYWORDS: &[&str] = &[
    "son", "father", "brother", "husband", "grandfather", "uncle", "sonen", "far", "fadern",
    "pappa", "bror", "brodern", "make", "maken", "farfar", "morfar", "farbror", "morbror",
];

const FEMALE_KEYWORDS: &[&str] = &[
    "daughter", "mother", "sister", "wife", "grandmother", "aunt", "dotter", "dottern", "mor",
    "modern", "mamma", "syster", "systern", "maka", "makan", "fru", "hustru", "farmor",
    "mormor", "faster", "moster",
];

/// Occupations in match order, Swedish then English per pair
const OCCUPATIONS: &[&str] = &[
    "sjuksköterska",
    "nurse",
    "lärarinna",
    "lärare",
    "teacher",
    "läkare",
    "doctor",
    "präst",
    "priest",
    "bonde",
    "farmer",
    "snickare",
    "carpenter",
    "smed",
    "blacksmith",
    "fiskare",
    "fisherman",
    "sjöman",
    "sailor",
    "soldat",
    "soldier",
    "skräddare",
    "tailor",
    "handlare",
    "merchant",
    "ingenjör",
    "engineer",
    "piga",
    "maid",
    "dräng",
    "farmhand",
    "hemmafru",
    "housewife",
];

// ============================================================================
// Enrichment
// ============================================================================

/// Attributes guessed from a person's name and description
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Enrichment {
    /// Year of birth
    pub birth_year: Option<i32>,
    /// Year of death
    pub death_year: Option<i32>,
    /// Gender, `None` when no signal was found
    pub gender: Option<Gender>,
    /// Occupation noun as listed
    pub occupation: Option<String>,
    /// Capitalized place name
    pub location: Option<String>,
}

impl Enrichment {
    /// Overwrite the member's attributes with every value that was found
    pub fn apply_to(&self, member: &mut Member) {
        if let Some(year) = self.birth_year {
            member.birth_year = Some(year);
        }
        if let Some(year) = self.death_year {
            member.death_year = Some(year);
        }
        if let Some(gender) = self.gender {
            member.gender = gender;
        }
        if let Some(occupation) = &self.occupation {
            member.occupation = Some(occupation.clone());
        }
        if let Some(location) = &self.location {
            member.location = Some(location.clone());
        }
    }
}

/// Run every heuristic over a name and its description
pub fn enrich(name: &str, description: &str) -> Enrichment {
    Enrichment {
        birth_year: birth_year(description),
        death_year: death_year(description),
        gender: gender_from_keywords(description).or_else(|| gender_from_surname(name)),
        occupation: occupation(description),
        location: location(description),
    }
}

fn capture_year(pattern: &Regex, text: &str) -> Option<i32> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn birth_year(description: &str) -> Option<i32> {
    capture_year(&BIRTH_PATTERN, description)
}

fn death_year(description: &str) -> Option<i32> {
    capture_year(&DEATH_PATTERN, description).or_else(|| capture_year(&DAGGER_PATTERN, description))
}

/// First role noun in the text decides
fn gender_from_keywords(description: &str) -> Option<Gender> {
    let lowered = description.to_lowercase();
    lowered
        .split(|c: char| !c.is_alphanumeric())
        .find_map(|word| {
            if MALE_KEYWORDS.contains(&word) {
                Some(Gender::Male)
            } else if FEMALE_KEYWORDS.contains(&word) {
                Some(Gender::Female)
            } else {
                None
            }
        })
}

/// Patronymic suffix of the last name, only when there is a last name
fn gender_from_surname(name: &str) -> Option<Gender> {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() < 2 {
        return None;
    }
    let surname = parts[parts.len() - 1].to_lowercase();
    if surname.ends_with("dotter") || surname.ends_with("dottir") {
        Some(Gender::Female)
    } else if surname.ends_with("son") {
        Some(Gender::Male)
    } else {
        None
    }
}

fn occupation(description: &str) -> Option<String> {
    let lowered = description.to_lowercase();
    OCCUPATIONS
        .iter()
        .find(|occupation| lowered.contains(*occupation))
        .map(|occupation| occupation.to_string())
}

fn location(description: &str) -> Option<String> {
    LOCATION_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(description)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_and_death_years() {
        let e = enrich("Anna", "Född 1921 i Uppsala, död 1999.");
        assert_eq!(e.birth_year, Some(1921));
        assert_eq!(e.death_year, Some(1999));

        let e = enrich("Erik", "born on 3 May 1950, died in 2010");
        assert_eq!(e.birth_year, Some(1950));
        assert_eq!(e.death_year, Some(2010));
    }

    #[test]
    fn test_dagger_marker() {
        assert_eq!(enrich("Olof", "f. okänt † 1888").death_year, Some(1888));
    }

    #[test]
    fn test_gender_from_keywords() {
        assert_eq!(enrich("Kim", "Kim är min bror").gender, Some(Gender::Male));
        assert_eq!(enrich("Kim", "my mother's sister").gender, Some(Gender::Female));
        // "person" must not match "son"
        assert_eq!(enrich("Kim", "a kind person").gender, None);
    }

    #[test]
    fn test_gender_from_surname() {
        assert_eq!(enrich("Per Andersson", "").gender, Some(Gender::Male));
        assert_eq!(enrich("Ingrid Johansdotter", "").gender, Some(Gender::Female));
        assert_eq!(enrich("Jason", "").gender, None);
    }

    #[test]
    fn test_keywords_win_over_surname() {
        assert_eq!(enrich("Maria Andersson", "hans fru").gender, Some(Gender::Female));
    }

    #[test]
    fn test_occupation_first_in_list_wins() {
        assert_eq!(enrich("Olle", "Bonde och smed").occupation.as_deref(), Some("bonde"));
        assert_eq!(enrich("Ada", "worked as a nurse").occupation.as_deref(), Some("nurse"));
        assert_eq!(enrich("Ada", "no work mentioned").occupation, None);
    }

    #[test]
    fn test_location_patterns() {
        assert_eq!(
            enrich("Anna", "Hon bodde i Stora Tuna hela livet").location.as_deref(),
            Some("Stora Tuna")
        );
        assert_eq!(enrich("Erik", "Erik kom från Göteborg").location.as_deref(), Some("Göteborg"));
        assert_eq!(enrich("Erik", "He lived in Boston").location.as_deref(), Some("Boston"));
        assert_eq!(enrich("Erik", "född i Uppsala").location.as_deref(), Some("Uppsala"));
        assert_eq!(enrich("Erik", "i skogen").location, None);
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(enrich("Anna", ""), Enrichment::default());
    }

    #[test]
    fn test_apply_keeps_unfound_fields() {
        let mut member = Member::new(stamtavla_domain::member_id("Anna"), "Anna");
        member.occupation = Some("lärare".to_string());
        enrich("Anna", "född 1921").apply_to(&mut member);
        assert_eq!(member.birth_year, Some(1921));
        assert_eq!(member.occupation.as_deref(), Some("lärare"));
    }
}
