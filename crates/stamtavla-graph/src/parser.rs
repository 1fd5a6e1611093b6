//! Parse the extractor's response into an entity draft

use crate::error::GraphError;
use serde_json::{Map, Value};
use stamtavla_domain::{Confidence, EntityDraft, Person, RelationType, Relationship};
use tracing::warn;

/// Parse an extractor response into an entity draft
///
/// The response is a JSON object with `persons`, `places`, `dates`, `events`
/// and `relationships` arrays, optionally wrapped in a Markdown code block.
/// Missing arrays are empty. Persons and relationships that fail validation
/// are skipped with a warning; the rest of the draft still goes through.
pub fn parse_entity_draft(response: &str) -> Result<EntityDraft, GraphError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)?;

    let obj = json
        .as_object()
        .ok_or_else(|| GraphError::InvalidFormat("Expected JSON object".to_string()))?;

    let mut persons = Vec::new();
    for (idx, person_json) in array_field(obj, "persons")?.iter().enumerate() {
        match parse_person_json(person_json) {
            Ok(person) => persons.push(person),
            Err(e) => warn!("Skipping person {}: {}", idx, e),
        }
    }

    let mut relationships = Vec::new();
    for (idx, relationship_json) in array_field(obj, "relationships")?.iter().enumerate() {
        match parse_relationship_json(relationship_json) {
            Ok(relationship) => relationships.push(relationship),
            Err(e) => warn!("Skipping relationship {}: {}", idx, e),
        }
    }

    Ok(EntityDraft {
        persons,
        places: array_field(obj, "places")?.to_vec(),
        dates: array_field(obj, "dates")?.to_vec(),
        events: array_field(obj, "events")?.to_vec(),
        relationships,
    })
}

/// Extract JSON from response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, GraphError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(GraphError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip the opening fence and, if present, the closing one
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        Ok(lines[1..end].join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Get an array field; missing or `null` counts as empty
fn array_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a [Value], GraphError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(GraphError::InvalidFormat(format!("'{}' is not an array", key))),
    }
}

/// Parse a single person from JSON
fn parse_person_json(json: &Value) -> Result<Person, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Person is not a JSON object".to_string())?;

    let name = required_str(obj, "name")?;

    let description = match obj.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err("Invalid 'description'".to_string()),
    };

    Ok(Person {
        name,
        description,
        confidence: parse_confidence(obj)?,
    })
}

/// Parse a single relationship from JSON
fn parse_relationship_json(json: &Value) -> Result<Relationship, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Relationship is not a JSON object".to_string())?;

    let person1 = required_str(obj, "person1")?;
    let person2 = required_str(obj, "person2")?;
    let relation_type = RelationType::parse(&required_str(obj, "type")?);

    Ok(Relationship {
        person1,
        person2,
        relation_type,
        confidence: parse_confidence(obj)?,
    })
}

fn required_str(obj: &Map<String, Value>, key: &str) -> Result<String, String> {
    let value = obj
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing or invalid '{}'", key))?;
    if value.trim().is_empty() {
        return Err(format!("'{}' is empty", key));
    }
    Ok(value.to_string())
}

fn parse_confidence(obj: &Map<String, Value>) -> Result<Confidence, String> {
    match obj.get("confidence") {
        None | Some(Value::Null) => Ok(Confidence::NEUTRAL),
        Some(v) => {
            let value = v
                .as_f64()
                .ok_or_else(|| "Invalid 'confidence'".to_string())?;
            Confidence::new(value)
        }
    }
}
