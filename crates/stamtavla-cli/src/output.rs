//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use stamtavla_domain::Member;
use stamtavla_graph::TreePayload;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a built family tree.
    pub fn format_payload(&self, payload: &TreePayload) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(payload)?),
            OutputFormat::Table => Ok(self.format_payload_table(payload)),
            OutputFormat::Quiet => Ok(format_payload_quiet(payload)),
        }
    }

    /// Format members as a table followed by a summary line.
    fn format_payload_table(&self, payload: &TreePayload) -> String {
        if payload.members.is_empty() {
            return self.colorize("No members found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record([
            "ID", "Name", "Gen", "X", "Y", "Gender", "Born", "Died", "Occupation", "Location",
            "Spouse",
        ]);

        for member in &payload.members {
            builder.push_record(member_row(member));
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let summary = format!(
            "{} member(s), {} generation(s), {} connection(s)",
            payload.metadata.total_members,
            payload.metadata.generations,
            payload.connections.len()
        );
        format!("{}\n{}", table, self.info(&summary))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn member_row(member: &Member) -> Vec<String> {
    let optional = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    vec![
        member.id.to_string(),
        member.name.clone(),
        member.generation.to_string(),
        format!("{:.1}", member.x),
        format!("{:.1}", member.y),
        member.gender.as_str().to_string(),
        optional(member.birth_year.map(|y| y.to_string())),
        optional(member.death_year.map(|y| y.to_string())),
        optional(member.occupation.clone()),
        optional(member.location.clone()),
        optional(member.spouse.as_ref().map(|s| s.to_string())),
    ]
}

/// Member ids, one per line.
fn format_payload_quiet(payload: &TreePayload) -> String {
    let ids: Vec<&str> = payload.members.iter().map(|m| m.id.as_str()).collect();
    ids.join("\n")
}
