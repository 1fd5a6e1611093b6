//! Build command implementation.

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::source::JsonSource;
use stamtavla_domain::traits::EntitySource;
use stamtavla_graph::{FamilyTree, TreePayload};

/// Execute the build command.
pub fn execute_build(args: BuildArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let payload = build_payload(&args, config)?;

    if payload.members.is_empty() {
        eprintln!("{}", formatter.warning("Draft contains no persons or relationships"));
    }

    println!("{}", formatter.format_payload(&payload)?);
    Ok(())
}

/// Load the draft and run the pipeline with command-line overrides applied.
pub fn build_payload(args: &BuildArgs, config: &Config) -> Result<TreePayload> {
    let mut graph_config = config.graph.clone();
    if args.no_enrich {
        graph_config.enrich_attributes = false;
    }
    let layout = args.layout.map(Into::into).unwrap_or(graph_config.layout);

    let draft = JsonSource::new(args.input.clone()).load()?;
    let tree = FamilyTree::new(graph_config)?;
    Ok(tree.build_with_layout(&draft, layout)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LayoutArg;
    use crate::error::CliError;
    use stamtavla_graph::GraphError;
    use std::fs;
    use std::path::Path;

    fn write_draft(dir: &Path, json: &str) -> std::path::PathBuf {
        let path = dir.join("draft.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_build_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_draft(
            dir.path(),
            r#"{
                "persons": [{"name": "Anna", "description": "född 1921"}],
                "relationships": [{"person1": "Anna", "person2": "Jag", "type": "mor"}]
            }"#,
        );
        let args = BuildArgs {
            input: Some(input),
            layout: Some(LayoutArg::Radial),
            no_enrich: true,
        };

        let payload = build_payload(&args, &Config::default()).unwrap();
        assert_eq!(payload.metadata.total_members, 2);
        assert_eq!(payload.members[0].birth_year, None);

        let subject = payload
            .members
            .iter()
            .find(|m| m.id.as_str() == "skribenten")
            .unwrap();
        assert_eq!((subject.x, subject.y), (400.0, 300.0));
    }

    #[test]
    fn test_cycle_surfaces_as_graph_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_draft(
            dir.path(),
            r#"{"relationships": [
                {"person1": "A", "person2": "B", "type": "far"},
                {"person1": "A", "person2": "B", "type": "son"}
            ]}"#,
        );
        let args = BuildArgs {
            input: Some(input),
            layout: None,
            no_enrich: false,
        };
        assert!(matches!(
            build_payload(&args, &Config::default()),
            Err(CliError::Graph(GraphError::CycleDetected { .. }))
        ));
    }
}
