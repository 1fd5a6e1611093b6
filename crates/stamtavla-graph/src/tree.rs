//! The full pipeline from entity draft to payload

use crate::builder::GraphBuilder;
use crate::config::{GraphConfig, LayoutMode};
use crate::connections::materialize;
use crate::error::GraphError;
use crate::generation::assign_generations;
use crate::layout::{apply_layout, layout_for};
use crate::types::{TreeMetadata, TreePayload};
use stamtavla_domain::EntityDraft;
use tracing::info;

/// Builds positioned family trees from entity drafts
#[derive(Debug, Clone)]
pub struct FamilyTree {
    config: GraphConfig,
}

impl FamilyTree {
    /// Create a pipeline with a validated configuration
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate().map_err(GraphError::Config)?;
        Ok(Self { config })
    }

    /// Create a pipeline with the default configuration
    pub fn default_config() -> Self {
        Self {
            config: GraphConfig::default(),
        }
    }

    /// The configuration in use
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Build with the configured layout
    pub fn build(&self, draft: &EntityDraft) -> Result<TreePayload, GraphError> {
        self.build_with_layout(draft, self.config.layout)
    }

    /// Build with an explicit layout
    ///
    /// # Errors
    /// [`GraphError::CycleDetected`] when the parent/child relations loop.
    pub fn build_with_layout(
        &self,
        draft: &EntityDraft,
        mode: LayoutMode,
    ) -> Result<TreePayload, GraphError> {
        info!(
            "Building family tree from {} persons and {} relationships ({:?} layout)",
            draft.persons.len(),
            draft.relationships.len(),
            mode
        );

        let graph = GraphBuilder::new(&self.config).build(&draft.persons, &draft.relationships);
        let mut members = graph.registry.into_members();

        let report = assign_generations(&mut members)?;
        apply_layout(layout_for(mode, &self.config).as_ref(), &mut members);
        let connections = materialize(&members);

        info!(
            "Family tree complete: {} members, {} generations, {} connections ({} passes)",
            members.len(),
            report.distinct_generations,
            connections.len(),
            report.passes
        );

        Ok(TreePayload {
            metadata: TreeMetadata {
                total_members: members.len(),
                generations: report.distinct_generations,
            },
            members,
            connections,
            relations: graph.edges,
        })
    }
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::default_config()
    }
}
