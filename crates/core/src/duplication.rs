//! Pipeline duplication workflow
//!
//! Duplication is four dependent stages:
//!
//! 1. fetch the source configuration and rules (concurrently)
//! 2. create an empty pipeline under the new name
//! 3. copy the definition onto it and save it
//! 4. fetch the new pipeline's default rules, copy the source rules onto
//!    them and save them
//!
//! The first failure aborts the remaining stages and is returned unchanged.
//! Nothing created by an earlier stage is cleaned up.

use sdc_domain::{PipelineConfiguration, PipelineRules, Result};
use tracing::{debug, info};

use crate::client::PipelineAgentApi;

/// Runs the duplication stages against a pipeline namespace
pub struct PipelineDuplicator<'a> {
    api: PipelineAgentApi<'a>,
}

impl<'a> PipelineDuplicator<'a> {
    pub fn new(api: PipelineAgentApi<'a>) -> Self {
        Self { api }
    }

    /// Duplicate `source` as `name`, returning the saved configuration
    pub async fn duplicate(
        &self,
        name: &str,
        description: &str,
        source: &str,
    ) -> Result<PipelineConfiguration> {
        info!(source, name, "duplicating pipeline");

        let (source_config, source_rules) = futures::try_join!(
            self.api.pipeline_config(Some(source)),
            self.api.pipeline_rules(source),
        )?;
        let source_config: PipelineConfiguration = source_config.json()?;
        let source_rules: PipelineRules = source_rules.json()?;
        debug!(source, "fetched source configuration and rules");

        let mut duplicate: PipelineConfiguration =
            self.api.create_pipeline_config(name, description).await?.json()?;
        debug!(name, "created empty pipeline");

        duplicate.adopt_definition(&source_config);
        let saved: PipelineConfiguration =
            self.api.save_pipeline_config(Some(name), &duplicate).await?.json()?;
        debug!(name, "saved duplicated definition");

        let mut rules: PipelineRules = self.api.pipeline_rules(name).await?.json()?;
        rules.adopt_rules(&source_rules);
        self.api.save_pipeline_rules(name, &rules).await?;

        info!(source, name, "pipeline duplicated");
        Ok(saved)
    }
}
