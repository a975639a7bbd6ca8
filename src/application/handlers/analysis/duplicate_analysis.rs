//! DuplicateAnalysisHandler - Command handler for duplicating analyses.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::AnalysisId;
use crate::ports::{AnalysisRepository, ScenarioRepository};

use super::AnalysisDetails;

/// Command to duplicate an analysis with all of its scenarios.
#[derive(Debug, Clone)]
pub struct DuplicateAnalysisCommand {
    pub analysis_id: AnalysisId,
    pub new_name: String,
}

/// Handler for duplicating analyses.
///
/// The copy keeps the source's property and occupancy assumption and records
/// the source as its parent; every scenario is copied into the new analysis
/// with its parameters and any stored results.
pub struct DuplicateAnalysisHandler {
    analyses: Arc<dyn AnalysisRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
}

impl DuplicateAnalysisHandler {
    pub fn new(
        analyses: Arc<dyn AnalysisRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
    ) -> Self {
        Self {
            analyses,
            scenarios,
        }
    }

    pub async fn handle(
        &self,
        cmd: DuplicateAnalysisCommand,
    ) -> Result<AnalysisDetails, AnalysisError> {
        info!(analysis_id = %cmd.analysis_id, "duplicating analysis");

        let original = self
            .analyses
            .find_by_id(cmd.analysis_id)
            .await?
            .ok_or_else(|| AnalysisError::not_found(cmd.analysis_id))?;

        let copy = original.duplicate(cmd.new_name)?;
        self.analyses.save(&copy).await?;

        let mut copied_scenarios = Vec::new();
        for scenario in self.scenarios.find_by_analysis_id(original.id()).await? {
            let scenario_copy = scenario.duplicate_into(copy.id());
            self.scenarios.save(&scenario_copy).await?;
            copied_scenarios.push(scenario_copy);
        }

        Ok(AnalysisDetails {
            analysis: copy,
            scenarios: copied_scenarios,
        })
    }
}
