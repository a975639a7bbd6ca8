//! CreateScenarioHandler - Command handler for creating scenarios.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{Scenario, ScenarioError};
use crate::domain::foundation::AnalysisId;
use crate::domain::revenue::AdjustmentParameters;
use crate::ports::{AnalysisRepository, ScenarioRepository};

/// Command to create a new scenario within an analysis.
#[derive(Debug, Clone)]
pub struct CreateScenarioCommand {
    pub analysis_id: AnalysisId,
    pub name: String,
    pub params: AdjustmentParameters,
}

/// Handler for creating scenarios.
pub struct CreateScenarioHandler {
    analyses: Arc<dyn AnalysisRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
}

impl CreateScenarioHandler {
    pub fn new(
        analyses: Arc<dyn AnalysisRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
    ) -> Self {
        Self {
            analyses,
            scenarios,
        }
    }

    pub async fn handle(&self, cmd: CreateScenarioCommand) -> Result<Scenario, ScenarioError> {
        info!(analysis_id = %cmd.analysis_id, "creating scenario");

        if self
            .analyses
            .find_by_id(cmd.analysis_id)
            .await?
            .is_none()
        {
            return Err(ScenarioError::analysis_not_found(cmd.analysis_id));
        }

        let scenario = Scenario::new(cmd.analysis_id, cmd.name, cmd.params)?;
        self.scenarios.save(&scenario).await?;

        Ok(scenario)
    }
}
