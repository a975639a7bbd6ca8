//! CalculateScenarioHandler - Command handler for computing scenario metrics.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{Scenario, ScenarioError};
use crate::domain::foundation::ScenarioId;
use crate::domain::revenue::compute_scenario_metrics;
use crate::ports::{AnalysisRepository, FloorplanRepository, ScenarioRepository};

/// Command to calculate metrics for a scenario.
#[derive(Debug, Clone)]
pub struct CalculateScenarioCommand {
    pub scenario_id: ScenarioId,
}

/// Handler for calculating scenario metrics.
///
/// Resolves scenario → analysis → floorplans, rejects an empty floorplan set
/// before the calculator runs, and stores the computed results back on the
/// scenario record.
pub struct CalculateScenarioHandler {
    scenarios: Arc<dyn ScenarioRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    floorplans: Arc<dyn FloorplanRepository>,
}

impl CalculateScenarioHandler {
    pub fn new(
        scenarios: Arc<dyn ScenarioRepository>,
        analyses: Arc<dyn AnalysisRepository>,
        floorplans: Arc<dyn FloorplanRepository>,
    ) -> Self {
        Self {
            scenarios,
            analyses,
            floorplans,
        }
    }

    pub async fn handle(&self, cmd: CalculateScenarioCommand) -> Result<Scenario, ScenarioError> {
        info!(scenario_id = %cmd.scenario_id, "calculating scenario metrics");

        let mut scenario = self
            .scenarios
            .find_by_id(cmd.scenario_id)
            .await?
            .ok_or_else(|| ScenarioError::not_found(cmd.scenario_id))?;

        let analysis = self
            .analyses
            .find_by_id(scenario.analysis_id())
            .await?
            .ok_or_else(|| ScenarioError::analysis_not_found(scenario.analysis_id()))?;

        let floorplans = self
            .floorplans
            .find_by_property_id(analysis.property_id())
            .await?;
        if floorplans.is_empty() {
            return Err(ScenarioError::no_floorplans(analysis.property_id()));
        }

        let results = compute_scenario_metrics(
            &floorplans,
            scenario.params(),
            analysis.occupancy_rate().value(),
        );

        scenario.record_results(results);
        self.scenarios.update(&scenario).await?;

        Ok(scenario)
    }
}
