//! GetWaterfallHandler - Query handler for scenario-vs-baseline waterfalls.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::ScenarioError;
use crate::domain::foundation::ScenarioId;
use crate::domain::revenue::{compute_waterfall, WaterfallStep};
use crate::ports::{AnalysisRepository, FloorplanRepository, ScenarioRepository};

/// Query for the revenue waterfall between a baseline and a subject scenario.
#[derive(Debug, Clone)]
pub struct GetWaterfallQuery {
    pub scenario_id: ScenarioId,
    pub baseline_scenario_id: ScenarioId,
}

/// Handler for computing waterfall attributions.
///
/// The subject scenario's analysis supplies the floorplan set and occupancy
/// rate; the two scenarios are assumed (not enforced) to belong to the same
/// analysis.
pub struct GetWaterfallHandler {
    scenarios: Arc<dyn ScenarioRepository>,
    analyses: Arc<dyn AnalysisRepository>,
    floorplans: Arc<dyn FloorplanRepository>,
}

impl GetWaterfallHandler {
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

    pub async fn handle(
        &self,
        query: GetWaterfallQuery,
    ) -> Result<Vec<WaterfallStep>, ScenarioError> {
        info!(
            scenario_id = %query.scenario_id,
            baseline_scenario_id = %query.baseline_scenario_id,
            "calculating waterfall"
        );

        let scenario = self
            .scenarios
            .find_by_id(query.scenario_id)
            .await?
            .ok_or_else(|| ScenarioError::not_found(query.scenario_id))?;

        let baseline = self
            .scenarios
            .find_by_id(query.baseline_scenario_id)
            .await?
            .ok_or_else(|| ScenarioError::not_found(query.baseline_scenario_id))?;

        let analysis = self
            .analyses
            .find_by_id(scenario.analysis_id())
            .await?
            .ok_or_else(|| ScenarioError::analysis_not_found(scenario.analysis_id()))?;

        let floorplans = self
            .floorplans
            .find_by_property_id(analysis.property_id())
            .await?;

        Ok(compute_waterfall(
            &floorplans,
            baseline.params(),
            scenario.params(),
            analysis.occupancy_rate().value(),
        ))
    }
}
