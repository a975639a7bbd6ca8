//! UpdateScenarioHandler - Command handler for updating scenarios.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{Scenario, ScenarioError};
use crate::domain::foundation::ScenarioId;
use crate::domain::revenue::AdjustmentParameters;
use crate::ports::ScenarioRepository;

/// Command to replace a scenario's name and parameters.
#[derive(Debug, Clone)]
pub struct UpdateScenarioCommand {
    pub scenario_id: ScenarioId,
    pub name: String,
    pub params: AdjustmentParameters,
}

/// Handler for updating scenarios.
///
/// Stored results are cleared by the update; they were computed for the old
/// parameters.
pub struct UpdateScenarioHandler {
    scenarios: Arc<dyn ScenarioRepository>,
}

impl UpdateScenarioHandler {
    pub fn new(scenarios: Arc<dyn ScenarioRepository>) -> Self {
        Self { scenarios }
    }

    pub async fn handle(&self, cmd: UpdateScenarioCommand) -> Result<Scenario, ScenarioError> {
        info!(scenario_id = %cmd.scenario_id, "updating scenario");

        let mut scenario = self
            .scenarios
            .find_by_id(cmd.scenario_id)
            .await?
            .ok_or_else(|| ScenarioError::not_found(cmd.scenario_id))?;

        scenario.update(cmd.name, cmd.params)?;
        self.scenarios.update(&scenario).await?;

        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryScenarioRepository;
    use crate::domain::foundation::AnalysisId;
    use crate::domain::revenue::{ConcessionType, ScenarioResults};
    use crate::ports::ScenarioRepository as _;

    #[tokio::test]
    async fn update_replaces_params_and_clears_results() {
        let scenarios = Arc::new(InMemoryScenarioRepository::new());
        let mut scenario =
            Scenario::new(AnalysisId::new(), "Baseline", AdjustmentParameters::default()).unwrap();
        scenario.record_results(ScenarioResults {
            total_annual_revenue: 570_000.0,
            avg_rent_per_unit: 1_187.50,
            revenue_per_sqft: 31.67,
            weighted_avg_rent: 1_250.0,
        });
        scenarios.save(&scenario).await.unwrap();

        let handler = UpdateScenarioHandler::new(scenarios.clone());
        let updated = handler
            .handle(UpdateScenarioCommand {
                scenario_id: scenario.id(),
                name: "Aggressive".to_string(),
                params: AdjustmentParameters::default()
                    .with_concession(ConcessionType::Percentage, 0.05),
            })
            .await
            .unwrap();

        assert_eq!(updated.name(), "Aggressive");
        assert!(updated.results().is_none());

        let stored = scenarios.find_by_id(scenario.id()).await.unwrap().unwrap();
        assert_eq!(stored.params().concession_type, ConcessionType::Percentage);
    }

    #[tokio::test]
    async fn rejects_unknown_scenario() {
        let handler = UpdateScenarioHandler::new(Arc::new(InMemoryScenarioRepository::new()));
        let result = handler
            .handle(UpdateScenarioCommand {
                scenario_id: ScenarioId::new(),
                name: "Missing".to_string(),
                params: AdjustmentParameters::default(),
            })
            .await;
        assert!(matches!(result, Err(ScenarioError::NotFound(_))));
    }
}
