//! GetAnalysisHandler - Query handler for one analysis with its scenarios.

use std::sync::Arc;

use crate::domain::analysis::{Analysis, AnalysisError, Scenario};
use crate::domain::foundation::AnalysisId;
use crate::ports::{AnalysisRepository, ScenarioRepository};

/// An analysis together with its scenarios, as served by the API.
#[derive(Debug, Clone)]
pub struct AnalysisDetails {
    pub analysis: Analysis,
    pub scenarios: Vec<Scenario>,
}

/// Query to get an analysis by id.
#[derive(Debug, Clone)]
pub struct GetAnalysisQuery {
    pub analysis_id: AnalysisId,
}

/// Handler for retrieving analysis details.
pub struct GetAnalysisHandler {
    analyses: Arc<dyn AnalysisRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
}

impl GetAnalysisHandler {
    pub fn new(
        analyses: Arc<dyn AnalysisRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
    ) -> Self {
        Self {
            analyses,
            scenarios,
        }
    }

    pub async fn handle(&self, query: GetAnalysisQuery) -> Result<AnalysisDetails, AnalysisError> {
        let analysis = self
            .analyses
            .find_by_id(query.analysis_id)
            .await?
            .ok_or_else(|| AnalysisError::not_found(query.analysis_id))?;

        let scenarios = self.scenarios.find_by_analysis_id(analysis.id()).await?;

        Ok(AnalysisDetails {
            analysis,
            scenarios,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryAnalysisRepository, InMemoryScenarioRepository};
    use crate::domain::foundation::{OccupancyRate, PropertyId};
    use crate::domain::revenue::AdjustmentParameters;
    use crate::ports::{AnalysisRepository as _, ScenarioRepository as _};

    #[tokio::test]
    async fn returns_analysis_with_its_scenarios() {
        let analyses = Arc::new(InMemoryAnalysisRepository::new());
        let scenarios = Arc::new(InMemoryScenarioRepository::new());

        let analysis = Analysis::new(
            PropertyId::new(),
            "Fall 2024",
            None,
            OccupancyRate::DEFAULT,
        )
        .unwrap();
        analyses.save(&analysis).await.unwrap();
        let scenario =
            Scenario::new(analysis.id(), "Baseline", AdjustmentParameters::default()).unwrap();
        scenarios.save(&scenario).await.unwrap();

        let handler = GetAnalysisHandler::new(analyses, scenarios);
        let details = handler
            .handle(GetAnalysisQuery {
                analysis_id: analysis.id(),
            })
            .await
            .unwrap();

        assert_eq!(details.analysis.id(), analysis.id());
        assert_eq!(details.scenarios.len(), 1);
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_analysis() {
        let handler = GetAnalysisHandler::new(
            Arc::new(InMemoryAnalysisRepository::new()),
            Arc::new(InMemoryScenarioRepository::new()),
        );

        let result = handler
            .handle(GetAnalysisQuery {
                analysis_id: AnalysisId::new(),
            })
            .await;

        assert!(matches!(result, Err(AnalysisError::NotFound(_))));
    }
}
