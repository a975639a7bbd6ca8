//! ListAnalysesHandler - Query handler for all analyses.

use std::sync::Arc;

use crate::domain::analysis::AnalysisError;
use crate::ports::{AnalysisRepository, ScenarioRepository};

use super::AnalysisDetails;

/// Handler for listing every analysis with its scenarios.
pub struct ListAnalysesHandler {
    analyses: Arc<dyn AnalysisRepository>,
    scenarios: Arc<dyn ScenarioRepository>,
}

impl ListAnalysesHandler {
    pub fn new(
        analyses: Arc<dyn AnalysisRepository>,
        scenarios: Arc<dyn ScenarioRepository>,
    ) -> Self {
        Self {
            analyses,
            scenarios,
        }
    }

    pub async fn handle(&self) -> Result<Vec<AnalysisDetails>, AnalysisError> {
        let mut details = Vec::new();
        for analysis in self.analyses.list().await? {
            let scenarios = self.scenarios.find_by_analysis_id(analysis.id()).await?;
            details.push(AnalysisDetails {
                analysis,
                scenarios,
            });
        }
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{
        seed_sample_data, InMemoryAnalysisRepository, InMemoryFloorplanRepository,
        InMemoryPropertyRepository, InMemoryScenarioRepository,
    };

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListAnalysesHandler::new(
            Arc::new(InMemoryAnalysisRepository::new()),
            Arc::new(InMemoryScenarioRepository::new()),
        );
        assert!(handler.handle().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seeded_store_lists_analysis_with_scenarios() {
        let analyses = Arc::new(InMemoryAnalysisRepository::new());
        let scenarios = Arc::new(InMemoryScenarioRepository::new());
        seed_sample_data(
            &InMemoryPropertyRepository::new(),
            &InMemoryFloorplanRepository::new(),
            analyses.as_ref(),
            scenarios.as_ref(),
        )
        .await
        .unwrap();

        let handler = ListAnalysesHandler::new(analyses, scenarios);
        let details = handler.handle().await.unwrap();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].scenarios.len(), 3);
    }
}
