//! Scenario repository port.

use async_trait::async_trait;

use crate::domain::analysis::Scenario;
use crate::domain::foundation::{AnalysisId, DomainError, ScenarioId};

/// Repository port for scenario records.
#[async_trait]
pub trait ScenarioRepository: Send + Sync {
    /// Save a new scenario.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, scenario: &Scenario) -> Result<(), DomainError>;

    /// Replace an existing scenario (also used to store computed results).
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` if the scenario doesn't exist
    async fn update(&self, scenario: &Scenario) -> Result<(), DomainError>;

    /// Find a scenario by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: ScenarioId) -> Result<Option<Scenario>, DomainError>;

    /// Find all scenarios of an analysis, ordered by creation time.
    async fn find_by_analysis_id(
        &self,
        analysis_id: AnalysisId,
    ) -> Result<Vec<Scenario>, DomainError>;
}
