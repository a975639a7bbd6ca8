//! Scenario entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisId, ScenarioId, Timestamp, ValidationError};
use crate::domain::revenue::{AdjustmentParameters, ScenarioResults};

/// A named set of rent-adjustment and concession parameters within an
/// analysis.
///
/// Computed results are cached on the record and cleared whenever the
/// parameters change, so a stored result always matches the stored
/// parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    id: ScenarioId,
    analysis_id: AnalysisId,
    name: String,
    #[serde(flatten)]
    params: AdjustmentParameters,
    results: Option<ScenarioResults>,
    created_at: Timestamp,
}

impl Scenario {
    /// Creates a new scenario with no computed results.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty
    pub fn new(
        analysis_id: AnalysisId,
        name: impl Into<String>,
        params: AdjustmentParameters,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Self {
            id: ScenarioId::new(),
            analysis_id,
            name,
            params,
            results: None,
            created_at: Timestamp::now(),
        })
    }

    /// Replaces the scenario's name and parameters.
    ///
    /// Clears any stored results: they were computed for the old parameters
    /// and would be stale. Keeps the original creation time.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the new name is empty
    pub fn update(
        &mut self,
        name: impl Into<String>,
        params: AdjustmentParameters,
    ) -> Result<(), ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        self.name = name;
        self.params = params;
        self.results = None;
        Ok(())
    }

    /// Stores computed results for the current parameters.
    pub fn record_results(&mut self, results: ScenarioResults) {
        self.results = Some(results);
    }

    /// Creates a copy of this scenario under another analysis.
    ///
    /// Used when an analysis is duplicated: the copy keeps the name,
    /// parameters, and any stored results, but gets a fresh id and creation
    /// time.
    pub fn duplicate_into(&self, analysis_id: AnalysisId) -> Self {
        Self {
            id: ScenarioId::new(),
            analysis_id,
            name: self.name.clone(),
            params: self.params,
            results: self.results,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the scenario id.
    pub fn id(&self) -> ScenarioId {
        self.id
    }

    /// Returns the owning analysis id.
    pub fn analysis_id(&self) -> AnalysisId {
        self.analysis_id
    }

    /// Returns the scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adjustment parameters.
    pub fn params(&self) -> &AdjustmentParameters {
        &self.params
    }

    /// Returns the stored results, if the scenario has been calculated.
    pub fn results(&self) -> Option<&ScenarioResults> {
        self.results.as_ref()
    }

    /// Returns when the scenario was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
