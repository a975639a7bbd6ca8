//! HTTP DTOs for analysis endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::analysis::AnalysisDetails;

use crate::adapters::http::scenario::dto::ScenarioResponse;

fn default_occupancy_rate() -> f64 {
    0.95
}

/// Request to create a new analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnalysisRequest {
    pub property_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_occupancy_rate")]
    pub occupancy_rate: f64,
}

/// Query parameters for duplicating an analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct DuplicateAnalysisQuery {
    pub new_name: String,
}

/// Analysis view with its scenarios.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub id: String,
    pub property_id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub occupancy_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_analysis_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub scenarios: Vec<ScenarioResponse>,
}

impl From<AnalysisDetails> for AnalysisResponse {
    fn from(details: AnalysisDetails) -> Self {
        Self {
            id: details.analysis.id().to_string(),
            property_id: details.analysis.property_id().to_string(),
            name: details.analysis.name().to_string(),
            description: details.analysis.description().map(String::from),
            occupancy_rate: details.analysis.occupancy_rate().value(),
            parent_analysis_id: details
                .analysis
                .parent_analysis_id()
                .map(|id| id.to_string()),
            created_at: details.analysis.created_at().to_rfc3339(),
            updated_at: details.analysis.updated_at().to_rfc3339(),
            scenarios: details.scenarios.into_iter().map(Into::into).collect(),
        }
    }
}
