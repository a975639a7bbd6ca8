//! HTTP DTOs for scenario endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::Scenario;
use crate::domain::revenue::{
    AdjustmentParameters, ConcessionType, ScenarioResults, WaterfallStep,
};

/// Request body for creating or replacing a scenario.
///
/// Adjustment fields default to zero and the concession to "none", so a
/// minimal body of `analysis_id` + `name` creates a do-nothing baseline.
/// Unknown concession type strings are accepted and treated as "none".
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequest {
    pub analysis_id: String,
    pub name: String,
    #[serde(default)]
    pub base_rent_pct_adj: f64,
    #[serde(default)]
    pub base_rent_dollar_adj: f64,
    #[serde(default)]
    pub amenity_rent_pct_adj: f64,
    #[serde(default)]
    pub amenity_rent_dollar_adj: f64,
    #[serde(default = "default_concession_type")]
    pub concession_type: String,
    #[serde(default)]
    pub concession_value: f64,
}

fn default_concession_type() -> String {
    "none".to_string()
}

impl ScenarioRequest {
    /// Builds the typed adjustment parameters from the wire fields.
    pub fn params(&self) -> AdjustmentParameters {
        AdjustmentParameters {
            base_rent_pct_adj: self.base_rent_pct_adj,
            base_rent_dollar_adj: self.base_rent_dollar_adj,
            amenity_rent_pct_adj: self.amenity_rent_pct_adj,
            amenity_rent_dollar_adj: self.amenity_rent_dollar_adj,
            concession_type: ConcessionType::parse(&self.concession_type),
            concession_value: self.concession_value,
        }
    }
}

/// Computed metrics as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResultsResponse {
    pub total_annual_revenue: f64,
    pub avg_rent_per_unit: f64,
    pub revenue_per_sqft: f64,
    pub weighted_avg_rent: f64,
}

impl From<ScenarioResults> for ScenarioResultsResponse {
    fn from(results: ScenarioResults) -> Self {
        Self {
            total_annual_revenue: results.total_annual_revenue,
            avg_rent_per_unit: results.avg_rent_per_unit,
            revenue_per_sqft: results.revenue_per_sqft,
            weighted_avg_rent: results.weighted_avg_rent,
        }
    }
}

/// Scenario view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponse {
    pub id: String,
    pub analysis_id: String,
    pub name: String,
    pub base_rent_pct_adj: f64,
    pub base_rent_dollar_adj: f64,
    pub amenity_rent_pct_adj: f64,
    pub amenity_rent_dollar_adj: f64,
    pub concession_type: String,
    pub concession_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<ScenarioResultsResponse>,
    pub created_at: String,
}

impl From<Scenario> for ScenarioResponse {
    fn from(scenario: Scenario) -> Self {
        let params = *scenario.params();
        Self {
            id: scenario.id().to_string(),
            analysis_id: scenario.analysis_id().to_string(),
            name: scenario.name().to_string(),
            base_rent_pct_adj: params.base_rent_pct_adj,
            base_rent_dollar_adj: params.base_rent_dollar_adj,
            amenity_rent_pct_adj: params.amenity_rent_pct_adj,
            amenity_rent_dollar_adj: params.amenity_rent_dollar_adj,
            concession_type: params.concession_type.as_str().to_string(),
            concession_value: params.concession_value,
            results: scenario.results().copied().map(Into::into),
            created_at: scenario.created_at().to_rfc3339(),
        }
    }
}

/// Query parameters for the waterfall endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WaterfallQueryParams {
    pub baseline_scenario_id: String,
}

/// One bar of the waterfall chart.
#[derive(Debug, Clone, Serialize)]
pub struct WaterfallStepResponse {
    pub label: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub step_type: String,
}

impl From<WaterfallStep> for WaterfallStepResponse {
    fn from(step: WaterfallStep) -> Self {
        Self {
            label: step.label.to_string(),
            value: step.value,
            step_type: step.step_type.as_str().to_string(),
        }
    }
}

/// Waterfall response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct WaterfallResponse {
    pub waterfall: Vec<WaterfallStepResponse>,
}

impl From<Vec<WaterfallStep>> for WaterfallResponse {
    fn from(steps: Vec<WaterfallStep>) -> Self {
        Self {
            waterfall: steps.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AnalysisId;

    #[test]
    fn minimal_request_yields_default_params() {
        let json = r#"{"analysis_id": "550e8400-e29b-41d4-a716-446655440000", "name": "Baseline"}"#;
        let req: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.params(), AdjustmentParameters::default());
    }

    #[test]
    fn unknown_concession_type_parses_as_none() {
        let json = r#"{
            "analysis_id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Odd",
            "concession_type": "mystery_discount",
            "concession_value": 0.5
        }"#;
        let req: ScenarioRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.params().concession_type, ConcessionType::None);
    }

    #[test]
    fn scenario_response_flattens_params() {
        let scenario = Scenario::new(
            AnalysisId::new(),
            "Optimistic (+5%)",
            AdjustmentParameters::default().with_base_rent_adjustments(0.05, 0.0),
        )
        .unwrap();

        let response: ScenarioResponse = scenario.into();
        assert_eq!(response.base_rent_pct_adj, 0.05);
        assert_eq!(response.concession_type, "none");
        assert!(response.results.is_none());
    }

    #[test]
    fn waterfall_response_wraps_steps() {
        use crate::domain::revenue::WaterfallStepType;
        let steps = vec![WaterfallStep {
            label: "Baseline",
            value: 570_000.0,
            step_type: WaterfallStepType::Base,
        }];

        let response: WaterfallResponse = steps.into();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["waterfall"][0]["label"], "Baseline");
        assert_eq!(json["waterfall"][0]["type"], "base");
    }
}
