//! HTTP handlers for scenario endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::scenario::{
    CalculateScenarioCommand, CalculateScenarioHandler, CreateScenarioCommand,
    CreateScenarioHandler, GetWaterfallHandler, GetWaterfallQuery, UpdateScenarioCommand,
    UpdateScenarioHandler,
};
use crate::domain::analysis::ScenarioError;
use crate::domain::foundation::{AnalysisId, ScenarioId};

use super::dto::{ScenarioRequest, ScenarioResponse, WaterfallQueryParams, WaterfallResponse};

/// Shared handler state for scenario routes.
#[derive(Clone)]
pub struct ScenarioHandlers {
    create_handler: Arc<CreateScenarioHandler>,
    update_handler: Arc<UpdateScenarioHandler>,
    calculate_handler: Arc<CalculateScenarioHandler>,
    waterfall_handler: Arc<GetWaterfallHandler>,
}

impl ScenarioHandlers {
    pub fn new(
        create_handler: Arc<CreateScenarioHandler>,
        update_handler: Arc<UpdateScenarioHandler>,
        calculate_handler: Arc<CalculateScenarioHandler>,
        waterfall_handler: Arc<GetWaterfallHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            calculate_handler,
            waterfall_handler,
        }
    }
}

/// POST /api/scenarios - Create a new scenario
pub async fn create_scenario(
    State(handlers): State<ScenarioHandlers>,
    Json(req): Json<ScenarioRequest>,
) -> Response {
    let analysis_id = match req.analysis_id.parse::<AnalysisId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid analysis ID")),
            )
                .into_response()
        }
    };

    let cmd = CreateScenarioCommand {
        analysis_id,
        name: req.name.clone(),
        params: req.params(),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(scenario) => {
            let response: ScenarioResponse = scenario.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// PUT /api/scenarios/:id - Replace a scenario's name and parameters
pub async fn update_scenario(
    State(handlers): State<ScenarioHandlers>,
    Path(scenario_id): Path<String>,
    Json(req): Json<ScenarioRequest>,
) -> Response {
    let scenario_id = match scenario_id.parse::<ScenarioId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid scenario ID")),
            )
                .into_response()
        }
    };

    let cmd = UpdateScenarioCommand {
        scenario_id,
        name: req.name.clone(),
        params: req.params(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(scenario) => {
            let response: ScenarioResponse = scenario.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// GET /api/scenarios/:id/calculate - Calculate metrics for a scenario
pub async fn calculate_scenario(
    State(handlers): State<ScenarioHandlers>,
    Path(scenario_id): Path<String>,
) -> Response {
    let scenario_id = match scenario_id.parse::<ScenarioId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid scenario ID")),
            )
                .into_response()
        }
    };

    match handlers
        .calculate_handler
        .handle(CalculateScenarioCommand { scenario_id })
        .await
    {
        Ok(scenario) => {
            let response: ScenarioResponse = scenario.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

/// GET /api/scenarios/:id/waterfall - Waterfall versus a baseline scenario
pub async fn get_waterfall(
    State(handlers): State<ScenarioHandlers>,
    Path(scenario_id): Path<String>,
    Query(params): Query<WaterfallQueryParams>,
) -> Response {
    let scenario_id = match scenario_id.parse::<ScenarioId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid scenario ID")),
            )
                .into_response()
        }
    };
    let baseline_scenario_id = match params.baseline_scenario_id.parse::<ScenarioId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid baseline scenario ID")),
            )
                .into_response()
        }
    };

    match handlers
        .waterfall_handler
        .handle(GetWaterfallQuery {
            scenario_id,
            baseline_scenario_id,
        })
        .await
    {
        Ok(steps) => {
            let response: WaterfallResponse = steps.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_scenario_error(e),
    }
}

pub(crate) fn handle_scenario_error(error: ScenarioError) -> Response {
    match error {
        ScenarioError::NotFound(_) | ScenarioError::AnalysisNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response(),
        ScenarioError::NoFloorplans(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ScenarioError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        ScenarioError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
