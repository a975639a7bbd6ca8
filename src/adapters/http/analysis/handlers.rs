//! HTTP handlers for analysis endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::analysis::{
    AnalysisDetails, CreateAnalysisCommand, CreateAnalysisHandler, DuplicateAnalysisCommand,
    DuplicateAnalysisHandler, GetAnalysisHandler, GetAnalysisQuery, ListAnalysesHandler,
};
use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{AnalysisId, PropertyId};

use super::dto::{AnalysisResponse, CreateAnalysisRequest, DuplicateAnalysisQuery};

/// Shared handler state for analysis routes.
#[derive(Clone)]
pub struct AnalysisHandlers {
    create_handler: Arc<CreateAnalysisHandler>,
    get_handler: Arc<GetAnalysisHandler>,
    list_handler: Arc<ListAnalysesHandler>,
    duplicate_handler: Arc<DuplicateAnalysisHandler>,
}

impl AnalysisHandlers {
    pub fn new(
        create_handler: Arc<CreateAnalysisHandler>,
        get_handler: Arc<GetAnalysisHandler>,
        list_handler: Arc<ListAnalysesHandler>,
        duplicate_handler: Arc<DuplicateAnalysisHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            duplicate_handler,
        }
    }
}

/// GET /api/analyses - List all analyses
pub async fn list_analyses(State(handlers): State<AnalysisHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(details) => {
            let response: Vec<AnalysisResponse> = details.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// GET /api/analyses/:id - Get an analysis with its scenarios
pub async fn get_analysis(
    State(handlers): State<AnalysisHandlers>,
    Path(analysis_id): Path<String>,
) -> Response {
    let analysis_id = match analysis_id.parse::<AnalysisId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid analysis ID")),
            )
                .into_response()
        }
    };

    match handlers
        .get_handler
        .handle(GetAnalysisQuery { analysis_id })
        .await
    {
        Ok(details) => {
            let response: AnalysisResponse = details.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// POST /api/analyses - Create a new analysis
pub async fn create_analysis(
    State(handlers): State<AnalysisHandlers>,
    Json(req): Json<CreateAnalysisRequest>,
) -> Response {
    let property_id = match req.property_id.parse::<PropertyId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid property ID")),
            )
                .into_response()
        }
    };

    let cmd = CreateAnalysisCommand {
        property_id,
        name: req.name,
        description: req.description,
        occupancy_rate: req.occupancy_rate,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(analysis) => {
            let response: AnalysisResponse = AnalysisDetails {
                analysis,
                scenarios: Vec::new(),
            }
            .into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

/// POST /api/analyses/:id/duplicate - Duplicate an analysis with its scenarios
pub async fn duplicate_analysis(
    State(handlers): State<AnalysisHandlers>,
    Path(analysis_id): Path<String>,
    Query(query): Query<DuplicateAnalysisQuery>,
) -> Response {
    let analysis_id = match analysis_id.parse::<AnalysisId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid analysis ID")),
            )
                .into_response()
        }
    };

    let cmd = DuplicateAnalysisCommand {
        analysis_id,
        new_name: query.new_name,
    };

    match handlers.duplicate_handler.handle(cmd).await {
        Ok(details) => {
            let response: AnalysisResponse = details.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_analysis_error(e),
    }
}

pub(crate) fn handle_analysis_error(error: AnalysisError) -> Response {
    match error {
        AnalysisError::NotFound(_) | AnalysisError::PropertyNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response(),
        AnalysisError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        AnalysisError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
