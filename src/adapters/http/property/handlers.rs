//! HTTP handlers for property endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::property::{
    CreatePropertyCommand, CreatePropertyHandler, GetPropertyHandler, GetPropertyQuery,
    ListPropertiesHandler, PropertyDetails,
};
use crate::domain::foundation::PropertyId;
use crate::domain::property::PropertyError;

use super::dto::{CreatePropertyRequest, PropertyResponse};

/// Shared handler state for property routes.
#[derive(Clone)]
pub struct PropertyHandlers {
    create_handler: Arc<CreatePropertyHandler>,
    get_handler: Arc<GetPropertyHandler>,
    list_handler: Arc<ListPropertiesHandler>,
}

impl PropertyHandlers {
    pub fn new(
        create_handler: Arc<CreatePropertyHandler>,
        get_handler: Arc<GetPropertyHandler>,
        list_handler: Arc<ListPropertiesHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
        }
    }
}

/// GET /api/properties - List all properties
pub async fn list_properties(State(handlers): State<PropertyHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(details) => {
            let response: Vec<PropertyResponse> = details.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_property_error(e),
    }
}

/// GET /api/properties/:id - Get a property with its floorplans
pub async fn get_property(
    State(handlers): State<PropertyHandlers>,
    Path(property_id): Path<String>,
) -> Response {
    let property_id = match property_id.parse::<PropertyId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid property ID")),
            )
                .into_response()
        }
    };

    match handlers
        .get_handler
        .handle(GetPropertyQuery { property_id })
        .await
    {
        Ok(details) => {
            let response: PropertyResponse = details.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_property_error(e),
    }
}

/// POST /api/properties - Create a new property
pub async fn create_property(
    State(handlers): State<PropertyHandlers>,
    Json(req): Json<CreatePropertyRequest>,
) -> Response {
    let cmd = CreatePropertyCommand {
        name: req.name,
        address: req.address,
        total_units: req.total_units,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(property) => {
            let response: PropertyResponse = PropertyDetails {
                property,
                floorplans: Vec::new(),
            }
            .into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_property_error(e),
    }
}

pub(crate) fn handle_property_error(error: PropertyError) -> Response {
    match error {
        PropertyError::NotFound(_) | PropertyError::FloorplanNotFound(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response(),
        PropertyError::ValidationFailed { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(error.message())),
        )
            .into_response(),
        PropertyError::Infrastructure(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal(msg)),
        )
            .into_response(),
    }
}
