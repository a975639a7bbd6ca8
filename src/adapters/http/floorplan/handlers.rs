//! HTTP handlers for floorplan endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::property::handlers::handle_property_error;
use crate::application::handlers::floorplan::{
    CreateFloorplanCommand, CreateFloorplanHandler, DeleteFloorplanCommand,
    DeleteFloorplanHandler, UpdateFloorplanCommand, UpdateFloorplanHandler,
};
use crate::domain::foundation::{FloorplanId, PropertyId};

use super::dto::{FloorplanRequest, FloorplanResponse};

/// Shared handler state for floorplan routes.
#[derive(Clone)]
pub struct FloorplanHandlers {
    create_handler: Arc<CreateFloorplanHandler>,
    update_handler: Arc<UpdateFloorplanHandler>,
    delete_handler: Arc<DeleteFloorplanHandler>,
}

impl FloorplanHandlers {
    pub fn new(
        create_handler: Arc<CreateFloorplanHandler>,
        update_handler: Arc<UpdateFloorplanHandler>,
        delete_handler: Arc<DeleteFloorplanHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            delete_handler,
        }
    }
}

/// POST /api/floorplans - Add a floorplan to a property
pub async fn create_floorplan(
    State(handlers): State<FloorplanHandlers>,
    Json(req): Json<FloorplanRequest>,
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

    let cmd = CreateFloorplanCommand {
        property_id,
        name: req.name,
        unit_type: req.unit_type,
        unit_count: req.unit_count,
        square_footage: req.square_footage,
        floor_level: req.floor_level,
        view_type: req.view_type,
        base_rent: req.base_rent,
        amenity_rent: req.amenity_rent,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(floorplan) => {
            let response: FloorplanResponse = floorplan.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_property_error(e),
    }
}

/// PUT /api/floorplans/:id - Replace a floorplan
pub async fn update_floorplan(
    State(handlers): State<FloorplanHandlers>,
    Path(floorplan_id): Path<String>,
    Json(req): Json<FloorplanRequest>,
) -> Response {
    let floorplan_id = match floorplan_id.parse::<FloorplanId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid floorplan ID")),
            )
                .into_response()
        }
    };

    let cmd = UpdateFloorplanCommand {
        floorplan_id,
        name: req.name,
        unit_type: req.unit_type,
        unit_count: req.unit_count,
        square_footage: req.square_footage,
        floor_level: req.floor_level,
        view_type: req.view_type,
        base_rent: req.base_rent,
        amenity_rent: req.amenity_rent,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(floorplan) => {
            let response: FloorplanResponse = floorplan.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_property_error(e),
    }
}

/// DELETE /api/floorplans/:id - Delete a floorplan
pub async fn delete_floorplan(
    State(handlers): State<FloorplanHandlers>,
    Path(floorplan_id): Path<String>,
) -> Response {
    let floorplan_id = match floorplan_id.parse::<FloorplanId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid floorplan ID")),
            )
                .into_response()
        }
    };

    match handlers
        .delete_handler
        .handle(DeleteFloorplanCommand { floorplan_id })
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Floorplan deleted" })),
        )
            .into_response(),
        Err(e) => handle_property_error(e),
    }
}
