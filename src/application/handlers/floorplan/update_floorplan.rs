//! UpdateFloorplanHandler - Command handler for replacing floorplans.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::FloorplanId;
use crate::domain::property::{Floorplan, PropertyError};
use crate::ports::FloorplanRepository;

/// Command to replace a floorplan's attributes.
///
/// A full replacement: every field is taken from the command, only the id
/// survives from the stored record.
#[derive(Debug, Clone)]
pub struct UpdateFloorplanCommand {
    pub floorplan_id: FloorplanId,
    pub name: String,
    pub unit_type: String,
    pub unit_count: u32,
    pub square_footage: f64,
    pub floor_level: Option<String>,
    pub view_type: Option<String>,
    pub base_rent: f64,
    pub amenity_rent: f64,
}

/// Handler for updating floorplans.
pub struct UpdateFloorplanHandler {
    floorplans: Arc<dyn FloorplanRepository>,
}

impl UpdateFloorplanHandler {
    pub fn new(floorplans: Arc<dyn FloorplanRepository>) -> Self {
        Self { floorplans }
    }

    pub async fn handle(&self, cmd: UpdateFloorplanCommand) -> Result<Floorplan, PropertyError> {
        info!(floorplan_id = %cmd.floorplan_id, "updating floorplan");

        let existing = self
            .floorplans
            .find_by_id(cmd.floorplan_id)
            .await?
            .ok_or_else(|| PropertyError::floorplan_not_found(cmd.floorplan_id))?;

        let mut floorplan = Floorplan::with_id(
            existing.id(),
            existing.property_id(),
            cmd.name,
            cmd.unit_type,
            cmd.unit_count,
            cmd.square_footage,
            cmd.base_rent,
            cmd.amenity_rent,
        )?;
        if let Some(floor_level) = cmd.floor_level {
            floorplan = floorplan.with_floor_level(floor_level);
        }
        if let Some(view_type) = cmd.view_type {
            floorplan = floorplan.with_view_type(view_type);
        }

        self.floorplans.update(&floorplan).await?;
        Ok(floorplan)
    }
}
