//! CreateFloorplanHandler - Command handler for adding floorplans.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::PropertyId;
use crate::domain::property::{Floorplan, PropertyError};
use crate::ports::{FloorplanRepository, PropertyRepository};

/// Command to add a floorplan to a property.
#[derive(Debug, Clone)]
pub struct CreateFloorplanCommand {
    pub property_id: PropertyId,
    pub name: String,
    pub unit_type: String,
    pub unit_count: u32,
    pub square_footage: f64,
    pub floor_level: Option<String>,
    pub view_type: Option<String>,
    pub base_rent: f64,
    pub amenity_rent: f64,
}

/// Handler for creating floorplans.
pub struct CreateFloorplanHandler {
    properties: Arc<dyn PropertyRepository>,
    floorplans: Arc<dyn FloorplanRepository>,
}

impl CreateFloorplanHandler {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        floorplans: Arc<dyn FloorplanRepository>,
    ) -> Self {
        Self {
            properties,
            floorplans,
        }
    }

    pub async fn handle(&self, cmd: CreateFloorplanCommand) -> Result<Floorplan, PropertyError> {
        info!(property_id = %cmd.property_id, "creating floorplan");

        if !self.properties.exists(cmd.property_id).await? {
            return Err(PropertyError::not_found(cmd.property_id));
        }

        let mut floorplan = Floorplan::new(
            cmd.property_id,
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

        self.floorplans.save(&floorplan).await?;
        Ok(floorplan)
    }
}
