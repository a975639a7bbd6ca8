//! GetPropertyHandler - Query handler for one property with its floorplans.

use std::sync::Arc;

use crate::domain::foundation::PropertyId;
use crate::domain::property::{Floorplan, Property, PropertyError};
use crate::ports::{FloorplanRepository, PropertyRepository};

/// A property together with its floorplans, as served by the API.
#[derive(Debug, Clone)]
pub struct PropertyDetails {
    pub property: Property,
    pub floorplans: Vec<Floorplan>,
}

/// Query to get a property by id.
#[derive(Debug, Clone)]
pub struct GetPropertyQuery {
    pub property_id: PropertyId,
}

/// Handler for retrieving property details.
pub struct GetPropertyHandler {
    properties: Arc<dyn PropertyRepository>,
    floorplans: Arc<dyn FloorplanRepository>,
}

impl GetPropertyHandler {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        floorplans: Arc<dyn FloorplanRepository>,
    ) -> Self {
        Self {
            properties,
            floorplans,
        }
    }

    pub async fn handle(&self, query: GetPropertyQuery) -> Result<PropertyDetails, PropertyError> {
        let property = self
            .properties
            .find_by_id(query.property_id)
            .await?
            .ok_or_else(|| PropertyError::not_found(query.property_id))?;

        let floorplans = self.floorplans.find_by_property_id(property.id()).await?;

        Ok(PropertyDetails {
            property,
            floorplans,
        })
    }
}
