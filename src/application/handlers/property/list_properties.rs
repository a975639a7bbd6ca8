//! ListPropertiesHandler - Query handler for all properties.

use std::sync::Arc;

use crate::domain::property::PropertyError;
use crate::ports::{FloorplanRepository, PropertyRepository};

use super::PropertyDetails;

/// Handler for listing every property with its floorplans.
pub struct ListPropertiesHandler {
    properties: Arc<dyn PropertyRepository>,
    floorplans: Arc<dyn FloorplanRepository>,
}

impl ListPropertiesHandler {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        floorplans: Arc<dyn FloorplanRepository>,
    ) -> Self {
        Self {
            properties,
            floorplans,
        }
    }

    pub async fn handle(&self) -> Result<Vec<PropertyDetails>, PropertyError> {
        let mut details = Vec::new();
        for property in self.properties.list().await? {
            let floorplans = self.floorplans.find_by_property_id(property.id()).await?;
            details.push(PropertyDetails {
                property,
                floorplans,
            });
        }
        Ok(details)
    }
}
