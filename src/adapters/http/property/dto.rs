//! HTTP DTOs for property endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::property::PropertyDetails;
use crate::domain::property::Floorplan;

/// Request to create a new property.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyRequest {
    pub name: String,
    pub address: String,
    pub total_units: u32,
}

/// Floorplan record as embedded in property responses.
#[derive(Debug, Clone, Serialize)]
pub struct FloorplanResponse {
    pub id: String,
    pub property_id: String,
    pub name: String,
    pub unit_type: String,
    pub unit_count: u32,
    pub square_footage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_type: Option<String>,
    pub base_rent: f64,
    pub amenity_rent: f64,
}

impl From<Floorplan> for FloorplanResponse {
    fn from(floorplan: Floorplan) -> Self {
        Self {
            id: floorplan.id().to_string(),
            property_id: floorplan.property_id().to_string(),
            name: floorplan.name().to_string(),
            unit_type: floorplan.unit_type().to_string(),
            unit_count: floorplan.unit_count(),
            square_footage: floorplan.square_footage(),
            floor_level: floorplan.floor_level().map(String::from),
            view_type: floorplan.view_type().map(String::from),
            base_rent: floorplan.base_rent(),
            amenity_rent: floorplan.amenity_rent(),
        }
    }
}

/// Property view with its floorplans.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: String,
    pub name: String,
    pub address: String,
    pub total_units: u32,
    pub created_at: String,
    pub updated_at: String,
    pub floorplans: Vec<FloorplanResponse>,
}

impl From<PropertyDetails> for PropertyResponse {
    fn from(details: PropertyDetails) -> Self {
        Self {
            id: details.property.id().to_string(),
            name: details.property.name().to_string(),
            address: details.property.address().to_string(),
            total_units: details.property.total_units(),
            created_at: details.property.created_at().to_rfc3339(),
            updated_at: details.property.updated_at().to_rfc3339(),
            floorplans: details.floorplans.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::property::Property;

    #[test]
    fn create_request_deserializes() {
        let json = r#"{"name": "Campus View", "address": "123 University Ave", "total_units": 240}"#;
        let req: CreatePropertyRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Campus View");
        assert_eq!(req.total_units, 240);
    }

    #[test]
    fn property_response_embeds_floorplans() {
        let property = Property::new("Campus View", "123 University Ave", 240).unwrap();
        let floorplan =
            Floorplan::new(property.id(), "A1 - Studio", "Studio", 40, 450.0, 1200.0, 50.0)
                .unwrap();

        let response: PropertyResponse = PropertyDetails {
            property,
            floorplans: vec![floorplan],
        }
        .into();

        assert_eq!(response.floorplans.len(), 1);
        assert_eq!(response.floorplans[0].name, "A1 - Studio");
    }

    #[test]
    fn floorplan_response_omits_absent_descriptors() {
        let floorplan = Floorplan::new(
            crate::domain::foundation::PropertyId::new(),
            "A1",
            "Studio",
            40,
            450.0,
            1200.0,
            50.0,
        )
        .unwrap();
        let json = serde_json::to_value(FloorplanResponse::from(floorplan)).unwrap();
        assert!(json.get("floor_level").is_none());
    }
}
