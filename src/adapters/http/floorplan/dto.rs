//! HTTP DTOs for floorplan endpoints.

use serde::Deserialize;

// Responses reuse the floorplan shape embedded in property views.
pub use crate::adapters::http::property::dto::FloorplanResponse;

/// Request body for creating or replacing a floorplan.
///
/// `property_id` names the parent on create; updates keep the stored parent
/// and ignore the field.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorplanRequest {
    pub property_id: String,
    pub name: String,
    pub unit_type: String,
    pub unit_count: u32,
    pub square_footage: f64,
    #[serde(default)]
    pub floor_level: Option<String>,
    #[serde(default)]
    pub view_type: Option<String>,
    pub base_rent: f64,
    pub amenity_rent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_with_optional_descriptors_absent() {
        let json = r#"{
            "property_id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "A1 - Studio",
            "unit_type": "Studio",
            "unit_count": 40,
            "square_footage": 450,
            "base_rent": 1200.0,
            "amenity_rent": 50.0
        }"#;
        let req: FloorplanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.unit_count, 40);
        assert!(req.floor_level.is_none());
    }

    #[test]
    fn request_deserializes_with_descriptors() {
        let json = r#"{
            "property_id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "A1 - Studio",
            "unit_type": "Studio",
            "unit_count": 40,
            "square_footage": 450.0,
            "floor_level": "1-4",
            "view_type": "Courtyard",
            "base_rent": 1200.0,
            "amenity_rent": 50.0
        }"#;
        let req: FloorplanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.floor_level.as_deref(), Some("1-4"));
        assert_eq!(req.view_type.as_deref(), Some("Courtyard"));
    }
}
