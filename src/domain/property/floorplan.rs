//! Floorplan entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FloorplanId, PropertyId, ValidationError};

/// A unit-type template within a property.
///
/// Represents `unit_count` identical physical units sharing rent and size
/// attributes. The revenue calculator reads these records but never mutates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floorplan {
    id: FloorplanId,
    property_id: PropertyId,
    name: String,
    /// Category label (Studio, 1BR, ...); informational only.
    unit_type: String,
    unit_count: u32,
    /// Per-unit area in square feet.
    square_footage: f64,
    floor_level: Option<String>,
    view_type: Option<String>,
    /// Monthly base rent per unit.
    base_rent: f64,
    /// Monthly amenity rent per unit.
    amenity_rent: f64,
}

impl Floorplan {
    /// Creates a new floorplan for a property.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or unit type is empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        property_id: PropertyId,
        name: impl Into<String>,
        unit_type: impl Into<String>,
        unit_count: u32,
        square_footage: f64,
        base_rent: f64,
        amenity_rent: f64,
    ) -> Result<Self, ValidationError> {
        Self::with_id(
            FloorplanId::new(),
            property_id,
            name,
            unit_type,
            unit_count,
            square_footage,
            base_rent,
            amenity_rent,
        )
    }

    /// Creates a floorplan with a known id (updates keep the original id).
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or unit type is empty
    #[allow(clippy::too_many_arguments)]
    pub fn with_id(
        id: FloorplanId,
        property_id: PropertyId,
        name: impl Into<String>,
        unit_type: impl Into<String>,
        unit_count: u32,
        square_footage: f64,
        base_rent: f64,
        amenity_rent: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let unit_type = unit_type.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if unit_type.trim().is_empty() {
            return Err(ValidationError::empty_field("unit_type"));
        }

        Ok(Self {
            id,
            property_id,
            name,
            unit_type,
            unit_count,
            square_footage,
            floor_level: None,
            view_type: None,
            base_rent,
            amenity_rent,
        })
    }

    /// Sets the floor level descriptor.
    pub fn with_floor_level(mut self, floor_level: impl Into<String>) -> Self {
        self.floor_level = Some(floor_level.into());
        self
    }

    /// Sets the view descriptor.
    pub fn with_view_type(mut self, view_type: impl Into<String>) -> Self {
        self.view_type = Some(view_type.into());
        self
    }

    /// Returns the floorplan id.
    pub fn id(&self) -> FloorplanId {
        self.id
    }

    /// Returns the owning property's id.
    pub fn property_id(&self) -> PropertyId {
        self.property_id
    }

    /// Returns the floorplan name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit-type label.
    pub fn unit_type(&self) -> &str {
        &self.unit_type
    }

    /// Returns the number of identical units of this floorplan.
    pub fn unit_count(&self) -> u32 {
        self.unit_count
    }

    /// Returns the per-unit area in square feet.
    pub fn square_footage(&self) -> f64 {
        self.square_footage
    }

    /// Returns the floor level descriptor, if any.
    pub fn floor_level(&self) -> Option<&str> {
        self.floor_level.as_deref()
    }

    /// Returns the view descriptor, if any.
    pub fn view_type(&self) -> Option<&str> {
        self.view_type.as_deref()
    }

    /// Returns the monthly base rent per unit.
    pub fn base_rent(&self) -> f64 {
        self.base_rent
    }

    /// Returns the monthly amenity rent per unit.
    pub fn amenity_rent(&self) -> f64 {
        self.amenity_rent
    }
}
