//! Property entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PropertyId, Timestamp, ValidationError};

/// A student-housing property.
///
/// Floorplans reference the property by id; the property record itself does
/// not own them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    id: PropertyId,
    name: String,
    address: String,
    /// Total physical units, as reported for the property as a whole.
    total_units: u32,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Property {
    /// Creates a new property record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or address is empty
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        total_units: u32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let address = address.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if address.trim().is_empty() {
            return Err(ValidationError::empty_field("address"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: PropertyId::new(),
            name,
            address,
            total_units,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the property id.
    pub fn id(&self) -> PropertyId {
        self.id
    }

    /// Returns the property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the reported total unit count.
    pub fn total_units(&self) -> u32 {
        self.total_units
    }

    /// Returns when the property was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the property was last updated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
