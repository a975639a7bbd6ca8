//! Analysis entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AnalysisId, OccupancyRate, PropertyId, Timestamp, ValidationError};

/// A named analysis context for one property.
///
/// Owns the occupancy assumption that every scenario in the analysis is
/// evaluated under. Scenarios reference the analysis by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    id: AnalysisId,
    property_id: PropertyId,
    name: String,
    description: Option<String>,
    occupancy_rate: OccupancyRate,
    /// Set when this analysis was created by duplicating another.
    parent_analysis_id: Option<AnalysisId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Analysis {
    /// Creates a new analysis for a property.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty
    pub fn new(
        property_id: PropertyId,
        name: impl Into<String>,
        description: Option<String>,
        occupancy_rate: OccupancyRate,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: AnalysisId::new(),
            property_id,
            name,
            description,
            occupancy_rate,
            parent_analysis_id: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Creates a copy of this analysis under a new name.
    ///
    /// The copy keeps the property and occupancy assumption, records this
    /// analysis as its parent, and gets fresh timestamps. Scenario copies are
    /// the caller's job; the analysis does not own them.
    pub fn duplicate(&self, new_name: impl Into<String>) -> Result<Self, ValidationError> {
        let new_name = new_name.into();
        if new_name.trim().is_empty() {
            return Err(ValidationError::empty_field("new_name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: AnalysisId::new(),
            property_id: self.property_id,
            name: new_name,
            description: Some(format!("Duplicated from: {}", self.name)),
            occupancy_rate: self.occupancy_rate,
            parent_analysis_id: Some(self.id),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the analysis id.
    pub fn id(&self) -> AnalysisId {
        self.id
    }

    /// Returns the analyzed property's id.
    pub fn property_id(&self) -> PropertyId {
        self.property_id
    }

    /// Returns the analysis name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the occupancy assumption for this analysis.
    pub fn occupancy_rate(&self) -> OccupancyRate {
        self.occupancy_rate
    }

    /// Returns the parent analysis id if this is a duplicate.
    pub fn parent_analysis_id(&self) -> Option<AnalysisId> {
        self.parent_analysis_id
    }

    /// Returns when the analysis was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the analysis was last updated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fall_analysis() -> Analysis {
        Analysis::new(
            PropertyId::new(),
            "Fall 2024 Leasing Analysis",
            Some("Baseline analysis for fall semester".to_string()),
            OccupancyRate::new(0.95).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn analysis_new_rejects_empty_name() {
        let result = Analysis::new(PropertyId::new(), "", None, OccupancyRate::DEFAULT);
        assert!(matches!(result, Err(ValidationError::EmptyField { .. })));
    }

    #[test]
    fn analysis_new_has_no_parent() {
        assert!(fall_analysis().parent_analysis_id().is_none());
    }

    #[test]
    fn duplicate_links_back_to_source() {
        let original = fall_analysis();
        let copy = original.duplicate("Spring 2025").unwrap();

        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.parent_analysis_id(), Some(original.id()));
        assert_eq!(copy.property_id(), original.property_id());
        assert_eq!(copy.occupancy_rate(), original.occupancy_rate());
        assert_eq!(copy.name(), "Spring 2025");
    }

    #[test]
    fn duplicate_describes_its_origin() {
        let copy = fall_analysis().duplicate("Copy").unwrap();
        assert_eq!(
            copy.description(),
            Some("Duplicated from: Fall 2024 Leasing Analysis")
        );
    }

    #[test]
    fn duplicate_rejects_empty_name() {
        let result = fall_analysis().duplicate("  ");
        assert!(result.is_err());
    }
}
