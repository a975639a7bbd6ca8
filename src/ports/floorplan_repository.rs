//! Floorplan repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, FloorplanId, PropertyId};
use crate::domain::property::Floorplan;

/// Repository port for floorplan records.
///
/// The revenue calculator consumes the `find_by_property_id` result as an
/// ordered, read-only collection.
#[async_trait]
pub trait FloorplanRepository: Send + Sync {
    /// Save a new floorplan.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, floorplan: &Floorplan) -> Result<(), DomainError>;

    /// Replace an existing floorplan.
    ///
    /// # Errors
    ///
    /// - `FloorplanNotFound` if the floorplan doesn't exist
    async fn update(&self, floorplan: &Floorplan) -> Result<(), DomainError>;

    /// Find a floorplan by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: FloorplanId) -> Result<Option<Floorplan>, DomainError>;

    /// Find all floorplans of a property, ordered by name.
    async fn find_by_property_id(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<Floorplan>, DomainError>;

    /// Delete a floorplan.
    ///
    /// # Errors
    ///
    /// - `FloorplanNotFound` if the floorplan doesn't exist
    async fn delete(&self, id: FloorplanId) -> Result<(), DomainError>;
}
