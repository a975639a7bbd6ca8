//! Property repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PropertyId};
use crate::domain::property::Property;

/// Repository port for property records.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Save a new property.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, property: &Property) -> Result<(), DomainError>;

    /// Find a property by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, DomainError>;

    /// Check whether a property exists.
    async fn exists(&self, id: PropertyId) -> Result<bool, DomainError>;

    /// List all properties, ordered by creation time.
    async fn list(&self) -> Result<Vec<Property>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn PropertyRepository) {}
    }
}
