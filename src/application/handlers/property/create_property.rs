//! CreatePropertyHandler - Command handler for creating properties.

use std::sync::Arc;

use tracing::info;

use crate::domain::property::{Property, PropertyError};
use crate::ports::PropertyRepository;

/// Command to create a new property.
#[derive(Debug, Clone)]
pub struct CreatePropertyCommand {
    pub name: String,
    pub address: String,
    pub total_units: u32,
}

/// Handler for creating properties.
pub struct CreatePropertyHandler {
    properties: Arc<dyn PropertyRepository>,
}

impl CreatePropertyHandler {
    pub fn new(properties: Arc<dyn PropertyRepository>) -> Self {
        Self { properties }
    }

    pub async fn handle(&self, cmd: CreatePropertyCommand) -> Result<Property, PropertyError> {
        info!(name = %cmd.name, "creating property");

        let property = Property::new(cmd.name, cmd.address, cmd.total_units)?;
        self.properties.save(&property).await?;

        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryPropertyRepository;

    #[tokio::test]
    async fn creates_property_with_valid_input() {
        let repo = Arc::new(InMemoryPropertyRepository::new());
        let handler = CreatePropertyHandler::new(repo.clone());

        let cmd = CreatePropertyCommand {
            name: "Campus View Apartments".to_string(),
            address: "123 University Ave".to_string(),
            total_units: 240,
        };

        let property = handler.handle(cmd).await.unwrap();
        assert_eq!(property.name(), "Campus View Apartments");
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn rejects_empty_name() {
        let repo = Arc::new(InMemoryPropertyRepository::new());
        let handler = CreatePropertyHandler::new(repo.clone());

        let cmd = CreatePropertyCommand {
            name: "".to_string(),
            address: "123 University Ave".to_string(),
            total_units: 240,
        };

        let result = handler.handle(cmd).await;
        assert!(matches!(result, Err(PropertyError::ValidationFailed { .. })));
        assert_eq!(repo.count().await, 0);
    }
}
