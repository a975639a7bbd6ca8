//! DeleteFloorplanHandler - Command handler for removing floorplans.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::FloorplanId;
use crate::domain::property::PropertyError;
use crate::ports::FloorplanRepository;

/// Command to delete a floorplan.
#[derive(Debug, Clone)]
pub struct DeleteFloorplanCommand {
    pub floorplan_id: FloorplanId,
}

/// Handler for deleting floorplans.
pub struct DeleteFloorplanHandler {
    floorplans: Arc<dyn FloorplanRepository>,
}

impl DeleteFloorplanHandler {
    pub fn new(floorplans: Arc<dyn FloorplanRepository>) -> Self {
        Self { floorplans }
    }

    pub async fn handle(&self, cmd: DeleteFloorplanCommand) -> Result<(), PropertyError> {
        info!(floorplan_id = %cmd.floorplan_id, "deleting floorplan");

        if self
            .floorplans
            .find_by_id(cmd.floorplan_id)
            .await?
            .is_none()
        {
            return Err(PropertyError::floorplan_not_found(cmd.floorplan_id));
        }

        self.floorplans.delete(cmd.floorplan_id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryFloorplanRepository;
    use crate::domain::foundation::PropertyId;
    use crate::domain::property::Floorplan;
    use crate::ports::FloorplanRepository as _;

    #[tokio::test]
    async fn deletes_existing_floorplan() {
        let floorplans = Arc::new(InMemoryFloorplanRepository::new());
        let floorplan = Floorplan::new(
            PropertyId::new(),
            "A1 - Studio",
            "Studio",
            40,
            450.0,
            1200.0,
            50.0,
        )
        .unwrap();
        floorplans.save(&floorplan).await.unwrap();

        let handler = DeleteFloorplanHandler::new(floorplans.clone());
        handler
            .handle(DeleteFloorplanCommand {
                floorplan_id: floorplan.id(),
            })
            .await
            .unwrap();

        assert_eq!(floorplans.count().await, 0);
    }

    #[tokio::test]
    async fn rejects_unknown_floorplan() {
        let handler = DeleteFloorplanHandler::new(Arc::new(InMemoryFloorplanRepository::new()));
        let result = handler
            .handle(DeleteFloorplanCommand {
                floorplan_id: FloorplanId::new(),
            })
            .await;
        assert!(matches!(result, Err(PropertyError::FloorplanNotFound(_))));
    }
}
