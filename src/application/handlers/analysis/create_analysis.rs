//! CreateAnalysisHandler - Command handler for creating analyses.

use std::sync::Arc;

use tracing::info;

use crate::domain::analysis::{Analysis, AnalysisError};
use crate::domain::foundation::{OccupancyRate, PropertyId};
use crate::ports::{AnalysisRepository, PropertyRepository};

/// Command to create a new analysis for a property.
#[derive(Debug, Clone)]
pub struct CreateAnalysisCommand {
    pub property_id: PropertyId,
    pub name: String,
    pub description: Option<String>,
    pub occupancy_rate: f64,
}

/// Handler for creating analyses.
pub struct CreateAnalysisHandler {
    properties: Arc<dyn PropertyRepository>,
    analyses: Arc<dyn AnalysisRepository>,
}

impl CreateAnalysisHandler {
    pub fn new(
        properties: Arc<dyn PropertyRepository>,
        analyses: Arc<dyn AnalysisRepository>,
    ) -> Self {
        Self {
            properties,
            analyses,
        }
    }

    pub async fn handle(&self, cmd: CreateAnalysisCommand) -> Result<Analysis, AnalysisError> {
        info!(name = %cmd.name, property_id = %cmd.property_id, "creating analysis");

        if !self.properties.exists(cmd.property_id).await? {
            return Err(AnalysisError::property_not_found(cmd.property_id));
        }

        let occupancy_rate = OccupancyRate::new(cmd.occupancy_rate)?;
        let analysis = Analysis::new(cmd.property_id, cmd.name, cmd.description, occupancy_rate)?;
        self.analyses.save(&analysis).await?;

        Ok(analysis)
    }
}
