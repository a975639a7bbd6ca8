//! In-memory repository adapters.
//!
//! Each repository is a `HashMap` behind an async `RwLock`, shared via `Arc`
//! so clones see the same records for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::{Analysis, Scenario};
use crate::domain::foundation::{
    AnalysisId, DomainError, ErrorCode, FloorplanId, PropertyId, ScenarioId,
};
use crate::domain::property::{Floorplan, Property};
use crate::ports::{
    AnalysisRepository, FloorplanRepository, PropertyRepository, ScenarioRepository,
};

/// In-memory store for property records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPropertyRepository {
    records: Arc<RwLock<HashMap<PropertyId, Property>>>,
}

impl InMemoryPropertyRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored properties (useful for tests).
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn save(&self, property: &Property) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(property.id(), property.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: PropertyId) -> Result<Option<Property>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn exists(&self, id: PropertyId) -> Result<bool, DomainError> {
        let records = self.records.read().await;
        Ok(records.contains_key(&id))
    }

    async fn list(&self) -> Result<Vec<Property>, DomainError> {
        let records = self.records.read().await;
        let mut properties: Vec<Property> = records.values().cloned().collect();
        properties.sort_by_key(|p| p.created_at());
        Ok(properties)
    }
}

/// In-memory store for floorplan records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFloorplanRepository {
    records: Arc<RwLock<HashMap<FloorplanId, Floorplan>>>,
}

impl InMemoryFloorplanRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored floorplans (useful for tests).
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl FloorplanRepository for InMemoryFloorplanRepository {
    async fn save(&self, floorplan: &Floorplan) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(floorplan.id(), floorplan.clone());
        Ok(())
    }

    async fn update(&self, floorplan: &Floorplan) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&floorplan.id()) {
            return Err(DomainError::new(
                ErrorCode::FloorplanNotFound,
                format!("Floorplan not found: {}", floorplan.id()),
            ));
        }
        records.insert(floorplan.id(), floorplan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: FloorplanId) -> Result<Option<Floorplan>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_property_id(
        &self,
        property_id: PropertyId,
    ) -> Result<Vec<Floorplan>, DomainError> {
        let records = self.records.read().await;
        let mut floorplans: Vec<Floorplan> = records
            .values()
            .filter(|fp| fp.property_id() == property_id)
            .cloned()
            .collect();
        floorplans.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(floorplans)
    }

    async fn delete(&self, id: FloorplanId) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if records.remove(&id).is_none() {
            return Err(DomainError::new(
                ErrorCode::FloorplanNotFound,
                format!("Floorplan not found: {}", id),
            ));
        }
        Ok(())
    }
}

/// In-memory store for analysis records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalysisRepository {
    records: Arc<RwLock<HashMap<AnalysisId, Analysis>>>,
}

impl InMemoryAnalysisRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryAnalysisRepository {
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(analysis.id(), analysis.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AnalysisId) -> Result<Option<Analysis>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Analysis>, DomainError> {
        let records = self.records.read().await;
        let mut analyses: Vec<Analysis> = records.values().cloned().collect();
        analyses.sort_by_key(|a| a.created_at());
        Ok(analyses)
    }
}

/// In-memory store for scenario records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryScenarioRepository {
    records: Arc<RwLock<HashMap<ScenarioId, Scenario>>>,
}

impl InMemoryScenarioRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScenarioRepository for InMemoryScenarioRepository {
    async fn save(&self, scenario: &Scenario) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert(scenario.id(), scenario.clone());
        Ok(())
    }

    async fn update(&self, scenario: &Scenario) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&scenario.id()) {
            return Err(DomainError::new(
                ErrorCode::ScenarioNotFound,
                format!("Scenario not found: {}", scenario.id()),
            ));
        }
        records.insert(scenario.id(), scenario.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ScenarioId) -> Result<Option<Scenario>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn find_by_analysis_id(
        &self,
        analysis_id: AnalysisId,
    ) -> Result<Vec<Scenario>, DomainError> {
        let records = self.records.read().await;
        let mut scenarios: Vec<Scenario> = records
            .values()
            .filter(|s| s.analysis_id() == analysis_id)
            .cloned()
            .collect();
        scenarios.sort_by_key(|s| s.created_at());
        Ok(scenarios)
    }
}
