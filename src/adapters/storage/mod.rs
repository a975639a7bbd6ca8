//! Storage adapters.
//!
//! Process-lifetime in-memory repositories for development and tests; a
//! persistent implementation would slot in behind the same ports.

mod in_memory;
mod seed;

pub use in_memory::{
    InMemoryAnalysisRepository, InMemoryFloorplanRepository, InMemoryPropertyRepository,
    InMemoryScenarioRepository,
};
pub use seed::seed_sample_data;
