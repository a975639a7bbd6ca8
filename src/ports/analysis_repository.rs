//! Analysis repository port.

use async_trait::async_trait;

use crate::domain::analysis::Analysis;
use crate::domain::foundation::{AnalysisId, DomainError};

/// Repository port for analysis records.
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Save a new analysis.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, analysis: &Analysis) -> Result<(), DomainError>;

    /// Find an analysis by its id. Returns `None` if not found.
    async fn find_by_id(&self, id: AnalysisId) -> Result<Option<Analysis>, DomainError>;

    /// List all analyses, ordered by creation time.
    async fn list(&self) -> Result<Vec<Analysis>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AnalysisRepository) {}
    }
}
