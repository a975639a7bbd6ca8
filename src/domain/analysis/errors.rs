//! Analysis- and scenario-specific error types.

use crate::domain::foundation::{
    AnalysisId, DomainError, ErrorCode, PropertyId, ScenarioId, ValidationError,
};

/// Errors raised by analysis operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Analysis was not found.
    NotFound(AnalysisId),
    /// The analyzed property was not found.
    PropertyNotFound(PropertyId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl AnalysisError {
    pub fn not_found(id: AnalysisId) -> Self {
        AnalysisError::NotFound(id)
    }

    pub fn property_not_found(id: PropertyId) -> Self {
        AnalysisError::PropertyNotFound(id)
    }

    pub fn message(&self) -> String {
        match self {
            AnalysisError::NotFound(id) => format!("Analysis not found: {}", id),
            AnalysisError::PropertyNotFound(id) => format!("Property not found: {}", id),
            AnalysisError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AnalysisError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AnalysisError {}

impl From<ValidationError> for AnalysisError {
    fn from(err: ValidationError) -> Self {
        AnalysisError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AnalysisError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => AnalysisError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => AnalysisError::Infrastructure(err.to_string()),
        }
    }
}

/// Errors raised by scenario operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Scenario was not found.
    NotFound(ScenarioId),
    /// The owning analysis was not found.
    AnalysisNotFound(AnalysisId),
    /// The analyzed property has no floorplans; metrics would be meaningless.
    NoFloorplans(PropertyId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ScenarioError {
    pub fn not_found(id: ScenarioId) -> Self {
        ScenarioError::NotFound(id)
    }

    pub fn analysis_not_found(id: AnalysisId) -> Self {
        ScenarioError::AnalysisNotFound(id)
    }

    pub fn no_floorplans(property_id: PropertyId) -> Self {
        ScenarioError::NoFloorplans(property_id)
    }

    pub fn message(&self) -> String {
        match self {
            ScenarioError::NotFound(id) => format!("Scenario not found: {}", id),
            ScenarioError::AnalysisNotFound(id) => format!("Analysis not found: {}", id),
            ScenarioError::NoFloorplans(property_id) => {
                format!("No floorplans found for property {}", property_id)
            }
            ScenarioError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ScenarioError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ScenarioError {}

impl From<ValidationError> for ScenarioError {
    fn from(err: ValidationError) -> Self {
        ScenarioError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for ScenarioError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => ScenarioError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => ScenarioError::Infrastructure(err.to_string()),
        }
    }
}
