//! Property-specific error types.

use crate::domain::foundation::{
    DomainError, ErrorCode, FloorplanId, PropertyId, ValidationError,
};

/// Errors raised by property and floorplan operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyError {
    /// Property was not found.
    NotFound(PropertyId),
    /// Floorplan was not found.
    FloorplanNotFound(FloorplanId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PropertyError {
    pub fn not_found(id: PropertyId) -> Self {
        PropertyError::NotFound(id)
    }

    pub fn floorplan_not_found(id: FloorplanId) -> Self {
        PropertyError::FloorplanNotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PropertyError::Infrastructure(message.into())
    }

    pub fn message(&self) -> String {
        match self {
            PropertyError::NotFound(id) => format!("Property not found: {}", id),
            PropertyError::FloorplanNotFound(id) => format!("Floorplan not found: {}", id),
            PropertyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PropertyError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PropertyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PropertyError {}

impl From<ValidationError> for PropertyError {
    fn from(err: ValidationError) -> Self {
        PropertyError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for PropertyError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PropertyError::ValidationFailed {
                field: "unknown".to_string(),
                message: err.to_string(),
            },
            _ => PropertyError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_includes_property_id() {
        let id = PropertyId::new();
        let err = PropertyError::not_found(id);
        assert!(err.message().contains(&id.to_string()));
    }

    #[test]
    fn validation_error_converts_with_field() {
        let err: PropertyError = ValidationError::empty_field("name").into();
        assert!(matches!(
            err,
            PropertyError::ValidationFailed { ref field, .. } if field == "name"
        ));
    }

    #[test]
    fn storage_domain_error_converts_to_infrastructure() {
        let err: PropertyError = DomainError::storage("lock poisoned").into();
        assert!(matches!(err, PropertyError::Infrastructure(_)));
    }
}
