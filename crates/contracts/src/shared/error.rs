use thiserror::Error;

use crate::domain::a001_person::aggregate::IdValidationError;

/// Every failure the catalog views can show to the user.
///
/// None of them is fatal: each one degrades to a visible message while the
/// rest of the application stays navigable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Invalid person ID: {0}")]
    Validation(#[from] IdValidationError),

    #[error("Invalid data format from server: {0}")]
    MalformedResponse(String),

    #[error("Server error: {status} {status_text}")]
    RemoteService { status: u16, status_text: String },

    #[error("Failed to fetch data: {0}")]
    Transport(String),

    #[error("Failed to send email: {0}")]
    SendFailure(String),
}

impl CatalogError {
    pub fn malformed(detail: impl Into<String>) -> Self {
        Self::MalformedResponse(detail.into())
    }

    /// The request never produced a response (network down, CORS, aborted)
    pub fn transport(e: impl std::fmt::Display) -> Self {
        Self::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_service_message_carries_status() {
        let e = CatalogError::RemoteService {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(e.to_string(), "Server error: 503 Service Unavailable");
    }

    #[test]
    fn test_validation_converts() {
        let e: CatalogError = IdValidationError::Missing.into();
        assert!(matches!(e, CatalogError::Validation(IdValidationError::Missing)));
        assert_eq!(e.to_string(), "Invalid person ID: Person ID is missing");
    }

    #[test]
    fn test_transport_keeps_cause() {
        let e = CatalogError::transport("connection refused");
        assert_eq!(e, CatalogError::Transport("connection refused".to_string()));
        assert_eq!(e.to_string(), "Failed to fetch data: connection refused");
    }
}
