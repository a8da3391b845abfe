use std::fmt;

use crate::domain::{ParameterPage, ParameterPageRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    ConnectionFailed(String),
    QueryFailed(String),
    InvalidResponse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            Self::QueryFailed(msg) => write!(f, "Query failed: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read-only access to a hierarchical parameter store
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetches a single page. Callers follow `next_token` themselves.
    async fn get_parameters_by_path(
        &self,
        request: ParameterPageRequest,
    ) -> Result<ParameterPage, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::QueryFailed("AccessDenied".into()).to_string(),
            "Query failed: AccessDenied"
        );
        assert_eq!(
            StoreError::ConnectionFailed("timeout".into()).to_string(),
            "Connection failed: timeout"
        );
    }
}
