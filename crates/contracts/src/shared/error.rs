use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by a record service. The reason is optional: callers
/// show it verbatim when present and fall back to their own message otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .reason.as_deref().unwrap_or("service error"))]
pub struct ServiceError {
    pub reason: Option<String>,
}

impl ServiceError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    pub fn without_reason() -> Self {
        Self { reason: None }
    }

    /// Reason when present and non-empty, otherwise `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        match self.reason.as_deref() {
            Some(r) if !r.trim().is_empty() => r.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// JSON error body returned by the record services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

impl From<ApiErrorBody> for ServiceError {
    fn from(body: ApiErrorBody) -> Self {
        ServiceError::new(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_prefers_reason() {
        assert_eq!(ServiceError::new("중복").message_or("실패"), "중복");
        assert_eq!(ServiceError::without_reason().message_or("실패"), "실패");
        assert_eq!(ServiceError::new("  ").message_or("실패"), "실패");
    }
}
