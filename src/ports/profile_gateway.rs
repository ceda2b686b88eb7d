//! ProfileGateway port - persistence boundary for profile data.
//!
//! The gateway receives canonical (metric) data only. Retries, if any,
//! are the gateway's business; the form session surfaces failures
//! verbatim and leaves the user to resubmit.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::CanonicalProfile;

/// Failure raised by the persistence gateway (network or server fault).
///
/// The message is shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{0}")]
    SaveFailed(String),
}

impl GatewayError {
    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            Self::SaveFailed(message) => message,
        }
    }
}

/// Port for durable profile storage.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Persists a canonical profile.
    async fn save(&self, profile: &CanonicalProfile) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time check that the trait is object-safe
    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn ProfileGateway) {}

    #[test]
    fn gateway_error_message_is_verbatim() {
        let err = GatewayError::SaveFailed("server returned 503".to_string());
        assert_eq!(err.message(), "server returned 503");
        assert_eq!(format!("{}", err), "server returned 503");
    }
}
