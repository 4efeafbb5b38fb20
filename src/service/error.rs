//! Service-level error types.

use crate::errors::RetryableError;
use crate::session::RecoveryError;
use std::error::Error as StdError;
use thiserror::Error;

/// Errors returned by [`RecoveryService`](crate::RecoveryService) operations.
#[derive(Debug, Error)]
pub enum RecoveryServiceError {
    /// The session refused the transition; nothing was sent anywhere.
    #[error(transparent)]
    Recovery(#[from] RecoveryError),

    /// The navigation collaborator failed.
    #[error("Navigation failed: {source}")]
    Navigation {
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// A configured support contact could not be turned into a link.
    #[error("Invalid support contact link: {0}")]
    SupportLink(#[from] url::ParseError),
}

impl RetryableError for RecoveryServiceError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn should_contact_support(&self) -> bool {
        match self {
            RecoveryServiceError::Recovery(error) => error.should_contact_support(),
            RecoveryServiceError::Navigation { .. } | RecoveryServiceError::SupportLink(_) => {
                false
            }
        }
    }
}
