//! Session-level error types.

use super::state::{RecoveryState, Transition};
use crate::errors::RetryableError;
use crate::types::PaymentErrorKind;
use thiserror::Error;

/// A transition was refused. The session is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecoveryError {
    /// Retry requested while `can_retry` is false.
    #[error(
        "Retry not allowed for {kind}: {retry_count} of {max_retries} attempts used (retryable={retryable})"
    )]
    RetryNotAllowed {
        /// Kind of the current failure.
        kind: PaymentErrorKind,
        /// Whether the kind itself permits retry.
        retryable: bool,
        /// Failures recorded so far.
        retry_count: u32,
        /// Session ceiling.
        max_retries: u32,
    },

    /// Transition not valid from the current state.
    #[error("Cannot {transition} while {from}")]
    InvalidTransition {
        from: RecoveryState,
        transition: Transition,
    },
}

impl RetryableError for RecoveryError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn should_contact_support(&self) -> bool {
        matches!(self, RecoveryError::RetryNotAllowed { .. })
    }
}
