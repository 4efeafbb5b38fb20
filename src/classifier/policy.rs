//! Per-kind retryability policy.

use crate::types::PaymentErrorKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decides whether a failure kind permits another attempt.
///
/// Every kind is retryable unless overridden. Overrides let a host turn a
/// kind into a hard failure without touching the classifier.
///
/// ```rust
/// use payment_recovery::{PaymentErrorKind, RetryPolicy};
///
/// let policy = RetryPolicy::default()
///     .with_override(PaymentErrorKind::RateLimit, false);
///
/// assert!(!policy.is_retryable(PaymentErrorKind::RateLimit));
/// assert!(policy.is_retryable(PaymentErrorKind::CardDeclined));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(default)]
    overrides: BTreeMap<PaymentErrorKind, bool>,
}

impl RetryPolicy {
    /// Baseline retryability before overrides. Currently `true` for all kinds.
    pub fn default_retryable(kind: PaymentErrorKind) -> bool {
        match kind {
            PaymentErrorKind::CardDeclined
            | PaymentErrorKind::InsufficientFunds
            | PaymentErrorKind::ExpiredCard
            | PaymentErrorKind::NetworkError
            | PaymentErrorKind::ProcessingError
            | PaymentErrorKind::AuthenticationRequired
            | PaymentErrorKind::InvalidRequest
            | PaymentErrorKind::RateLimit
            | PaymentErrorKind::Unknown => true,
        }
    }

    /// Override retryability for one kind.
    pub fn with_override(mut self, kind: PaymentErrorKind, retryable: bool) -> Self {
        self.overrides.insert(kind, retryable);
        self
    }

    /// Remove an override, restoring the baseline for that kind.
    pub fn clear_override(&mut self, kind: PaymentErrorKind) -> bool {
        self.overrides.remove(&kind).is_some()
    }

    /// Returns the effective retryability for a kind.
    pub fn is_retryable(&self, kind: PaymentErrorKind) -> bool {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| Self::default_retryable(kind))
    }

    /// Returns the active overrides.
    pub fn overrides(&self) -> &BTreeMap<PaymentErrorKind, bool> {
        &self.overrides
    }
}
