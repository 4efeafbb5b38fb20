//! Core types for payment failure classification.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// PaymentErrorKind
// =============================================================================

/// Closed taxonomy of payment failures.
///
/// Every classified failure carries exactly one kind. [`PaymentErrorKind::Unknown`]
/// is the catch-all for anything the classifier does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentErrorKind {
    /// The issuer declined the card.
    CardDeclined,
    /// The card has insufficient funds.
    InsufficientFunds,
    /// The card has expired.
    ExpiredCard,
    /// The gateway could not be reached.
    NetworkError,
    /// The gateway failed while processing the payment.
    ProcessingError,
    /// The issuer requires additional authentication (e.g. 3-D Secure).
    AuthenticationRequired,
    /// The payment request was malformed or failed validation.
    InvalidRequest,
    /// Too many requests were made in a short time.
    RateLimit,
    /// Unrecognized failure.
    Unknown,
}

impl PaymentErrorKind {
    /// All kinds, in declaration order.
    pub const ALL: [PaymentErrorKind; 9] = [
        Self::CardDeclined,
        Self::InsufficientFunds,
        Self::ExpiredCard,
        Self::NetworkError,
        Self::ProcessingError,
        Self::AuthenticationRequired,
        Self::InvalidRequest,
        Self::RateLimit,
        Self::Unknown,
    ];

    /// Returns the snake_case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CardDeclined => "card_declined",
            Self::InsufficientFunds => "insufficient_funds",
            Self::ExpiredCard => "expired_card",
            Self::NetworkError => "network_error",
            Self::ProcessingError => "processing_error",
            Self::AuthenticationRequired => "authentication_required",
            Self::InvalidRequest => "invalid_request",
            Self::RateLimit => "rate_limit",
            Self::Unknown => "unknown",
        }
    }
}

impl Display for PaymentErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a [`PaymentErrorKind`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown payment error kind '{0}'")]
pub struct ParseKindError(pub String);

impl FromStr for PaymentErrorKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

// =============================================================================
// ErrorCode
// =============================================================================

/// Raw error code reported by a payment gateway (e.g. "card_declined").
///
/// Kept for display and audit only; nothing downstream of the classifier
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(String);

impl ErrorCode {
    /// Create a new ErrorCode.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ErrorCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

// =============================================================================
// RawGatewayError
// =============================================================================

/// Gateway-neutral failure report handed to the classifier.
///
/// Every field is optional: the classifier accepts whatever the gateway
/// reported and falls back to [`PaymentErrorKind::Unknown`].
///
/// # Example
///
/// ```rust
/// use payment_recovery::RawGatewayError;
///
/// let raw: RawGatewayError = serde_json::from_str(
///     r#"{"code": "bogus_code", "type": "validation_error"}"#,
/// ).unwrap();
/// assert_eq!(raw.error_type.as_deref(), Some("validation_error"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGatewayError {
    /// Gateway-specific error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Gateway-supplied message.
    #[serde(default)]
    pub message: Option<String>,
    /// Gateway error category (e.g. "validation_error").
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
}

impl RawGatewayError {
    /// Create a raw error carrying only a code.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }

    /// Set the gateway message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the gateway error type.
    pub fn error_type(mut self, error_type: impl Into<String>) -> Self {
        self.error_type = Some(error_type.into());
        self
    }
}

// =============================================================================
// ClassifiedError
// =============================================================================

/// Result of classifying a gateway failure.
///
/// Produced once per failure and stored in the owning
/// [`RecoverySession`](crate::RecoverySession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedError {
    /// Assigned kind; always set.
    pub kind: PaymentErrorKind,
    /// Display message, never empty.
    pub message: String,
    /// Raw gateway code, if one was reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    /// Whether another attempt is permitted for this kind.
    pub retryable: bool,
    /// Short remediation hint.
    pub suggested_action: String,
}
