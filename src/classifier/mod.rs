//! Classification of raw gateway failures.
//!
//! The classifier is a total function: any [`RawGatewayError`], including one
//! with every field missing, yields a complete [`ClassifiedError`].

mod policy;
mod table;

pub use policy::RetryPolicy;
pub use table::known_codes;

use crate::errors::RetryableError;
use crate::gateways::GatewayError;
use crate::guidance::{default_message, suggested_action};
use crate::types::{ClassifiedError, ErrorCode, PaymentErrorKind, RawGatewayError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Maps raw gateway failures to [`ClassifiedError`]s.
///
/// Holds only its [`RetryPolicy`]; classifying never mutates it, so one
/// classifier can serve any number of sessions.
///
/// # Example
///
/// ```rust
/// use payment_recovery::{Classifier, PaymentErrorKind, RawGatewayError};
///
/// let classifier = Classifier::new();
/// let error = classifier.classify(&RawGatewayError::with_code("rate_limit_error"));
///
/// assert_eq!(error.kind, PaymentErrorKind::RateLimit);
/// assert!(error.suggested_action.contains("wait"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    policy: RetryPolicy,
}

impl Classifier {
    /// Create a classifier with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a custom retry policy.
    pub fn with_policy(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Get reference to the retry policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Classify a raw gateway failure.
    ///
    /// The code is matched exactly against the known table. When it is
    /// absent or unrecognized, `type == "validation_error"` maps to
    /// [`PaymentErrorKind::InvalidRequest`] and anything else to
    /// [`PaymentErrorKind::Unknown`].
    pub fn classify(&self, raw: &RawGatewayError) -> ClassifiedError {
        let kind = raw
            .code
            .as_deref()
            .and_then(table::kind_for_code)
            .unwrap_or_else(|| table::kind_for_type(raw.error_type.as_deref()));

        let error = self.build(kind, raw.message.as_deref(), raw.code.as_deref());

        #[cfg(feature = "tracing")]
        debug!(
            kind = %error.kind,
            code = ?raw.code,
            error_type = ?raw.error_type,
            retryable = error.retryable,
            "Classified gateway failure"
        );

        error
    }

    /// Classify a failure that happened before the gateway answered.
    pub fn classify_transport_failure(&self, message: Option<&str>) -> ClassifiedError {
        self.build(PaymentErrorKind::NetworkError, message, None)
    }

    /// Classify a gateway-specific error through its neutral translation.
    pub fn classify_gateway_error<E: GatewayError + ?Sized>(&self, error: &E) -> ClassifiedError {
        let raw = error.to_raw();
        if error.is_transport_failure() {
            return self.build(
                PaymentErrorKind::NetworkError,
                raw.message.as_deref(),
                raw.code.as_deref(),
            );
        }
        self.classify(&raw)
    }

    fn build(
        &self,
        kind: PaymentErrorKind,
        message: Option<&str>,
        code: Option<&str>,
    ) -> ClassifiedError {
        let message = match message {
            Some(m) if !m.is_empty() => m.to_string(),
            _ => default_message(kind).to_string(),
        };

        ClassifiedError {
            kind,
            message,
            code: code.map(ErrorCode::from),
            retryable: self.policy.is_retryable(kind),
            suggested_action: suggested_action(kind).to_string(),
        }
    }
}

/// Classify with the default policy.
pub fn classify(raw: &RawGatewayError) -> ClassifiedError {
    Classifier::new().classify(raw)
}

impl RetryableError for ClassifiedError {
    fn is_retryable(&self) -> bool {
        self.retryable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_code_with_validation_type() {
        let raw = RawGatewayError::with_code("bogus_code").error_type("validation_error");
        assert_eq!(classify(&raw).kind, PaymentErrorKind::InvalidRequest);
    }

    #[test]
    fn test_unrecognized_code_without_type() {
        let error = classify(&RawGatewayError::with_code("bogus_code"));
        assert_eq!(error.kind, PaymentErrorKind::Unknown);
        assert_eq!(error.code, Some(ErrorCode::new("bogus_code")));
    }

    #[test]
    fn test_code_wins_over_type() {
        let raw = RawGatewayError::with_code("card_declined").error_type("validation_error");
        assert_eq!(classify(&raw).kind, PaymentErrorKind::CardDeclined);
    }

    #[test]
    fn test_empty_input_is_unknown_with_message() {
        let error = classify(&RawGatewayError::default());
        assert_eq!(error.kind, PaymentErrorKind::Unknown);
        assert!(!error.message.is_empty());
        assert_eq!(error.code, None);
        assert!(error.retryable);
    }

    #[test]
    fn test_message_verbatim_or_default() {
        let raw = RawGatewayError::with_code("card_declined").message("Do not honor");
        assert_eq!(classify(&raw).message, "Do not honor");

        let raw = RawGatewayError::with_code("card_declined").message("");
        assert_eq!(classify(&raw).message, "Your card was declined.");
    }

    #[test]
    fn test_classification_is_idempotent() {
        let raw = RawGatewayError::with_code("expired_card").message("Expired");
        assert_eq!(classify(&raw), classify(&raw));
    }

    #[test]
    fn test_policy_override_applies() {
        let classifier = Classifier::with_policy(
            RetryPolicy::default().with_override(PaymentErrorKind::RateLimit, false),
        );
        let error = classifier.classify(&RawGatewayError::with_code("rate_limit_error"));
        assert!(!error.retryable);
        assert!(error.should_contact_support());
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let error = Classifier::new().classify_transport_failure(None);
        assert_eq!(error.kind, PaymentErrorKind::NetworkError);
        assert_eq!(error.message, "We couldn't reach the payment service.");
    }
}
