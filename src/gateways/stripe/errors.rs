//! Error types for the Stripe gateway.

use crate::gateways::traits::GatewayError;
use crate::types::RawGatewayError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Neutral error type emitted for Stripe's `invalid_request_error`.
const NEUTRAL_VALIDATION_TYPE: &str = "validation_error";

/// Neutral code for a throttled request.
const NEUTRAL_RATE_LIMIT_CODE: &str = "rate_limit_error";

/// Decline codes that name a more specific failure than `card_declined`.
const REFINED_DECLINE_CODES: [&str; 3] = [
    "insufficient_funds",
    "expired_card",
    "authentication_required",
];

/// Error categories reported in Stripe's `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripeErrorType {
    /// Problem on Stripe's side.
    ApiError,
    /// The card could not be charged.
    CardError,
    /// Idempotency key reused with different parameters.
    IdempotencyError,
    /// Request had invalid parameters.
    InvalidRequestError,
    /// Too many requests (legacy type, now sent as `invalid_request_error`).
    RateLimitError,
    /// Type not known to this crate.
    Other { raw: String },
}

impl StripeErrorType {
    /// Returns the Stripe type string.
    pub fn type_name(&self) -> &str {
        match self {
            Self::ApiError => "api_error",
            Self::CardError => "card_error",
            Self::IdempotencyError => "idempotency_error",
            Self::InvalidRequestError => "invalid_request_error",
            Self::RateLimitError => "rate_limit_error",
            Self::Other { raw } => raw.as_str(),
        }
    }

    /// Parse the Stripe type string.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim() {
            "api_error" => Self::ApiError,
            "card_error" => Self::CardError,
            "idempotency_error" => Self::IdempotencyError,
            "invalid_request_error" => Self::InvalidRequestError,
            "rate_limit_error" => Self::RateLimitError,
            other => Self::Other {
                raw: other.to_string(),
            },
        }
    }

    /// Type string in the neutral vocabulary understood by the classifier.
    fn neutral_type(&self) -> &str {
        match self {
            Self::InvalidRequestError => NEUTRAL_VALIDATION_TYPE,
            other => other.type_name(),
        }
    }
}

impl Display for StripeErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl Serialize for StripeErrorType {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.type_name())
    }
}

impl<'de> Deserialize<'de> for StripeErrorType {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&s))
    }
}

/// Error object from a Stripe API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Stripe {error_type}: code={}", .code.as_deref().unwrap_or("none"))]
pub struct StripeApiError {
    /// Error category.
    #[serde(rename = "type")]
    pub error_type: StripeErrorType,
    /// Short machine-readable code.
    #[serde(default)]
    pub code: Option<String>,
    /// Issuer's reason for a card decline.
    #[serde(default)]
    pub decline_code: Option<String>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Request parameter the error relates to.
    #[serde(default)]
    pub param: Option<String>,
}

#[derive(Deserialize)]
struct StripeErrorEnvelope {
    error: StripeApiError,
}

/// Failed to parse a Stripe error body.
#[derive(Debug, Error)]
#[error("Failed to parse Stripe error body: {0}")]
pub struct StripeErrorParse(#[source] pub serde_json::Error);

impl StripeApiError {
    /// Parse the `{"error": {...}}` envelope from a response body.
    pub fn from_body(body: &str) -> Result<Self, StripeErrorParse> {
        let envelope: StripeErrorEnvelope = serde_json::from_str(body).map_err(|e| {
            #[cfg(feature = "tracing")]
            warn!(error = %e, "Stripe returned an unparseable error body");
            StripeErrorParse(e)
        })?;

        Ok(envelope.error)
    }

    /// Code to hand to the classifier.
    ///
    /// Stripe reports several specific failures as `card_declined` with the
    /// detail in `decline_code`; those are promoted to the specific code.
    /// Throttling arrives as code `rate_limit` under `invalid_request_error`,
    /// or as the legacy `rate_limit_error` type.
    fn neutral_code(&self) -> Option<&str> {
        if self.code.as_deref() == Some("rate_limit")
            || self.error_type == StripeErrorType::RateLimitError
        {
            return Some(NEUTRAL_RATE_LIMIT_CODE);
        }

        match (self.code.as_deref(), self.decline_code.as_deref()) {
            (Some("card_declined"), Some(decline)) if REFINED_DECLINE_CODES.contains(&decline) => {
                Some(decline)
            }
            (code, _) => code,
        }
    }
}

impl GatewayError for StripeApiError {
    fn to_raw(&self) -> RawGatewayError {
        RawGatewayError {
            code: self.neutral_code().map(str::to_string),
            message: self.message.clone(),
            error_type: Some(self.error_type.neutral_type().to_string()),
        }
    }
}

/// Main error type for Stripe payment submissions.
#[derive(Debug, Error)]
pub enum StripeError {
    /// Stripe answered with an error object.
    #[error("Stripe API error: {0}")]
    Api(#[from] StripeApiError),

    /// Stripe could not be reached.
    #[error("Failed to reach Stripe: {message}")]
    Connection { message: String },
}

impl GatewayError for StripeError {
    fn to_raw(&self) -> RawGatewayError {
        match self {
            StripeError::Api(error) => error.to_raw(),
            // Transport detail is not user-facing; the kind default is shown.
            StripeError::Connection { .. } => RawGatewayError::default(),
        }
    }

    fn is_transport_failure(&self) -> bool {
        matches!(self, StripeError::Connection { .. })
    }
}
