//! Gateway code lookup tables.

use crate::types::PaymentErrorKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Error type that marks a failed input validation.
pub(crate) const VALIDATION_ERROR_TYPE: &str = "validation_error";

/// Exact, case-sensitive mapping from gateway code to kind.
static CODE_TO_KIND: Lazy<HashMap<&'static str, PaymentErrorKind>> = Lazy::new(|| {
    HashMap::from([
        ("card_declined", PaymentErrorKind::CardDeclined),
        ("insufficient_funds", PaymentErrorKind::InsufficientFunds),
        ("expired_card", PaymentErrorKind::ExpiredCard),
        (
            "authentication_required",
            PaymentErrorKind::AuthenticationRequired,
        ),
        (
            "card_authentication_required",
            PaymentErrorKind::AuthenticationRequired,
        ),
        ("processing_error", PaymentErrorKind::ProcessingError),
        ("rate_limit_error", PaymentErrorKind::RateLimit),
        ("invalid_request_error", PaymentErrorKind::InvalidRequest),
    ])
});

/// Look up a gateway code.
pub(crate) fn kind_for_code(code: &str) -> Option<PaymentErrorKind> {
    CODE_TO_KIND.get(code).copied()
}

/// Fallback used when the code is absent or unrecognized.
pub(crate) fn kind_for_type(error_type: Option<&str>) -> PaymentErrorKind {
    match error_type {
        Some(VALIDATION_ERROR_TYPE) => PaymentErrorKind::InvalidRequest,
        _ => PaymentErrorKind::Unknown,
    }
}

/// All recognized gateway codes.
pub fn known_codes() -> impl Iterator<Item = (&'static str, PaymentErrorKind)> {
    CODE_TO_KIND.iter().map(|(code, kind)| (*code, *kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lookup() {
        let test_cases = vec![
            ("card_declined", PaymentErrorKind::CardDeclined),
            ("insufficient_funds", PaymentErrorKind::InsufficientFunds),
            ("expired_card", PaymentErrorKind::ExpiredCard),
            ("authentication_required", PaymentErrorKind::AuthenticationRequired),
            ("card_authentication_required", PaymentErrorKind::AuthenticationRequired),
            ("processing_error", PaymentErrorKind::ProcessingError),
            ("rate_limit_error", PaymentErrorKind::RateLimit),
            ("invalid_request_error", PaymentErrorKind::InvalidRequest),
        ];

        for (input, expected) in test_cases {
            assert_eq!(kind_for_code(input), Some(expected), "code {}", input);
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(kind_for_code("CARD_DECLINED"), None);
        assert_eq!(kind_for_code(" card_declined"), None);
        assert_eq!(kind_for_code("rate_limit"), None);
    }

    #[test]
    fn test_type_fallback() {
        assert_eq!(
            kind_for_type(Some("validation_error")),
            PaymentErrorKind::InvalidRequest
        );
        assert_eq!(kind_for_type(Some("card_error")), PaymentErrorKind::Unknown);
        assert_eq!(kind_for_type(None), PaymentErrorKind::Unknown);
    }

    #[test]
    fn test_known_codes_count() {
        assert_eq!(known_codes().count(), 8);
    }
}
