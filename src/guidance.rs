//! User-facing guidance per payment error kind.
//!
//! Every lookup here is a pure function of [`PaymentErrorKind`]; nothing
//! varies within a session for a fixed kind.

use crate::types::PaymentErrorKind;
use serde::Serialize;

/// Rendering hints for a failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Guidance {
    /// Short heading for the failure screen.
    pub title: &'static str,
    /// Icon selector key understood by the rendering layer.
    pub icon: &'static str,
    /// Ordered remediation steps, three to five entries.
    pub suggestions: &'static [&'static str],
}

/// Returns the guidance for the given kind.
///
/// # Example
///
/// ```rust
/// use payment_recovery::{PaymentErrorKind, guidance};
///
/// let g = guidance(PaymentErrorKind::ExpiredCard);
/// assert_eq!(g.title, "Card Expired");
/// assert!(g.suggestions.len() >= 3);
/// ```
pub fn guidance(kind: PaymentErrorKind) -> Guidance {
    match kind {
        PaymentErrorKind::CardDeclined => Guidance {
            title: "Card Declined",
            icon: "credit-card",
            suggestions: &[
                "Check that the card number, expiry date and CVC are correct",
                "Try a different card",
                "Contact your bank to authorize the payment",
            ],
        },
        PaymentErrorKind::InsufficientFunds => Guidance {
            title: "Insufficient Funds",
            icon: "wallet",
            suggestions: &[
                "Check your available balance",
                "Use a different card or payment method",
                "Add funds to your account and try again",
            ],
        },
        PaymentErrorKind::ExpiredCard => Guidance {
            title: "Card Expired",
            icon: "calendar-x",
            suggestions: &[
                "Check the expiry date printed on your card",
                "Update your card details",
                "Use a different card",
            ],
        },
        PaymentErrorKind::NetworkError => Guidance {
            title: "Connection Problem",
            icon: "wifi-off",
            suggestions: &[
                "Check your internet connection",
                "Disable any VPN or proxy and try again",
                "Refresh the page before retrying",
                "Your card has not been charged",
            ],
        },
        PaymentErrorKind::ProcessingError => Guidance {
            title: "Processing Error",
            icon: "server-crash",
            suggestions: &[
                "Wait a moment and try again",
                "Your card has not been charged",
                "Contact support if the problem persists",
            ],
        },
        PaymentErrorKind::AuthenticationRequired => Guidance {
            title: "Authentication Required",
            icon: "shield-check",
            suggestions: &[
                "Complete the verification step from your bank",
                "Check your banking app or SMS for a confirmation request",
                "Make sure pop-ups are allowed for this site",
                "Contact your bank if you did not receive a request",
            ],
        },
        PaymentErrorKind::InvalidRequest => Guidance {
            title: "Invalid Payment Details",
            icon: "file-warning",
            suggestions: &[
                "Review the highlighted fields",
                "Check that your billing address matches your card",
                "Make sure the card number has no extra spaces",
            ],
        },
        PaymentErrorKind::RateLimit => Guidance {
            title: "Too Many Attempts",
            icon: "clock",
            suggestions: &[
                "Wait a few minutes before trying again",
                "Avoid submitting the form more than once",
                "Contact support if you keep seeing this message",
            ],
        },
        PaymentErrorKind::Unknown => Guidance {
            title: "Payment Failed",
            icon: "alert-circle",
            suggestions: &[
                "Try again in a few moments",
                "Use a different payment method",
                "Contact support if the problem persists",
            ],
        },
    }
}

/// Message shown when the gateway supplied none.
pub fn default_message(kind: PaymentErrorKind) -> &'static str {
    match kind {
        PaymentErrorKind::CardDeclined => "Your card was declined.",
        PaymentErrorKind::InsufficientFunds => "Your card has insufficient funds.",
        PaymentErrorKind::ExpiredCard => "Your card has expired.",
        PaymentErrorKind::NetworkError => "We couldn't reach the payment service.",
        PaymentErrorKind::ProcessingError => "An error occurred while processing your payment.",
        PaymentErrorKind::AuthenticationRequired => {
            "Your bank requires additional authentication."
        }
        PaymentErrorKind::InvalidRequest => "Some of your payment details are invalid.",
        PaymentErrorKind::RateLimit => "Too many payment attempts were made.",
        PaymentErrorKind::Unknown => "An unexpected error occurred while processing your payment.",
    }
}

/// One-line remediation hint stored on the classified error.
pub fn suggested_action(kind: PaymentErrorKind) -> &'static str {
    match kind {
        PaymentErrorKind::CardDeclined => "Try a different card or contact your bank",
        PaymentErrorKind::InsufficientFunds => "Use a different payment method or add funds",
        PaymentErrorKind::ExpiredCard => "Update your card details or use a different card",
        PaymentErrorKind::NetworkError => "Check your internet connection and try again",
        PaymentErrorKind::ProcessingError => "Wait a moment and try again",
        PaymentErrorKind::AuthenticationRequired => {
            "Complete the verification requested by your bank"
        }
        PaymentErrorKind::InvalidRequest => "Review your payment details and try again",
        PaymentErrorKind::RateLimit => "Please wait a few minutes before trying again",
        PaymentErrorKind::Unknown => "Try again or contact support if the problem persists",
    }
}
