//! # Payment Recovery
//!
//! Classification of payment gateway failures and a bounded-retry recovery
//! flow with escalation to human support.
//!
//! The crate never processes payments. It takes the failure a gateway
//! reported, maps it to a closed set of [`PaymentErrorKind`]s, decides
//! whether the user may try again, and tells the rendering layer what to
//! show.
//!
//! ## Supported Gateways
//!
//! | Gateway | Feature | Translation |
//! |---------|---------|-------------|
//! | Stripe | `stripe` (default) | [`stripe::StripeError`] |
//!
//! Any other gateway plugs in by implementing [`GatewayError`] for its error
//! type and [`CheckoutGateway`] for its submission call.
//!
//! ## Quick Start
//!
//! ```rust
//! use payment_recovery::{
//!     PaymentErrorKind, RawGatewayError, RecoverySession, guidance,
//! };
//!
//! let mut session = RecoverySession::new(3);
//!
//! let error = session
//!     .on_failure(&RawGatewayError::with_code("card_declined"))
//!     .unwrap();
//! assert_eq!(error.kind, PaymentErrorKind::CardDeclined);
//!
//! let hints = guidance(PaymentErrorKind::CardDeclined);
//! println!("{}: {:?}", hints.title, hints.suggestions);
//!
//! assert!(session.can_retry());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! RecoveryService<G, N>          (async driver, optional)
//!         │
//!         ├──► CheckoutGateway   (trait: submits payments)
//!         ├──► RecoveryNavigator (trait: payment form, support channel)
//!         ▼
//! RecoverySession                (per-checkout state, retry ceiling)
//!         │
//!         ▼
//!   Classifier + RetryPolicy     (stateless, shared)
//!         │
//!         ▼
//!   guidance tables              (title, icon, suggestions per kind)
//! ```
//!
//! ## Features
//!
//! - `stripe` - Stripe error translation (enabled by default)
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod classifier;
pub mod errors;
pub mod gateways;
pub mod guidance;
pub mod service;
pub mod session;
pub mod types;

#[cfg(feature = "stripe")]
pub use gateways::stripe;

// Re-export commonly used types at the crate root
pub use classifier::{Classifier, RetryPolicy, classify, known_codes};
pub use errors::RetryableError;
pub use gateways::{CheckoutGateway, GatewayError};
pub use guidance::{Guidance, default_message, guidance, suggested_action};
pub use service::{
    AttemptOutcome, RecoveryNavigator, RecoveryService, RecoveryServiceBuilder,
    RecoveryServiceError, SupportContact, SupportRequest,
};
pub use session::{
    RecoveryAction, RecoveryConfig, RecoveryConfigBuilder, RecoveryError, RecoverySession,
    RecoverySnapshot, RecoveryState, Transition,
};
pub use types::{ClassifiedError, ErrorCode, ParseKindError, PaymentErrorKind, RawGatewayError};
