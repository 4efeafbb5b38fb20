//! Stripe error translation.
//!
//! Stripe reports failures as a JSON envelope:
//!
//! ```json
//! {
//!   "error": {
//!     "type": "card_error",
//!     "code": "card_declined",
//!     "decline_code": "insufficient_funds",
//!     "message": "Your card has insufficient funds."
//!   }
//! }
//! ```
//!
//! [`StripeError`] carries either such an API error or a connection failure
//! and implements [`GatewayError`](crate::GatewayError) so the classifier can
//! consume it.

mod errors;

pub use errors::{StripeApiError, StripeError, StripeErrorParse, StripeErrorType};
