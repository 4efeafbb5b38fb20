//! Payment gateway abstraction and gateway-specific error translation.

pub(crate) mod traits;

#[cfg(feature = "stripe")]
pub mod stripe;

pub use traits::{CheckoutGateway, GatewayError};
