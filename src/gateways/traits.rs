//! Gateway trait definitions.

use crate::types::RawGatewayError;
use std::error::Error as StdError;
use std::future::Future;

/// Translation boundary from a gateway's own error type to the neutral
/// [`RawGatewayError`] shape.
///
/// Keeping gateway vocabulary behind this trait lets the classifier stay
/// gateway-agnostic and testable without a live gateway.
///
/// # Example
///
/// ```rust
/// use payment_recovery::{Classifier, GatewayError, PaymentErrorKind, RawGatewayError};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl std::fmt::Display for Timeout {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "request timed out")
///     }
/// }
///
/// impl std::error::Error for Timeout {}
///
/// impl GatewayError for Timeout {
///     fn to_raw(&self) -> RawGatewayError {
///         RawGatewayError::default().message(self.to_string())
///     }
///
///     fn is_transport_failure(&self) -> bool {
///         true
///     }
/// }
///
/// let error = Classifier::new().classify_gateway_error(&Timeout);
/// assert_eq!(error.kind, PaymentErrorKind::NetworkError);
/// ```
pub trait GatewayError: StdError {
    /// Translate into the neutral `{code, message, type}` shape.
    fn to_raw(&self) -> RawGatewayError;

    /// Returns true if the failure happened before the gateway answered.
    ///
    /// Default implementation returns false.
    fn is_transport_failure(&self) -> bool {
        false
    }
}

/// External payment collaborator that submits a payment to a gateway.
///
/// The recovery flow never processes payments itself; it calls this trait
/// on the initial attempt and on every user-initiated retry.
///
/// # Type Parameters
///
/// - `Payment`: whatever the gateway needs to submit a charge
/// - `Receipt`: what a successful submission returns
/// - `Error`: the gateway's own failure type
///
/// # Example
///
/// ```rust,ignore
/// use payment_recovery::CheckoutGateway;
///
/// #[derive(Clone)]
/// struct MyGateway { /* ... */ }
///
/// impl CheckoutGateway for MyGateway {
///     type Payment = PaymentIntentId;
///     type Receipt = ChargeId;
///     type Error = MyGatewayError;
///
///     async fn submit_payment(&self, payment: &Self::Payment) -> Result<ChargeId, MyGatewayError> {
///         // Confirm the payment intent with the gateway
///     }
/// }
/// ```
pub trait CheckoutGateway: Send + Sync {
    /// Input for a payment submission.
    type Payment: Send + Sync;

    /// Output of a successful submission.
    type Receipt: Send;

    /// Error type returned by the gateway.
    type Error: GatewayError + Send + Sync + 'static;

    /// Submit the payment once.
    ///
    /// Implementations must not retry internally; retries are driven by the
    /// user through the recovery flow.
    fn submit_payment(
        &self,
        payment: &Self::Payment,
    ) -> impl Future<Output = Result<Self::Receipt, Self::Error>> + Send;
}
