//! Navigation collaborator trait.

use super::support::SupportRequest;
use std::error::Error as StdError;
use std::future::Future;

/// External collaborator for the non-payment side effects of the flow.
///
/// Implementations typically live in the rendering layer: returning the user
/// to the payment form and opening a mail or phone channel.
pub trait RecoveryNavigator: Send + Sync {
    /// Error type for navigation failures.
    type Error: StdError + Send + Sync + 'static;

    /// Show the payment form again after the user chose to go back.
    fn return_to_payment_form(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Open a support channel for the given request.
    fn open_support(
        &self,
        request: &SupportRequest,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
