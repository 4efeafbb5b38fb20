//! Retryability classification shared by payment failures and flow errors.

/// Trait for errors that can be classified as retryable or requiring escalation.
///
/// Two questions are answered separately:
///
/// 1. **Retry** (`is_retryable`): whether the user may submit the payment again.
///
/// 2. **Escalation** (`should_contact_support`): whether the flow should steer
///    the user towards human support. This holds for hard failures and for
///    failures whose retry budget is spent.
///
/// # Examples
///
/// ```rust
/// use payment_recovery::RetryableError;
///
/// enum CheckoutIssue {
///     Declined,        // Another card might work
///     Fraudulent,      // Never retry, talk to a human
/// }
///
/// impl RetryableError for CheckoutIssue {
///     fn is_retryable(&self) -> bool {
///         matches!(self, CheckoutIssue::Declined)
///     }
/// }
///
/// assert!(CheckoutIssue::Fraudulent.should_contact_support());
/// assert!(!CheckoutIssue::Declined.should_contact_support());
/// ```
pub trait RetryableError {
    /// Returns true if another payment attempt is permitted.
    fn is_retryable(&self) -> bool;

    /// Returns true if the user should be pointed at support.
    ///
    /// Default implementation returns the negation of `is_retryable()`.
    fn should_contact_support(&self) -> bool {
        !self.is_retryable()
    }
}
