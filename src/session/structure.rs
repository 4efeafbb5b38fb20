//! Recovery session value object.

use super::config::RecoveryConfig;
use super::error::RecoveryError;
use super::snapshot::RecoverySnapshot;
use super::state::{RecoveryAction, RecoveryState, Transition};
use crate::classifier::Classifier;
use crate::guidance::guidance;
use crate::types::{ClassifiedError, RawGatewayError};

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// State of one checkout attempt's failure recovery.
///
/// The session is a plain value owned by the checkout flow that created it.
/// Every transition takes `&mut self`, so two checkouts (e.g. two browser
/// tabs) each hold their own session and cannot interfere.
///
/// A refused transition returns [`RecoveryError`] and leaves the session
/// exactly as it was.
///
/// # Example
///
/// ```rust
/// use payment_recovery::{RawGatewayError, RecoverySession, RecoveryState};
///
/// let mut session = RecoverySession::new(3);
/// session.on_failure(&RawGatewayError::with_code("card_declined")).unwrap();
///
/// assert_eq!(session.state(), RecoveryState::Failed { retry_count: 1 });
/// assert!(session.can_retry());
///
/// session.retry().unwrap();
/// assert_eq!(session.state(), RecoveryState::Retrying);
/// ```
#[derive(Debug, Clone)]
pub struct RecoverySession {
    classifier: Classifier,
    max_retries: u32,
    state: RecoveryState,
    current_error: Option<ClassifiedError>,
    retry_count: u32,
}

impl RecoverySession {
    /// Create a session with the default retry policy.
    pub fn new(max_retries: u32) -> Self {
        Self::with_classifier(Classifier::new(), max_retries)
    }

    /// Create a session from a configuration.
    pub fn with_config(config: &RecoveryConfig) -> Self {
        Self::with_classifier(
            Classifier::with_policy(config.retry_policy.clone()),
            config.max_retries,
        )
    }

    /// Create a session with a custom classifier.
    pub fn with_classifier(classifier: Classifier, max_retries: u32) -> Self {
        Self {
            classifier,
            max_retries,
            state: RecoveryState::Idle,
            current_error: None,
            retry_count: 0,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RecoveryState {
        self.state
    }

    /// Most recent classified failure, if any.
    pub fn current_error(&self) -> Option<&ClassifiedError> {
        self.current_error.as_ref()
    }

    /// Failures recorded so far.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    /// Retry ceiling for this session.
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Classifier used by [`on_failure`](Self::on_failure).
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Whether another attempt is currently permitted.
    ///
    /// True only when a failure is recorded, its kind is retryable and the
    /// ceiling has not been reached. Computed on every call.
    pub fn can_retry(&self) -> bool {
        self.current_error
            .as_ref()
            .is_some_and(|error| error.retryable)
            && self.retry_count < self.max_retries
    }

    /// Attempts left before the ceiling.
    pub fn attempts_remaining(&self) -> u32 {
        self.max_retries.saturating_sub(self.retry_count)
    }

    /// Returns true when the session is failed and retry is no longer offered.
    pub fn is_exhausted(&self) -> bool {
        self.state.is_failed() && !self.can_retry()
    }

    /// Classify a raw failure and record it.
    pub fn on_failure(&mut self, raw: &RawGatewayError) -> Result<&ClassifiedError, RecoveryError> {
        self.ensure_not_terminal(Transition::Failure)?;
        let error = self.classifier.classify(raw);
        self.record_failure(error)
    }

    /// Record an already classified failure.
    ///
    /// Increments the retry count exactly once and moves to `Failed`.
    pub fn record_failure(
        &mut self,
        error: ClassifiedError,
    ) -> Result<&ClassifiedError, RecoveryError> {
        self.ensure_not_terminal(Transition::Failure)?;

        self.retry_count = self.retry_count.saturating_add(1);
        self.state = RecoveryState::Failed {
            retry_count: self.retry_count,
        };

        #[cfg(feature = "tracing")]
        debug!(
            kind = %error.kind,
            retry_count = self.retry_count,
            max_retries = self.max_retries,
            "Payment attempt failed"
        );

        let error = self.current_error.insert(error);

        #[cfg(feature = "tracing")]
        if !(error.retryable && self.retry_count < self.max_retries) {
            warn!(
                kind = %error.kind,
                retry_count = self.retry_count,
                "Retry no longer available, offering back and support only"
            );
        }

        Ok(&*error)
    }

    /// Record a successful attempt.
    pub fn on_success(&mut self) -> Result<(), RecoveryError> {
        match self.state {
            RecoveryState::Idle | RecoveryState::Retrying => {
                self.state = RecoveryState::Succeeded;

                #[cfg(feature = "tracing")]
                debug!(retry_count = self.retry_count, "Payment succeeded");

                Ok(())
            }
            from => Err(self.refuse(from, Transition::Success)),
        }
    }

    /// Start a user-initiated retry.
    ///
    /// Valid only from `Failed` while [`can_retry`](Self::can_retry) holds.
    /// On success the session is `Retrying` until the outcome is recorded
    /// with [`on_failure`](Self::on_failure) or [`on_success`](Self::on_success).
    pub fn retry(&mut self) -> Result<(), RecoveryError> {
        if !self.state.is_failed() {
            return Err(self.refuse(self.state, Transition::Retry));
        }

        if let Some(error) = self.current_error.as_ref()
            && !self.can_retry()
        {
            let refused = RecoveryError::RetryNotAllowed {
                kind: error.kind,
                retryable: error.retryable,
                retry_count: self.retry_count,
                max_retries: self.max_retries,
            };

            #[cfg(feature = "tracing")]
            warn!(error = %refused, "Rejected retry");

            return Err(refused);
        }

        self.state = RecoveryState::Retrying;

        #[cfg(feature = "tracing")]
        debug!(retry_count = self.retry_count, "Retrying payment");

        Ok(())
    }

    /// Leave the recovery flow and return to the payment form.
    pub fn back(&mut self) -> Result<(), RecoveryError> {
        if !self.state.is_failed() {
            return Err(self.refuse(self.state, Transition::Back));
        }

        self.state = RecoveryState::Abandoned;

        #[cfg(feature = "tracing")]
        debug!(retry_count = self.retry_count, "Recovery abandoned");

        Ok(())
    }

    /// Validate that an initial submission may start.
    pub fn begin_checkout(&self) -> Result<(), RecoveryError> {
        match self.state {
            RecoveryState::Idle => Ok(()),
            from => Err(self.refuse(from, Transition::Checkout)),
        }
    }

    /// Actions to offer the user in the current state.
    pub fn available_actions(&self) -> Vec<RecoveryAction> {
        if !self.state.is_failed() {
            return Vec::new();
        }

        let mut actions = Vec::with_capacity(3);
        if self.can_retry() {
            actions.push(RecoveryAction::Retry);
        }
        actions.push(RecoveryAction::Back);
        actions.push(RecoveryAction::ContactSupport);
        actions
    }

    /// Observable state for the rendering layer.
    pub fn snapshot(&self) -> RecoverySnapshot {
        RecoverySnapshot {
            state: self.state,
            current_error: self.current_error.clone(),
            retry_count: self.retry_count,
            max_retries: self.max_retries,
            can_retry: self.can_retry(),
            actions: self.available_actions(),
            guidance: self.current_error.as_ref().map(|e| guidance(e.kind)),
        }
    }

    fn ensure_not_terminal(&self, transition: Transition) -> Result<(), RecoveryError> {
        if self.state.is_terminal() {
            return Err(self.refuse(self.state, transition));
        }
        Ok(())
    }

    fn refuse(&self, from: RecoveryState, transition: Transition) -> RecoveryError {
        #[cfg(feature = "tracing")]
        warn!(state = %from, transition = %transition, "Rejected transition");

        RecoveryError::InvalidTransition { from, transition }
    }
}
