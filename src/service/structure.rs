//! Main service implementation.

use super::error::RecoveryServiceError;
use super::support::{SupportContact, SupportRequest};
use super::traits::RecoveryNavigator;
use crate::classifier::RetryPolicy;
use crate::gateways::CheckoutGateway;
use crate::session::{RecoveryConfig, RecoveryConfigBuilder, RecoverySession};
use crate::types::ClassifiedError;
use std::error::Error as StdError;

#[cfg(feature = "tracing")]
use tracing::{info, warn};

/// Result of one payment submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome<R> {
    /// The gateway accepted the payment.
    Succeeded(R),
    /// The gateway failed; the classified error is now the session's current error.
    Failed(ClassifiedError),
}

impl<R> AttemptOutcome<R> {
    /// Returns true if the attempt succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Drives [`RecoverySession`]s against a gateway and a navigator.
///
/// The service holds no per-checkout state; each checkout creates its own
/// session with [`start_session`](Self::start_session) and passes it to
/// every call. Retries are never automatic: [`retry`](Self::retry) runs only
/// when the user asks for it.
///
/// # Type Parameters
///
/// - `G`: the payment gateway collaborator
/// - `N`: the navigation collaborator
///
/// # Example
///
/// ```rust,ignore
/// use payment_recovery::{AttemptOutcome, RecoveryService};
///
/// let service = RecoveryService::builder(gateway, navigator)
///     .max_retries(3)
///     .build();
///
/// let mut session = service.start_session();
/// match service.checkout(&mut session, &payment).await? {
///     AttemptOutcome::Succeeded(receipt) => show_receipt(receipt),
///     AttemptOutcome::Failed(_) => render(session.snapshot()),
/// }
///
/// // Later, when the user clicks "Try again"
/// service.retry(&mut session, &payment).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RecoveryService<G: CheckoutGateway, N: RecoveryNavigator> {
    gateway: G,
    navigator: N,
    config: RecoveryConfig,
    support: SupportContact,
}

impl<G: CheckoutGateway, N: RecoveryNavigator> RecoveryService<G, N> {
    /// Create a new service with a custom configuration.
    pub fn new(gateway: G, navigator: N, config: RecoveryConfig) -> Self {
        Self {
            gateway,
            navigator,
            config,
            support: SupportContact::default(),
        }
    }

    /// Create a new service with default configuration.
    pub fn with_collaborators(gateway: G, navigator: N) -> Self {
        Self::new(gateway, navigator, RecoveryConfig::default())
    }

    /// Create a new builder for RecoveryService.
    pub fn builder(gateway: G, navigator: N) -> RecoveryServiceBuilder<G, N> {
        RecoveryServiceBuilder::new(gateway, navigator)
    }

    /// Get reference to the gateway.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Get reference to the navigator.
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Get reference to the service configuration.
    pub fn config(&self) -> &RecoveryConfig {
        &self.config
    }

    /// Get reference to the support contact.
    pub fn support_contact(&self) -> &SupportContact {
        &self.support
    }

    /// Create a fresh session for a new checkout.
    pub fn start_session(&self) -> RecoverySession {
        RecoverySession::with_config(&self.config)
    }

    /// Submit the initial payment for an idle session.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "recovery.checkout", skip_all)
    )]
    pub async fn checkout(
        &self,
        session: &mut RecoverySession,
        payment: &G::Payment,
    ) -> Result<AttemptOutcome<G::Receipt>, RecoveryServiceError> {
        session.begin_checkout()?;
        self.submit(session, payment).await
    }

    /// Retry the payment after a failure.
    ///
    /// Refused without contacting the gateway when the session does not
    /// permit a retry.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "recovery.retry",
            skip_all,
            fields(retry_count = session.retry_count())
        )
    )]
    pub async fn retry(
        &self,
        session: &mut RecoverySession,
        payment: &G::Payment,
    ) -> Result<AttemptOutcome<G::Receipt>, RecoveryServiceError> {
        session.retry()?;
        self.submit(session, payment).await
    }

    /// Abandon the session and send the user back to the payment form.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "recovery.back", skip_all)
    )]
    pub async fn back(&self, session: &mut RecoverySession) -> Result<(), RecoveryServiceError> {
        session.back()?;

        self.navigator
            .return_to_payment_form()
            .await
            .map_err(|e| RecoveryServiceError::Navigation {
                source: Box::new(e) as Box<dyn StdError + Send + Sync>,
            })
    }

    /// Open a support channel. The session is not modified.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "recovery.contact_support", skip_all)
    )]
    pub async fn contact_support(
        &self,
        session: &RecoverySession,
    ) -> Result<SupportRequest, RecoveryServiceError> {
        let request = SupportRequest::from_session(session, &self.support)?;

        #[cfg(feature = "tracing")]
        info!(
            kind = ?request.kind,
            retry_count = request.retry_count,
            exhausted = request.exhausted,
            "Escalating to support"
        );

        self.navigator
            .open_support(&request)
            .await
            .map_err(|e| RecoveryServiceError::Navigation {
                source: Box::new(e) as Box<dyn StdError + Send + Sync>,
            })?;

        Ok(request)
    }

    async fn submit(
        &self,
        session: &mut RecoverySession,
        payment: &G::Payment,
    ) -> Result<AttemptOutcome<G::Receipt>, RecoveryServiceError> {
        match self.gateway.submit_payment(payment).await {
            Ok(receipt) => {
                session.on_success()?;

                #[cfg(feature = "tracing")]
                info!(retry_count = session.retry_count(), "Payment accepted");

                Ok(AttemptOutcome::Succeeded(receipt))
            }
            Err(e) => {
                let classified = session.classifier().classify_gateway_error(&e);

                #[cfg(feature = "tracing")]
                info!(error = %e, kind = %classified.kind, "Payment rejected by gateway");

                let error = session.record_failure(classified)?.clone();

                #[cfg(feature = "tracing")]
                if session.is_exhausted() {
                    warn!(
                        kind = %error.kind,
                        retry_count = session.retry_count(),
                        max_retries = session.max_retries(),
                        "Retry unavailable, user must go back or contact support"
                    );
                }

                Ok(AttemptOutcome::Failed(error))
            }
        }
    }
}

/// Builder for RecoveryService.
///
/// # Example
///
/// ```rust,ignore
/// use payment_recovery::{RecoveryService, SupportContact};
///
/// let service = RecoveryService::builder(gateway, navigator)
///     .max_retries(5)
///     .support_contact(SupportContact::default().with_email("billing@example.com"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RecoveryServiceBuilder<G: CheckoutGateway, N: RecoveryNavigator> {
    gateway: G,
    navigator: N,
    config_builder: RecoveryConfigBuilder,
    support: SupportContact,
}

impl<G: CheckoutGateway, N: RecoveryNavigator> RecoveryServiceBuilder<G, N> {
    /// Create a new builder with the given collaborators.
    pub fn new(gateway: G, navigator: N) -> Self {
        Self {
            gateway,
            navigator,
            config_builder: RecoveryConfigBuilder::default(),
            support: SupportContact::default(),
        }
    }

    /// Set the retry ceiling.
    ///
    /// Default: 3
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config_builder = self.config_builder.max_retries(max_retries);
        self
    }

    /// Set the retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config_builder = self.config_builder.retry_policy(policy);
        self
    }

    /// Set the full configuration.
    pub fn config(mut self, config: RecoveryConfig) -> Self {
        self.config_builder = RecoveryConfigBuilder::new()
            .max_retries(config.max_retries)
            .retry_policy(config.retry_policy);
        self
    }

    /// Set the support contact details.
    pub fn support_contact(mut self, support: SupportContact) -> Self {
        self.support = support;
        self
    }

    /// Build the RecoveryService.
    pub fn build(self) -> RecoveryService<G, N> {
        let mut service =
            RecoveryService::new(self.gateway, self.navigator, self.config_builder.build());
        service.support = self.support;
        service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RetryableError;
    use crate::gateways::GatewayError;
    use crate::session::{RecoveryError, RecoveryState};
    use crate::types::{PaymentErrorKind, RawGatewayError};
    use std::collections::VecDeque;
    use std::fmt;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct MockGatewayError(RawGatewayError);

    impl fmt::Display for MockGatewayError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "mock gateway error: {:?}", self.0.code)
        }
    }

    impl StdError for MockGatewayError {}

    impl GatewayError for MockGatewayError {
        fn to_raw(&self) -> RawGatewayError {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct MockGateway {
        outcomes: Mutex<VecDeque<Result<&'static str, MockGatewayError>>>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn scripted(outcomes: Vec<Result<&'static str, &'static str>>) -> Self {
            let outcomes = outcomes
                .into_iter()
                .map(|o| o.map_err(|code| MockGatewayError(RawGatewayError::with_code(code))))
                .collect();
            Self {
                outcomes: Mutex::new(outcomes),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl CheckoutGateway for MockGateway {
        type Payment = u64;
        type Receipt = &'static str;
        type Error = MockGatewayError;

        async fn submit_payment(&self, _payment: &u64) -> Result<&'static str, MockGatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok("receipt"))
        }
    }

    #[derive(Debug)]
    struct NavigationFailed;

    impl fmt::Display for NavigationFailed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "navigation failed")
        }
    }

    impl StdError for NavigationFailed {}

    #[derive(Default)]
    struct MockNavigator {
        events: Mutex<Vec<String>>,
    }

    impl RecoveryNavigator for MockNavigator {
        type Error = NavigationFailed;

        async fn return_to_payment_form(&self) -> Result<(), NavigationFailed> {
            self.events.lock().unwrap().push("payment_form".to_string());
            Ok(())
        }

        async fn open_support(&self, request: &SupportRequest) -> Result<(), NavigationFailed> {
            self.events
                .lock()
                .unwrap()
                .push(format!("support:{:?}", request.kind));
            Ok(())
        }
    }

    fn service(
        outcomes: Vec<Result<&'static str, &'static str>>,
        max_retries: u32,
    ) -> RecoveryService<MockGateway, MockNavigator> {
        RecoveryService::builder(MockGateway::scripted(outcomes), MockNavigator::default())
            .max_retries(max_retries)
            .build()
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let service = service(vec![Ok("ch_1")], 3);
        let mut session = service.start_session();

        let outcome = service.checkout(&mut session, &1000).await.unwrap();

        assert_eq!(outcome, AttemptOutcome::Succeeded("ch_1"));
        assert_eq!(session.state(), RecoveryState::Succeeded);
        assert_eq!(session.retry_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_then_retry_success() {
        let service = service(vec![Err("card_declined"), Ok("ch_2")], 3);
        let mut session = service.start_session();

        let outcome = service.checkout(&mut session, &1000).await.unwrap();
        match outcome {
            AttemptOutcome::Failed(error) => assert_eq!(error.kind, PaymentErrorKind::CardDeclined),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(session.state(), RecoveryState::Failed { retry_count: 1 });

        let outcome = service.retry(&mut session, &1000).await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(session.state(), RecoveryState::Succeeded);
        assert_eq!(service.gateway().calls(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_retry_does_not_call_gateway() {
        let service = service(vec![Err("card_declined"), Err("card_declined")], 2);
        let mut session = service.start_session();

        service.checkout(&mut session, &1000).await.unwrap();
        service.retry(&mut session, &1000).await.unwrap();
        assert!(!session.can_retry());
        assert_eq!(service.gateway().calls(), 2);

        let err = service.retry(&mut session, &1000).await.unwrap_err();
        assert!(matches!(
            err,
            RecoveryServiceError::Recovery(RecoveryError::RetryNotAllowed { .. })
        ));
        assert!(err.should_contact_support());
        assert_eq!(service.gateway().calls(), 2);
        assert_eq!(session.retry_count(), 2);
        assert_eq!(session.state(), RecoveryState::Failed { retry_count: 2 });
    }

    #[tokio::test]
    async fn test_checkout_twice_is_rejected() {
        let service = service(vec![Err("processing_error")], 3);
        let mut session = service.start_session();

        service.checkout(&mut session, &1000).await.unwrap();
        let err = service.checkout(&mut session, &1000).await.unwrap_err();

        assert!(matches!(
            err,
            RecoveryServiceError::Recovery(RecoveryError::InvalidTransition { .. })
        ));
        assert_eq!(service.gateway().calls(), 1);
    }

    #[tokio::test]
    async fn test_back_notifies_navigator() {
        let service = service(vec![Err("expired_card")], 3);
        let mut session = service.start_session();

        service.checkout(&mut session, &1000).await.unwrap();
        service.back(&mut session).await.unwrap();

        assert_eq!(session.state(), RecoveryState::Abandoned);
        assert_eq!(
            *service.navigator().events.lock().unwrap(),
            vec!["payment_form".to_string()]
        );
    }

    #[tokio::test]
    async fn test_back_before_failure_is_rejected_without_navigation() {
        let service = service(vec![], 3);
        let mut session = service.start_session();

        assert!(service.back(&mut session).await.is_err());
        assert!(service.navigator().events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_contact_support_leaves_session_unchanged() {
        let service = RecoveryService::builder(
            MockGateway::scripted(vec![Err("rate_limit_error")]),
            MockNavigator::default(),
        )
        .support_contact(SupportContact::default().with_email("billing@example.com"))
        .build();
        let mut session = service.start_session();

        service.checkout(&mut session, &1000).await.unwrap();
        let before = session.snapshot();

        let request = service.contact_support(&session).await.unwrap();

        assert_eq!(session.snapshot(), before);
        assert_eq!(request.kind, Some(PaymentErrorKind::RateLimit));
        assert_eq!(request.links.len(), 1);
        assert_eq!(
            *service.navigator().events.lock().unwrap(),
            vec!["support:Some(RateLimit)".to_string()]
        );
    }

    #[test]
    fn test_builder_config() {
        let service = RecoveryService::builder(MockGateway::default(), MockNavigator::default())
            .config(RecoveryConfig::lenient())
            .build();
        assert_eq!(service.config().max_retries, 5);
        assert_eq!(service.start_session().max_retries(), 5);
    }
}
