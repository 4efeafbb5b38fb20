//! Session configuration types.

use crate::classifier::RetryPolicy;
use crate::types::PaymentErrorKind;
use serde::{Deserialize, Serialize};

/// Configuration for a recovery session.
///
/// `max_retries` bounds the number of failed attempts after which retry is
/// no longer offered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Failed attempts allowed before retry is disabled.
    pub max_retries: u32,
    /// Per-kind retryability.
    pub retry_policy: RetryPolicy,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_policy: RetryPolicy::default(),
        }
    }
}

impl RecoveryConfig {
    /// Create a new builder for RecoveryConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use payment_recovery::{PaymentErrorKind, RecoveryConfig};
    ///
    /// let config = RecoveryConfig::builder()
    ///     .max_retries(5)
    ///     .retry_override(PaymentErrorKind::RateLimit, false)
    ///     .build();
    ///
    /// assert_eq!(config.max_retries, 5);
    /// assert!(!config.retry_policy.is_retryable(PaymentErrorKind::RateLimit));
    /// ```
    pub fn builder() -> RecoveryConfigBuilder {
        RecoveryConfigBuilder::default()
    }

    /// Single retry; for flows where repeated attempts are costly.
    pub fn strict() -> Self {
        Self {
            max_retries: 1,
            ..Self::default()
        }
    }

    /// Five retries.
    pub fn lenient() -> Self {
        Self {
            max_retries: 5,
            ..Self::default()
        }
    }

    /// Create a new config with a custom retry ceiling.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Create a new config with a custom retry policy.
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }
}

/// Builder for RecoveryConfig.
#[derive(Debug, Clone, Default)]
pub struct RecoveryConfigBuilder {
    config: RecoveryConfig,
}

impl RecoveryConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retry ceiling.
    ///
    /// Default: 3
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Replace the retry policy.
    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config.retry_policy = policy;
        self
    }

    /// Override retryability for a single kind.
    pub fn retry_override(mut self, kind: PaymentErrorKind, retryable: bool) -> Self {
        self.config.retry_policy = self.config.retry_policy.with_override(kind, retryable);
        self
    }

    /// Build the RecoveryConfig.
    pub fn build(self) -> RecoveryConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = RecoveryConfig::default();
        assert_eq!(config.max_retries, 3);
        assert!(config.retry_policy.overrides().is_empty());
    }

    #[test]
    fn test_presets() {
        assert_eq!(RecoveryConfig::strict().max_retries, 1);
        assert_eq!(RecoveryConfig::lenient().max_retries, 5);
    }

    #[test]
    fn test_config_builder_default() {
        let config = RecoveryConfigBuilder::new().build();
        assert_eq!(config, RecoveryConfig::default());
    }

    #[test]
    fn test_config_with_methods() {
        let config = RecoveryConfig::default()
            .with_max_retries(2)
            .with_retry_policy(
                RetryPolicy::default().with_override(PaymentErrorKind::Unknown, false),
            );

        assert_eq!(config.max_retries, 2);
        assert!(!config.retry_policy.is_retryable(PaymentErrorKind::Unknown));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: RecoveryConfig = serde_json::from_str(r#"{"max_retries": 4}"#).unwrap();
        assert_eq!(config.max_retries, 4);
        assert!(config.retry_policy.is_retryable(PaymentErrorKind::RateLimit));

        let config: RecoveryConfig = serde_json::from_str(
            r#"{"retry_policy": {"overrides": {"expired_card": false}}}"#,
        )
        .unwrap();
        assert_eq!(config.max_retries, 3);
        assert!(!config.retry_policy.is_retryable(PaymentErrorKind::ExpiredCard));
    }
}
