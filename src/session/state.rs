//! Recovery flow states and transitions.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Lifecycle state of a [`RecoverySession`](crate::RecoverySession).
///
/// ```text
/// Idle ──► Failed(n) ──► Retrying ──► Failed(n+1)
///   │          │             │
///   │          └─► Abandoned └─► Succeeded
///   └─► Succeeded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecoveryState {
    /// No attempt has failed yet.
    Idle,
    /// The last attempt failed; `retry_count` failures recorded so far.
    Failed { retry_count: u32 },
    /// A user-initiated retry is in flight.
    Retrying,
    /// Payment went through.
    Succeeded,
    /// The user went back to the payment form.
    Abandoned,
}

impl RecoveryState {
    /// Returns true for `Succeeded` and `Abandoned`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Abandoned)
    }

    /// Returns true for any `Failed` state.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl Display for RecoveryState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Failed { retry_count } => write!(f, "failed({})", retry_count),
            Self::Retrying => write!(f, "retrying"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Abandoned => write!(f, "abandoned"),
        }
    }
}

/// Inputs that move a session between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Initial payment submission.
    Checkout,
    /// A payment attempt failed.
    Failure,
    /// A payment attempt succeeded.
    Success,
    /// The user asked to try again.
    Retry,
    /// The user went back to the payment form.
    Back,
}

impl Display for Transition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Checkout => "checkout",
            Self::Failure => "record failure",
            Self::Success => "record success",
            Self::Retry => "retry",
            Self::Back => "go back",
        };
        f.write_str(name)
    }
}

/// Actions the rendering layer may offer the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryAction {
    Retry,
    Back,
    ContactSupport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(RecoveryState::Succeeded.is_terminal());
        assert!(RecoveryState::Abandoned.is_terminal());
        assert!(!RecoveryState::Idle.is_terminal());
        assert!(!RecoveryState::Retrying.is_terminal());
        assert!(!RecoveryState::Failed { retry_count: 2 }.is_terminal());
    }

    #[test]
    fn test_state_serialization() {
        let value = serde_json::to_value(RecoveryState::Failed { retry_count: 2 }).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "failed", "retry_count": 2 }));

        let value = serde_json::to_value(RecoveryState::Idle).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "idle" }));
    }
}
