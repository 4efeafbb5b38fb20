//! Bounded-retry recovery session for a single checkout attempt.

pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod snapshot;
pub(crate) mod state;
pub(crate) mod structure;

pub use config::{RecoveryConfig, RecoveryConfigBuilder};
pub use error::RecoveryError;
pub use snapshot::RecoverySnapshot;
pub use state::{RecoveryAction, RecoveryState, Transition};
pub use structure::RecoverySession;
