//! Observable session state for rendering.

use super::state::{RecoveryAction, RecoveryState};
use crate::guidance::Guidance;
use crate::types::ClassifiedError;
use serde::Serialize;

/// Point-in-time view of a [`RecoverySession`](crate::RecoverySession).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverySnapshot {
    pub state: RecoveryState,
    pub current_error: Option<ClassifiedError>,
    pub retry_count: u32,
    pub max_retries: u32,
    pub can_retry: bool,
    /// Actions to render; `Retry` is present only when `can_retry` holds.
    pub actions: Vec<RecoveryAction>,
    /// Guidance for the current error's kind.
    pub guidance: Option<Guidance>,
}
