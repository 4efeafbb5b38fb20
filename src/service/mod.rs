//! Recovery service driving a session against external collaborators.

pub(crate) mod error;
pub(crate) mod structure;
pub(crate) mod support;
pub(crate) mod traits;

pub use error::RecoveryServiceError;
pub use structure::{AttemptOutcome, RecoveryService, RecoveryServiceBuilder};
pub use support::{SupportContact, SupportRequest};
pub use traits::RecoveryNavigator;
