//! Calculator sessions.
//!
//! This module is the stateful shell around the pure [`crate::core`]:
//!
//! - **Calculator**: owns display, expression, entry mode and history and
//!   consumes one token at a time
//! - **Snapshots**: immutable copies of the session handed to renderers
//! - **Observers**: callbacks notified with a snapshot after each token

mod error;
mod machine;
mod snapshot;

pub use error::SnapshotError;
pub use machine::{Calculator, Observer, SubscriptionId, CLEARED_DISPLAY};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
