//! Snapshot metric source for statwatch.
//!
//! Serves statistics and managed-object attributes from a JSON document,
//! either captured from a live instance or written by hand for tests.

mod document;
mod source;

pub use document::{ManagedObject, SnapshotDocument};
pub use source::SnapshotSource;
