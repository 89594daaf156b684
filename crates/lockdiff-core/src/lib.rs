//! Core of lockdiff: the record model, manifest snapshots and the lockfile
//! differ, plus the error types shared with the `lockdiff` binary.

// Core functionality
pub mod core;

// Locked artifact records
pub mod record;

// Manifest snapshots
pub mod snapshot;

// Lockfile differ
pub mod diff;

// Re-export commonly used types
pub use self::core::{format_error_with_help, ErrorHelp, LockError, LockResult};
pub use diff::{diff, KindDifference, LockfileDifference};
pub use record::{
    Dependency, DependencyRecord, Identity, Plugin, PluginRecord, Record, RecordKind,
};
pub use snapshot::ManifestSnapshot;
