//! lockdiff: supply-chain integrity checks for dependency lockfiles
//!
//! This crate re-exports the record model and differ from `lockdiff-core` and
//! adds the pieces around it: lockfile loading, checksum computation over a
//! local artifact repository, configuration and report rendering.

pub use lockdiff_core::{
    diff, format_error_with_help, Dependency, DependencyRecord, ErrorHelp, Identity,
    KindDifference, LockError, LockResult, LockfileDifference, ManifestSnapshot, Plugin,
    PluginRecord, Record, RecordKind,
};

/// Core module re-exported from lockdiff-core.
pub mod core {
    pub use lockdiff_core::core::*;
}

/// Configuration management.
pub mod config;

/// Lockfile model, loading and validation.
pub mod lockfile;

/// Checksums and observation of the local artifact repository.
pub mod integrity;

/// Report rendering.
pub mod report;
