//! Locked artifact records.
//!
//! A [`Record`] pins one artifact by identity `(group_id, artifact_id, version)`
//! together with the checksum recorded for its content. The kind parameter
//! keeps dependencies and build plugins apart: a [`DependencyRecord`] and a
//! [`PluginRecord`] are different types and cannot end up in the same set.

use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Marker trait for the kinds of records a lockfile holds
pub trait RecordKind:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Hash + PartialOrd + Ord + Default + Send + Sync + 'static
{
    /// Singular label used in reports ("dependency")
    const LABEL: &'static str;
    /// Plural label used in reports ("dependencies")
    const PLURAL: &'static str;
}

/// A library dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Dependency;

/// A build-tool plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Plugin;

impl RecordKind for Dependency {
    const LABEL: &'static str = "dependency";
    const PLURAL: &'static str = "dependencies";
}

impl RecordKind for Plugin {
    const LABEL: &'static str = "plugin";
    const PLURAL: &'static str = "plugins";
}

/// The `(group, artifact, version)` triple naming an artifact without its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity<'a> {
    pub group_id: &'a str,
    pub artifact_id: &'a str,
    pub version: &'a str,
}

impl fmt::Display for Identity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// One pinned artifact and its recorded checksum.
///
/// Equality, hashing and ordering cover every field, so two records are the
/// same entry only when identity, algorithm and checksum all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase", bound = "")]
pub struct Record<K: RecordKind> {
    group_id: String,
    artifact_id: String,
    version: String,
    checksum_algorithm: String,
    checksum: String,
    #[serde(skip)]
    kind: PhantomData<K>,
}

pub type DependencyRecord = Record<Dependency>;
pub type PluginRecord = Record<Plugin>;

impl<K: RecordKind> Record<K> {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        checksum_algorithm: impl Into<String>,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            checksum_algorithm: checksum_algorithm.into(),
            checksum: checksum.into(),
            kind: PhantomData,
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn checksum_algorithm(&self) -> &str {
        &self.checksum_algorithm
    }

    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn identity(&self) -> Identity<'_> {
        Identity {
            group_id: &self.group_id,
            artifact_id: &self.artifact_id,
            version: &self.version,
        }
    }

    /// Same identity and algorithm, different digest
    pub fn is_tampered_against(&self, observed: &Self) -> bool {
        self.identity() == observed.identity()
            && self.checksum_algorithm == observed.checksum_algorithm
            && self.checksum != observed.checksum
    }
}

impl<K: RecordKind> fmt::Display for Record<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}:{})",
            self.identity(),
            self.checksum_algorithm,
            self.checksum
        )
    }
}
