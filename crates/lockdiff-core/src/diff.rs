//! Lockfile differ.
//!
//! Compares a recorded [`ManifestSnapshot`] against a freshly observed one and
//! classifies every divergence, per record kind, as missing in the project,
//! missing in the lockfile, or tampered with.

use crate::record::{Dependency, Plugin, Record, RecordKind};
use crate::snapshot::ManifestSnapshot;
use std::collections::BTreeSet;
use tracing::debug;

/// Records of `left` with no full-record match in `right`
pub fn difference<K: RecordKind>(
    left: &BTreeSet<Record<K>>,
    right: &BTreeSet<Record<K>>,
) -> BTreeSet<Record<K>> {
    left.iter()
        .filter(|record| !right.contains(record))
        .cloned()
        .collect()
}

/// Recorded entries whose identity and algorithm match an observed entry but
/// whose checksum differs.
///
/// Every pair is compared so duplicate identities on either side are
/// tolerated; a recorded entry is reported once however many partners it
/// mismatches.
pub fn tampered<K: RecordKind>(
    from_file: &BTreeSet<Record<K>>,
    from_project: &BTreeSet<Record<K>>,
) -> BTreeSet<Record<K>> {
    let mut tampered = BTreeSet::new();
    for recorded in from_file {
        for observed in from_project {
            if recorded.is_tampered_against(observed) {
                tampered.insert(recorded.clone());
            }
        }
    }
    tampered
}

/// The three divergence sets for one record kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindDifference<K: RecordKind> {
    missing_in_project: BTreeSet<Record<K>>,
    missing_in_file: BTreeSet<Record<K>>,
    tampered_with: BTreeSet<Record<K>>,
}

impl<K: RecordKind> KindDifference<K> {
    pub fn compute(from_file: &BTreeSet<Record<K>>, from_project: &BTreeSet<Record<K>>) -> Self {
        let result = Self {
            missing_in_project: difference(from_file, from_project),
            missing_in_file: difference(from_project, from_file),
            tampered_with: tampered(from_file, from_project),
        };

        debug!(
            kind = K::PLURAL,
            missing_in_project = result.missing_in_project.len(),
            missing_in_file = result.missing_in_file.len(),
            tampered_with = result.tampered_with.len(),
            "compared records"
        );

        result
    }

    /// Recorded entries the project no longer has
    pub fn missing_in_project(&self) -> &BTreeSet<Record<K>> {
        &self.missing_in_project
    }

    /// Observed entries the lockfile does not record
    pub fn missing_in_file(&self) -> &BTreeSet<Record<K>> {
        &self.missing_in_file
    }

    /// Recorded entries whose content changed without a version change
    pub fn tampered_with(&self) -> &BTreeSet<Record<K>> {
        &self.tampered_with
    }

    pub fn is_empty(&self) -> bool {
        self.missing_in_project.is_empty()
            && self.missing_in_file.is_empty()
            && self.tampered_with.is_empty()
    }

    /// Raw sum of the three sets; a tampered entry is counted in more than one
    pub fn len(&self) -> usize {
        self.missing_in_project.len() + self.missing_in_file.len() + self.tampered_with.len()
    }
}

/// Differences between a recorded lockfile and the observed project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfileDifference {
    dependencies: KindDifference<Dependency>,
    plugins: KindDifference<Plugin>,
}

impl LockfileDifference {
    pub fn diff(from_file: &ManifestSnapshot, from_project: &ManifestSnapshot) -> Self {
        Self {
            dependencies: KindDifference::compute(
                from_file.dependencies(),
                from_project.dependencies(),
            ),
            plugins: KindDifference::compute(from_file.plugins(), from_project.plugins()),
        }
    }

    pub fn dependencies(&self) -> &KindDifference<Dependency> {
        &self.dependencies
    }

    pub fn plugins(&self) -> &KindDifference<Plugin> {
        &self.plugins
    }

    pub fn missing_dependencies_in_project(&self) -> &BTreeSet<Record<Dependency>> {
        self.dependencies.missing_in_project()
    }

    pub fn missing_dependencies_in_file(&self) -> &BTreeSet<Record<Dependency>> {
        self.dependencies.missing_in_file()
    }

    pub fn dependencies_with_invalid_checksums(&self) -> &BTreeSet<Record<Dependency>> {
        self.dependencies.tampered_with()
    }

    pub fn missing_plugins_in_project(&self) -> &BTreeSet<Record<Plugin>> {
        self.plugins.missing_in_project()
    }

    pub fn missing_plugins_in_file(&self) -> &BTreeSet<Record<Plugin>> {
        self.plugins.missing_in_file()
    }

    pub fn plugins_with_invalid_checksums(&self) -> &BTreeSet<Record<Plugin>> {
        self.plugins.tampered_with()
    }

    /// True when the two snapshots hold exactly the same records
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.plugins.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dependencies.len() + self.plugins.len()
    }
}

/// Diff a recorded snapshot against an observed one
pub fn diff(from_file: &ManifestSnapshot, from_project: &ManifestSnapshot) -> LockfileDifference {
    LockfileDifference::diff(from_file, from_project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{DependencyRecord, PluginRecord};

    fn dep(artifact: &str, version: &str, checksum: &str) -> DependencyRecord {
        Record::new("org.example", artifact, version, "SHA-256", checksum)
    }

    fn plugin(artifact: &str, version: &str, checksum: &str) -> PluginRecord {
        Record::new("org.apache.maven.plugins", artifact, version, "SHA-256", checksum)
    }

    fn set<K: RecordKind>(records: &[Record<K>]) -> BTreeSet<Record<K>> {
        records.iter().cloned().collect()
    }

    #[test]
    fn test_difference_is_full_record() {
        let left = set(&[dep("a", "1", "aa"), dep("b", "1", "bb")]);
        let right = set(&[dep("a", "1", "aa"), dep("b", "1", "cc")]);
        assert_eq!(difference(&left, &right), set(&[dep("b", "1", "bb")]));
        assert_eq!(difference(&right, &left), set(&[dep("b", "1", "cc")]));
    }

    #[test]
    fn test_identical_snapshots_yield_nothing() {
        let snapshot = ManifestSnapshot::from_records(
            vec![dep("a", "1", "aa"), dep("b", "2", "bb")],
            vec![plugin("compiler", "3.11.0", "cc")],
        );
        let result = diff(&snapshot, &snapshot);
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_empty_snapshots() {
        let result = diff(&ManifestSnapshot::new(), &ManifestSnapshot::new());
        assert!(result.is_empty());
    }

    #[test]
    fn test_tamper_detection() {
        let recorded = dep("lib", "1.0", "deadbeef");
        let observed = dep("lib", "1.0", "facefeed");
        let from_file = ManifestSnapshot::new().with_dependency(recorded.clone());
        let from_project = ManifestSnapshot::new().with_dependency(observed.clone());

        let result = diff(&from_file, &from_project);
        assert_eq!(result.dependencies_with_invalid_checksums(), &set(&[recorded.clone()]));
        assert_eq!(result.missing_dependencies_in_project(), &set(&[recorded]));
        assert_eq!(result.missing_dependencies_in_file(), &set(&[observed]));
        assert!(result.plugins().is_empty());
    }

    #[test]
    fn test_algorithm_change_is_not_tampering() {
        let recorded = dep("lib", "1.0", "deadbeef");
        let observed: DependencyRecord =
            Record::new("org.example", "lib", "1.0", "SHA-512", "facefeed");
        let result = diff(
            &ManifestSnapshot::new().with_dependency(recorded.clone()),
            &ManifestSnapshot::new().with_dependency(observed.clone()),
        );
        assert!(result.dependencies_with_invalid_checksums().is_empty());
        assert_eq!(result.missing_dependencies_in_project(), &set(&[recorded]));
        assert_eq!(result.missing_dependencies_in_file(), &set(&[observed]));
    }

    #[test]
    fn test_pure_addition_and_removal() {
        let x = dep("x", "1", "aa");
        let added = diff(
            &ManifestSnapshot::new(),
            &ManifestSnapshot::new().with_dependency(x.clone()),
        );
        assert_eq!(added.missing_dependencies_in_file(), &set(&[x.clone()]));
        assert!(added.missing_dependencies_in_project().is_empty());
        assert!(added.dependencies_with_invalid_checksums().is_empty());
        assert!(added.plugins().is_empty());

        let removed = diff(
            &ManifestSnapshot::new().with_dependency(x.clone()),
            &ManifestSnapshot::new(),
        );
        assert_eq!(removed.missing_dependencies_in_project(), &set(&[x]));
        assert!(removed.missing_dependencies_in_file().is_empty());
        assert!(removed.dependencies_with_invalid_checksums().is_empty());
    }

    #[test]
    fn test_duplicate_identities_report_once() {
        let recorded = dep("lib", "1.0", "aa");
        let from_file = ManifestSnapshot::new().with_dependency(recorded.clone());
        let from_project = ManifestSnapshot::new()
            .with_dependency(dep("lib", "1.0", "bb"))
            .with_dependency(dep("lib", "1.0", "cc"));

        let result = diff(&from_file, &from_project);
        assert_eq!(result.dependencies_with_invalid_checksums().len(), 1);
        assert!(result.dependencies_with_invalid_checksums().contains(&recorded));
        assert_eq!(result.missing_dependencies_in_file().len(), 2);
    }

    #[test]
    fn test_kinds_do_not_mix() {
        let from_file = ManifestSnapshot::new().with_dependency(Record::new(
            "g", "shared", "1", "SHA-256", "aa",
        ));
        let from_project = ManifestSnapshot::new().with_plugin(Record::new(
            "g", "shared", "1", "SHA-256", "bb",
        ));

        let result = diff(&from_file, &from_project);
        assert_eq!(result.missing_dependencies_in_project().len(), 1);
        assert_eq!(result.missing_plugins_in_file().len(), 1);
        assert!(result.dependencies_with_invalid_checksums().is_empty());
        assert!(result.plugins_with_invalid_checksums().is_empty());
        assert!(result.missing_dependencies_in_file().is_empty());
        assert!(result.missing_plugins_in_project().is_empty());
    }

    #[test]
    fn test_plugin_tampering() {
        let recorded = plugin("surefire", "3.2.5", "aa");
        let result = diff(
            &ManifestSnapshot::new().with_plugin(recorded.clone()),
            &ManifestSnapshot::new().with_plugin(plugin("surefire", "3.2.5", "bb")),
        );
        assert_eq!(result.plugins_with_invalid_checksums(), &set(&[recorded]));
        assert!(result.dependencies().is_empty());
    }

    #[test]
    fn test_cloned_sets_are_independent() {
        let result = diff(
            &ManifestSnapshot::new().with_dependency(dep("x", "1", "aa")),
            &ManifestSnapshot::new(),
        );
        let mut copy = result.missing_dependencies_in_project().clone();
        copy.clear();
        copy.insert(dep("y", "1", "bb"));
        assert_eq!(
            result.missing_dependencies_in_project(),
            &set(&[dep("x", "1", "aa")])
        );
    }
}
