use crate::core::{LockError, LockResult};
use crate::integrity::checksum::ChecksumAlgorithm;
use crate::lockfile::Lockfile;
use lockdiff_core::{ManifestSnapshot, Record, RecordKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File extensions tried, in order, when locating an artifact
const ARTIFACT_EXTENSIONS: [&str; 2] = ["jar", "pom"];

/// Observes the current state of a project by re-hashing the artifacts its
/// lockfile names in a Maven-style local repository
pub struct RepositoryObserver {
    repository_dir: PathBuf,
}

impl RepositoryObserver {
    pub fn new(repository_dir: PathBuf) -> LockResult<Self> {
        if !repository_dir.is_dir() {
            return Err(LockError::Path(format!(
                "Repository directory not found: {}",
                repository_dir.display()
            )));
        }
        Ok(Self { repository_dir })
    }

    pub fn repository_dir(&self) -> &Path {
        &self.repository_dir
    }

    /// Directory holding one artifact version:
    /// `<repo>/<group with dots as slashes>/<artifact>/<version>`
    pub fn artifact_dir(&self, group_id: &str, artifact_id: &str, version: &str) -> PathBuf {
        let mut dir = self.repository_dir.clone();
        for segment in group_id.split('.') {
            dir.push(segment);
        }
        dir.join(artifact_id).join(version)
    }

    /// The artifact file for a coordinate, if present
    pub fn locate(&self, group_id: &str, artifact_id: &str, version: &str) -> Option<PathBuf> {
        let dir = self.artifact_dir(group_id, artifact_id, version);
        ARTIFACT_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{}-{}.{}", artifact_id, version, ext)))
            .find(|path| path.is_file())
    }

    /// Build the observed snapshot for every entry the lockfile records.
    ///
    /// Entries whose artifact is absent are left out and therefore surface as
    /// missing in the project.
    pub fn observe(&self, lockfile: &Lockfile) -> LockResult<ManifestSnapshot> {
        let mut dependencies = Vec::new();
        for dependency in lockfile.flattened_dependencies() {
            if let Some(record) = self.observe_record(&dependency.to_record())? {
                dependencies.push(record);
            }
        }

        let mut plugins = Vec::new();
        for plugin in &lockfile.maven_plugins {
            if let Some(record) = self.observe_record(&plugin.to_record())? {
                plugins.push(record);
            }
        }

        info!(
            dependencies = dependencies.len(),
            plugins = plugins.len(),
            repository = %self.repository_dir.display(),
            "observed artifacts"
        );

        Ok(ManifestSnapshot::from_records(dependencies, plugins))
    }

    /// Re-hash one recorded artifact with the algorithm it was recorded with
    fn observe_record<K: RecordKind>(&self, recorded: &Record<K>) -> LockResult<Option<Record<K>>> {
        let algorithm: ChecksumAlgorithm = recorded.checksum_algorithm().parse()?;

        let Some(path) = self.locate(
            recorded.group_id(),
            recorded.artifact_id(),
            recorded.version(),
        ) else {
            debug!("{} {} not found in repository", K::LABEL, recorded.identity());
            return Ok(None);
        };

        let checksum = algorithm.compute_file(&path)?;
        Ok(Some(Record::new(
            recorded.group_id(),
            recorded.artifact_id(),
            recorded.version(),
            recorded.checksum_algorithm(),
            checksum,
        )))
    }
}
