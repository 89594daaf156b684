use crate::core::{LockError, LockResult};
use crate::lockfile::validator::LockfileValidator;
use lockdiff_core::{DependencyRecord, ManifestSnapshot, PluginRecord, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Lockfile format version this build understands
pub const LOCKFILE_VERSION: u32 = 1;

/// A recorded lockfile (lockfile.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lockfile {
    pub artifact_id: String,
    pub group_id: String,
    pub version: String,
    #[serde(default = "default_lockfile_version")]
    pub lock_file_version: u32,
    #[serde(default)]
    pub dependencies: Vec<LockedDependency>,
    #[serde(default)]
    pub maven_plugins: Vec<LockedPlugin>,
}

fn default_lockfile_version() -> u32 {
    LOCKFILE_VERSION
}

/// A locked dependency and the transitive dependencies it pulls in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub checksum_algorithm: String,
    pub checksum: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LockedDependency>,
}

/// A locked build plugin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedPlugin {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub checksum_algorithm: String,
    pub checksum: String,
}

impl LockedDependency {
    pub fn to_record(&self) -> DependencyRecord {
        Record::new(
            &self.group_id,
            &self.artifact_id,
            &self.version,
            &self.checksum_algorithm,
            &self.checksum,
        )
    }
}

impl LockedPlugin {
    pub fn to_record(&self) -> PluginRecord {
        Record::new(
            &self.group_id,
            &self.artifact_id,
            &self.version,
            &self.checksum_algorithm,
            &self.checksum,
        )
    }
}

impl Lockfile {
    /// Load and validate a lockfile from a path
    pub fn load(path: &Path) -> LockResult<Self> {
        if !path.exists() {
            return Err(LockError::Lockfile(format!(
                "{} not found",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let lockfile = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            dependencies = lockfile.dependency_count(),
            plugins = lockfile.maven_plugins.len(),
            "loaded lockfile"
        );
        Ok(lockfile)
    }

    /// Load `lockfile_name` from a project root
    pub fn load_from_project(project_root: &Path, lockfile_name: &str) -> LockResult<Self> {
        let path = project_root.join(lockfile_name);
        if !path.exists() {
            return Err(LockError::Lockfile(format!(
                "{} not found in {}",
                lockfile_name,
                project_root.display()
            )));
        }
        Self::load(&path)
    }

    /// Parse and validate lockfile JSON
    pub fn from_json(content: &str) -> LockResult<Self> {
        let lockfile: Lockfile = serde_json::from_str(content)?;
        LockfileValidator::validate(&lockfile)?;
        Ok(lockfile)
    }

    /// All dependencies, the transitive tree flattened depth-first
    pub fn flattened_dependencies(&self) -> Vec<&LockedDependency> {
        let mut flat = Vec::new();
        let mut stack: Vec<&LockedDependency> = self.dependencies.iter().rev().collect();
        while let Some(dependency) = stack.pop() {
            flat.push(dependency);
            stack.extend(dependency.children.iter().rev());
        }
        flat
    }

    /// Number of dependency entries including transitive children
    pub fn dependency_count(&self) -> usize {
        self.flattened_dependencies().len()
    }

    /// The recorded side of a comparison
    pub fn to_snapshot(&self) -> ManifestSnapshot {
        ManifestSnapshot::from_records(
            self.flattened_dependencies()
                .into_iter()
                .map(LockedDependency::to_record),
            self.maven_plugins.iter().map(LockedPlugin::to_record),
        )
    }
}
