use crate::core::{LockError, LockResult};
use crate::lockfile::model::{LockedDependency, LockedPlugin, Lockfile, LOCKFILE_VERSION};
use std::collections::HashSet;
use tracing::warn;

/// Validates lockfile content before it becomes a snapshot
pub struct LockfileValidator;

impl LockfileValidator {
    /// Reject lockfiles the differ cannot compare meaningfully
    pub fn validate(lockfile: &Lockfile) -> LockResult<()> {
        Self::validate_version(lockfile.lock_file_version)?;
        Self::require("project artifactId", &lockfile.artifact_id)?;
        Self::require("project groupId", &lockfile.group_id)?;
        Self::require("project version", &lockfile.version)?;

        let dependencies = lockfile.flattened_dependencies();
        for dependency in &dependencies {
            Self::validate_dependency(dependency)?;
        }
        for plugin in &lockfile.maven_plugins {
            Self::validate_plugin(plugin)?;
        }

        Self::warn_duplicates(
            "dependency",
            dependencies
                .iter()
                .map(|d| (d.group_id.as_str(), d.artifact_id.as_str(), d.version.as_str())),
        );
        Self::warn_duplicates(
            "plugin",
            lockfile
                .maven_plugins
                .iter()
                .map(|p| (p.group_id.as_str(), p.artifact_id.as_str(), p.version.as_str())),
        );

        Ok(())
    }

    fn validate_version(version: u32) -> LockResult<()> {
        if version == 0 || version > LOCKFILE_VERSION {
            return Err(LockError::Lockfile(format!(
                "Unsupported lockFileVersion {} (expected 1 to {})",
                version, LOCKFILE_VERSION
            )));
        }
        Ok(())
    }

    fn validate_dependency(dependency: &LockedDependency) -> LockResult<()> {
        Self::validate_entry(
            "dependency",
            &dependency.group_id,
            &dependency.artifact_id,
            &dependency.version,
            &dependency.checksum_algorithm,
            &dependency.checksum,
        )
    }

    fn validate_plugin(plugin: &LockedPlugin) -> LockResult<()> {
        Self::validate_entry(
            "plugin",
            &plugin.group_id,
            &plugin.artifact_id,
            &plugin.version,
            &plugin.checksum_algorithm,
            &plugin.checksum,
        )
    }

    fn validate_entry(
        kind: &str,
        group_id: &str,
        artifact_id: &str,
        version: &str,
        checksum_algorithm: &str,
        checksum: &str,
    ) -> LockResult<()> {
        let name = format!("{}:{}:{}", group_id, artifact_id, version);
        for (field, value) in [
            ("groupId", group_id),
            ("artifactId", artifact_id),
            ("version", version),
            ("checksumAlgorithm", checksum_algorithm),
            ("checksum", checksum),
        ] {
            if value.trim().is_empty() {
                return Err(LockError::Lockfile(format!(
                    "{} {} has an empty {}",
                    kind, name, field
                )));
            }
        }
        Ok(())
    }

    fn require(field: &str, value: &str) -> LockResult<()> {
        if value.trim().is_empty() {
            return Err(LockError::Lockfile(format!("{} cannot be empty", field)));
        }
        Ok(())
    }

    // Duplicates are legal; the differ collapses identical records and reports
    // conflicting ones as tampered.
    fn warn_duplicates<'a>(kind: &str, identities: impl Iterator<Item = (&'a str, &'a str, &'a str)>) {
        let mut seen = HashSet::new();
        for identity in identities {
            if !seen.insert(identity) {
                warn!(
                    "duplicate {} entry {}:{}:{} in lockfile",
                    kind, identity.0, identity.1, identity.2
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lockfile_with(dependency: LockedDependency) -> Lockfile {
        Lockfile {
            artifact_id: "app".to_string(),
            group_id: "org.example".to_string(),
            version: "1.0.0".to_string(),
            lock_file_version: LOCKFILE_VERSION,
            dependencies: vec![dependency],
            maven_plugins: Vec::new(),
        }
    }

    fn dependency(checksum: &str) -> LockedDependency {
        LockedDependency {
            group_id: "org.example".to_string(),
            artifact_id: "lib".to_string(),
            version: "1.0".to_string(),
            checksum_algorithm: "SHA-256".to_string(),
            checksum: checksum.to_string(),
            scope: None,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_valid_lockfile() {
        LockfileValidator::validate(&lockfile_with(dependency("aa"))).unwrap();
    }

    #[test]
    fn test_empty_checksum_rejected() {
        let err = LockfileValidator::validate(&lockfile_with(dependency(""))).unwrap_err();
        assert!(err.to_string().contains("empty checksum"));
    }

    #[test]
    fn test_empty_child_field_rejected() {
        let mut parent = dependency("aa");
        let mut child = dependency("bb");
        child.artifact_id = " ".to_string();
        parent.children.push(child);

        let err = LockfileValidator::validate(&lockfile_with(parent)).unwrap_err();
        assert!(err.to_string().contains("empty artifactId"));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut lockfile = lockfile_with(dependency("aa"));
        lockfile.lock_file_version = LOCKFILE_VERSION + 1;
        let err = LockfileValidator::validate(&lockfile).unwrap_err();
        assert!(err.to_string().contains("Unsupported lockFileVersion"));
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut lockfile = lockfile_with(dependency("aa"));
        lockfile.dependencies.push(dependency("bb"));
        LockfileValidator::validate(&lockfile).unwrap();
    }
}
