use crate::record::{DependencyRecord, PluginRecord};
use std::collections::BTreeSet;

/// The dependency and plugin records of one side of a comparison: either the
/// recorded lockfile or the freshly observed project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSnapshot {
    dependencies: BTreeSet<DependencyRecord>,
    plugins: BTreeSet<PluginRecord>,
}

impl ManifestSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from any record iterators; duplicate records collapse
    pub fn from_records(
        dependencies: impl IntoIterator<Item = DependencyRecord>,
        plugins: impl IntoIterator<Item = PluginRecord>,
    ) -> Self {
        Self {
            dependencies: dependencies.into_iter().collect(),
            plugins: plugins.into_iter().collect(),
        }
    }

    pub fn with_dependency(mut self, record: DependencyRecord) -> Self {
        self.dependencies.insert(record);
        self
    }

    pub fn with_plugin(mut self, record: PluginRecord) -> Self {
        self.plugins.insert(record);
        self
    }

    pub fn dependencies(&self) -> &BTreeSet<DependencyRecord> {
        &self.dependencies
    }

    pub fn plugins(&self) -> &BTreeSet<PluginRecord> {
        &self.plugins
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.plugins.is_empty()
    }
}
