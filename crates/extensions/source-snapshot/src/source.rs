//! Snapshot-backed metric source.

use std::fs;
use std::path::Path;

use tracing::debug;

use statwatch_protocols::{AttributeValue, MetricSource, ObjectId, SourceError, StatNode};

use crate::document::{ManagedObject, SnapshotDocument};

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;

/// Metric source answering from a [`SnapshotDocument`].
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    document: SnapshotDocument,
}

impl SnapshotSource {
    pub fn new(server_name: impl Into<String>, server_version: impl Into<String>) -> Self {
        Self {
            document: SnapshotDocument {
                server_name: server_name.into(),
                server_version: server_version.into(),
                ..Default::default()
            },
        }
    }

    pub fn from_document(document: SnapshotDocument) -> Self {
        Self { document }
    }

    /// Load a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading snapshot");
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, SourceError> {
        let document: SnapshotDocument =
            serde_json::from_str(content).map_err(|e| SourceError::Parse(e.to_string()))?;
        Ok(Self { document })
    }

    /// Expose a stat group. The root node is renamed to the group name.
    pub fn with_group(mut self, group: impl Into<String>, mut root: StatNode) -> Self {
        let group = group.into();
        root.name = group.clone();
        self.document.stats.insert(group, root);
        self
    }

    pub fn with_object(mut self, object: ManagedObject) -> Self {
        self.document.objects.push(object);
        self
    }

    pub fn document(&self) -> &SnapshotDocument {
        &self.document
    }

    fn object(&self, id: &ObjectId) -> Result<&ManagedObject, SourceError> {
        self.document
            .objects
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| SourceError::ObjectNotFound(id.to_string()))
    }
}

impl MetricSource for SnapshotSource {
    fn server_name(&self) -> Result<String, SourceError> {
        Ok(self.document.server_name.clone())
    }

    fn server_version(&self) -> Result<String, SourceError> {
        Ok(self.document.server_version.clone())
    }

    fn fetch_stats(&self, group: &str) -> Result<Option<StatNode>, SourceError> {
        Ok(self.document.stats.get(group).cloned())
    }

    fn list_objects(&self, pattern: &str) -> Result<Vec<ObjectId>, SourceError> {
        Ok(self
            .document
            .objects
            .iter()
            .filter(|o| o.matches(pattern))
            .map(|o| o.id.clone())
            .collect())
    }

    fn fetch_attribute(
        &self,
        object: &ObjectId,
        attribute: &str,
    ) -> Result<AttributeValue, SourceError> {
        self.object(object)?
            .attributes
            .get(attribute)
            .cloned()
            .ok_or_else(|| SourceError::AttributeNotFound {
                object: object.to_string(),
                attribute: attribute.to_string(),
            })
    }
}
