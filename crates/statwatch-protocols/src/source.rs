//! Metric source protocol definitions.
//!
//! A metric source is the management interface of one running server
//! instance. All calls are synchronous and may block; timeouts belong to
//! the implementation, not to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SourceError;
use crate::stats::StatNode;

/// Core trait for metric sources.
pub trait MetricSource: Send + Sync {
    /// Name of the monitored instance.
    fn server_name(&self) -> Result<String, SourceError>;

    /// Product version of the monitored instance (e.g. `8.5.5.12`).
    fn server_version(&self) -> Result<String, SourceError>;

    /// Fetch the statistics tree of a stat group.
    ///
    /// `Ok(None)` means the instance does not expose the group at all.
    fn fetch_stats(&self, group: &str) -> Result<Option<StatNode>, SourceError>;

    /// List managed objects matching a `Domain:*,key=value` pattern.
    fn list_objects(&self, pattern: &str) -> Result<Vec<ObjectId>, SourceError>;

    /// Read one attribute of a managed object.
    fn fetch_attribute(
        &self,
        object: &ObjectId,
        attribute: &str,
    ) -> Result<AttributeValue, SourceError>;
}

/// Opaque managed-object identifier, e.g.
/// `WebSphere:type=SIBQueuePoint,name=orders`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, before the first `:`.
    pub fn domain(&self) -> &str {
        self.0.split_once(':').map(|(d, _)| d).unwrap_or(&self.0)
    }

    /// `key=value` properties after the domain.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .split_once(':')
            .map(|(_, props)| props)
            .unwrap_or("")
            .split(',')
            .filter_map(|p| p.split_once('='))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of a managed-object attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Long(i64),
    Text(String),
}

impl AttributeValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            AttributeValue::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
