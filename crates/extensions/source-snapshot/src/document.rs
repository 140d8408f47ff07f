//! Snapshot document format.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use statwatch_protocols::{AttributeValue, ObjectId, StatNode};

/// On-disk snapshot of one server instance.
///
/// ```json
/// {
///   "server_name": "srv01",
///   "server_version": "8.5.5.12",
///   "stats": { "threadPoolModule": { "name": "threadPoolModule", "sub_stats": [] } },
///   "objects": [
///     { "id": "WebSphere:type=ListenerPort,name=lp1", "attributes": { "started": true } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub server_name: String,

    #[serde(default)]
    pub server_version: String,

    /// Stat group name → tree root.
    #[serde(default)]
    pub stats: BTreeMap<String, StatNode>,

    #[serde(default)]
    pub objects: Vec<ManagedObject>,
}

/// A managed object and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedObject {
    pub id: ObjectId,

    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl ManagedObject {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(id),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Whether the object id matches a `Domain:*,key=value` pattern.
    ///
    /// The domain must be equal and every `key=value` of the pattern must
    /// be present on the id. `*` entries are ignored.
    pub fn matches(&self, pattern: &str) -> bool {
        let (domain, props) = pattern.split_once(':').unwrap_or((pattern, ""));
        if domain != "*" && domain != self.id.domain() {
            return false;
        }
        props
            .split(',')
            .filter(|p| !p.is_empty() && *p != "*")
            .all(|wanted| match wanted.split_once('=') {
                Some((key, value)) => self.id.properties().any(|(k, v)| k == key && v == value),
                None => false,
            })
    }
}
