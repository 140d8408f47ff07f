//! Stat tree nodes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Statistic;

/// One node of a statistics tree.
///
/// A node is a named component (a pool, a provider, a web module) holding
/// its own statistics and the nodes of the components below it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatNode {
    /// Component name.
    pub name: String,

    /// Statistics keyed by statistic name.
    #[serde(default)]
    pub statistics: BTreeMap<String, Statistic>,

    /// Child components, in the order the source reports them.
    #[serde(default)]
    pub sub_stats: Vec<StatNode>,
}

impl StatNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statistics: BTreeMap::new(),
            sub_stats: Vec::new(),
        }
    }

    pub fn with_statistic(mut self, name: impl Into<String>, statistic: Statistic) -> Self {
        self.statistics.insert(name.into(), statistic);
        self
    }

    pub fn with_sub_stat(mut self, node: StatNode) -> Self {
        self.sub_stats.push(node);
        self
    }

    /// Look up a statistic by name. `None` when the instance does not
    /// collect it.
    pub fn statistic(&self, name: &str) -> Option<&Statistic> {
        self.statistics.get(name)
    }

    /// Child components.
    pub fn sub_stats(&self) -> &[StatNode] {
        &self.sub_stats
    }
}
