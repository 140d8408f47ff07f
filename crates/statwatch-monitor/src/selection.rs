//! Threshold selections.
//!
//! Multi-item probes take `name,warning,critical` entries separated by
//! `|`, where `name` is an item name or the `*` wildcard. Single-metric
//! probes take one `label,warning,critical` triple.

use std::collections::HashMap;

use thiserror::Error;

use crate::severity::Severity;
use crate::threshold;

/// Selector matching every item of a probe.
pub const WILDCARD: &str = "*";

/// Selection parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("empty selection")]
    Empty,

    #[error("'{entry}' has no item name")]
    EmptySelector { entry: String },

    #[error("'{entry}' has {found} fields, expected {expected}")]
    FieldCount {
        entry: String,
        expected: usize,
        found: usize,
    },

    #[error("'{value}' is not a valid threshold")]
    InvalidNumber { value: String },
}

/// Warning and critical limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSpec {
    pub warning: i64,
    pub critical: i64,
}

impl ThresholdSpec {
    pub fn new(warning: i64, critical: i64) -> Self {
        Self { warning, critical }
    }

    /// Parse `warning,critical`.
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let fields: Vec<&str> = input.split(',').collect();
        if fields.len() != 2 {
            return Err(SelectionError::FieldCount {
                entry: input.to_string(),
                expected: 2,
                found: fields.len(),
            });
        }
        Ok(Self {
            warning: parse_limit(fields[0])?,
            critical: parse_limit(fields[1])?,
        })
    }

    pub fn evaluate(&self, value: i64) -> Severity {
        threshold::evaluate(value, self.warning, self.critical)
    }

    pub fn evaluate_ratio(&self, value: i64, capacity: i64) -> Severity {
        threshold::evaluate_ratio(value, capacity, self.warning, self.critical)
    }
}

fn parse_limit(field: &str) -> Result<i64, SelectionError> {
    let trimmed = field.trim();
    match trimmed.parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        _ => Err(SelectionError::InvalidNumber {
            value: trimmed.to_string(),
        }),
    }
}

/// Selector → thresholds mapping of a multi-item probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: HashMap<String, ThresholdSpec>,
}

impl Selection {
    /// Parse `name1,w1,c1|name2,w2,c2|...`.
    ///
    /// A name given twice keeps its last thresholds.
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        if input.trim().is_empty() {
            return Err(SelectionError::Empty);
        }

        let mut entries = HashMap::new();
        for entry in input.split('|') {
            let (name, limits) = entry.split_once(',').ok_or_else(|| {
                SelectionError::FieldCount {
                    entry: entry.to_string(),
                    expected: 3,
                    found: 1,
                }
            })?;
            if name.is_empty() {
                return Err(SelectionError::EmptySelector {
                    entry: entry.to_string(),
                });
            }
            let spec = ThresholdSpec::parse(limits).map_err(|err| match err {
                SelectionError::FieldCount { found, .. } => SelectionError::FieldCount {
                    entry: entry.to_string(),
                    expected: 3,
                    found: found + 1,
                },
                other => other,
            })?;
            entries.insert(name.to_string(), spec);
        }

        Ok(Self { entries })
    }

    /// Thresholds for an item: exact name first, wildcard second.
    pub fn lookup(&self, item: &str) -> Option<&ThresholdSpec> {
        self.entries
            .get(item)
            .or_else(|| self.entries.get(WILDCARD))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Thresholds of a single-metric probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelection {
    /// Free-form label, not used for evaluation.
    pub label: String,
    pub thresholds: ThresholdSpec,
}

impl SingleSelection {
    /// Parse `label,warning,critical`.
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        if input.trim().is_empty() {
            return Err(SelectionError::Empty);
        }
        let fields: Vec<&str> = input.split(',').collect();
        if fields.len() != 3 {
            return Err(SelectionError::FieldCount {
                entry: input.to_string(),
                expected: 3,
                found: fields.len(),
            });
        }
        Ok(Self {
            label: fields[0].to_string(),
            thresholds: ThresholdSpec::new(parse_limit(fields[1])?, parse_limit(fields[2])?),
        })
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
