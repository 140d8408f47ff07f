//! Individual statistic values.

use serde::{Deserialize, Serialize};

/// A single named measurement.
///
/// The variants follow the usual management-API statistic kinds: plain
/// counters, ranges with watermarks, ranges bounded by a configured
/// capacity, and timers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Statistic {
    /// Monotonic or sampled counter.
    Count { count: i64 },

    /// Current value with observed watermarks.
    Range {
        current: i64,
        #[serde(default)]
        low_water_mark: i64,
        #[serde(default)]
        high_water_mark: i64,
    },

    /// Current value within configured bounds.
    BoundedRange {
        current: i64,
        #[serde(default)]
        lower_bound: i64,
        upper_bound: i64,
    },

    /// Accumulated timings, in milliseconds.
    Time {
        count: i64,
        total: f64,
        #[serde(default)]
        min: f64,
        #[serde(default)]
        max: f64,
    },
}

impl Statistic {
    /// Counter value, if this is a [`Statistic::Count`].
    pub fn as_count(&self) -> Option<i64> {
        match self {
            Statistic::Count { count } => Some(*count),
            _ => None,
        }
    }

    /// Current value of a range statistic.
    ///
    /// Bounded ranges are ranges too, so both variants answer.
    pub fn as_range_current(&self) -> Option<i64> {
        match self {
            Statistic::Range { current, .. } | Statistic::BoundedRange { current, .. } => {
                Some(*current)
            }
            _ => None,
        }
    }

    /// `(current, upper_bound)` of a bounded range statistic.
    pub fn as_bounded(&self) -> Option<(i64, i64)> {
        match self {
            Statistic::BoundedRange {
                current,
                upper_bound,
                ..
            } => Some((*current, *upper_bound)),
            _ => None,
        }
    }

    /// Mean time of a timer statistic. Zero when nothing was recorded.
    pub fn as_time_mean(&self) -> Option<f64> {
        match self {
            Statistic::Time { count, total, .. } => {
                if *count == 0 {
                    Some(0.0)
                } else {
                    Some(total / *count as f64)
                }
            }
            _ => None,
        }
    }
}
