//! Hierarchical statistics tree exposed by a monitored instance.

mod node;
mod statistic;

pub use node::*;
pub use statistic::*;

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
