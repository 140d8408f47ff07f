//! # statwatch Protocols
//!
//! Contract between the evaluation engine and the monitored instance.
//! Contains only interface definitions and the data they exchange.
//!
//! ## Core Types
//!
//! - [`MetricSource`] - Query surface of a monitored server instance
//! - [`StatNode`] - One node of the hierarchical statistics tree
//! - [`Statistic`] - A single named measurement attached to a node
//! - [`AttributeValue`] - Free-form attribute read from a managed object

pub mod error;
pub mod source;
pub mod stats;

pub use error::SourceError;
pub use source::{AttributeValue, MetricSource, ObjectId};
pub use stats::{StatNode, Statistic};
