//! Error types for the metric source layer.

mod source;

pub use source::*;
