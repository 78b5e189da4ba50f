//! Opaque constraint bag.
//!
//! Accepted by `optimize` and reported in logs, but not read by the
//! allocator. Values are arbitrary JSON as sent by the request layer.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-supplied constraints, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constraints {
    attributes: BTreeMap<String, Value>,
}

impl Constraints {
    /// Creates an empty constraint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a constraint.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Constraint names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Number of constraints.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether no constraints were supplied.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
