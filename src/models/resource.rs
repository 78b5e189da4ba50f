//! Resource model.
//!
//! Resources are interchangeable teams or workers, identified by name.
//! The pool preserves first-seen order, which is the deterministic
//! tie-break order used by the allocator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::InputError;

/// An ordered, non-empty set of uniquely named resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    names: Vec<String>,
}

impl ResourcePool {
    /// Builds a pool from resource names.
    ///
    /// # Errors
    /// - [`InputError::EmptyResources`] if `names` is empty.
    /// - [`InputError::DuplicateResource`] on the first repeated name.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, InputError> {
        if names.is_empty() {
            return Err(InputError::EmptyResources);
        }

        let mut seen = HashSet::with_capacity(names.len());
        let mut ordered = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(InputError::DuplicateResource(name.to_string()));
            }
            ordered.push(name.to_string());
        }

        Ok(Self { names: ordered })
    }

    /// Resource names in first-seen order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of resources (always at least one).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the pool has no resources.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
