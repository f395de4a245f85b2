//! Method-config table: path -> policy value, with wildcard fallback.
//!
//! Built once from a [`ServiceConfig`](crate::ServiceConfig), read on every
//! call dispatch. The table holds its own path handles and value clones, so
//! it outlives the document it was built from.

mod builder;
mod extract;
mod factory;

use std::collections::HashMap;

use svcconf_core::path::wildcard_of;
use svcconf_core::MethodPath;

pub use extract::{extract_method_config, ExtractedMethodConfig};
pub use factory::MethodConfigFactory;

/// Immutable mapping from canonical method path to a policy value.
#[derive(Debug, Clone)]
pub struct MethodConfigTable<V> {
    entries: HashMap<MethodPath, V>,
}

impl<V> Default for MethodConfigTable<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> MethodConfigTable<V> {
    /// Resolve `path`: exact match first, then the service-wide `/service/*`
    /// entry. A path without any `/` only gets the exact attempt.
    pub fn get(&self, path: &str) -> Option<&V> {
        if let Some(v) = self.entries.get(path) {
            return Some(v);
        }
        let wildcard = wildcard_of(path)?;
        self.entries.get(wildcard.as_str())
    }

    /// Exact match only.
    pub fn get_exact(&self, path: &str) -> Option<&V> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All paths in the table, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &MethodPath> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MethodPath, &V)> {
        self.entries.iter()
    }
}
