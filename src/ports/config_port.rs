//! Configuration store port trait.

use crate::domain::value::Entry;

/// Read-only (namespace, key) lookup over a loaded configuration store.
pub trait ConfigPort {
    fn lookup(&self, namespace: &str, key: &str) -> Option<Entry>;
}
