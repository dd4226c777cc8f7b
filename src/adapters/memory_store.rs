//! In-memory configuration store populated by the host application.

use crate::domain::value::Entry;
use crate::ports::config_port::ConfigPort;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, HashMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, namespace: &str, key: &str, entry: impl Into<Entry>) -> Self {
        self.insert(namespace, key, entry);
        self
    }

    /// Returns the entry previously stored under the same pair, if any.
    pub fn insert(&mut self, namespace: &str, key: &str, entry: impl Into<Entry>) -> Option<Entry> {
        self.entries
            .entry(namespace.to_string())
            .or_default()
            .insert(key.to_string(), entry.into())
    }
}

impl ConfigPort for MemoryStore {
    fn lookup(&self, namespace: &str, key: &str) -> Option<Entry> {
        self.entries.get(namespace)?.get(key).cloned()
    }
}
