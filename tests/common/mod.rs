#![allow(dead_code)]

use cfglookup::domain::value::Entry;
use cfglookup::ports::config_port::ConfigPort;
use cfglookup::ports::env_port::EnvPort;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::io::Write;

/// Config store that counts lookups and can be rewritten between calls.
pub struct MockConfigPort {
    pub entries: RefCell<HashMap<(String, String), Entry>>,
    pub lookups: Cell<usize>,
}

impl MockConfigPort {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
            lookups: Cell::new(0),
        }
    }

    pub fn with(self, namespace: &str, key: &str, entry: impl Into<Entry>) -> Self {
        self.set(namespace, key, entry);
        self
    }

    pub fn set(&self, namespace: &str, key: &str, entry: impl Into<Entry>) {
        self.entries
            .borrow_mut()
            .insert((namespace.to_string(), key.to_string()), entry.into());
    }
}

impl ConfigPort for MockConfigPort {
    fn lookup(&self, namespace: &str, key: &str) -> Option<Entry> {
        self.lookups.set(self.lookups.get() + 1);
        self.entries
            .borrow()
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }
}

/// Environment table that can change between calls.
pub struct MockEnvPort {
    pub vars: RefCell<HashMap<String, String>>,
}

impl MockEnvPort {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
        }
    }

    pub fn with(self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&self, name: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    pub fn unset(&self, name: &str) {
        self.vars.borrow_mut().remove(name);
    }
}

impl EnvPort for MockEnvPort {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.borrow().get(name).cloned()
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const SERVICE_INI: &str = r#"
[billing]
api_url = https://billing.internal/v2
workers = 23
workers_junk = 23abc
retries = not_a_number
sandbox = true
verbose = True
legacy = 1
token = ${CFGLOOKUP_IT_BILLING_TOKEN}
timeout = ${CFGLOOKUP_IT_TIMEOUT}

[mailer]
enabled = false
password = ${CFGLOOKUP_IT_SMTP_PASSWORD}
"#;
