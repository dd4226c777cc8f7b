//! INI file configuration adapter.
//!
//! Sections are namespaces. Literal values come back as strings; a value that
//! is exactly `${NAME}` becomes a redirect to the environment variable `NAME`.

use crate::domain::error::CfgError;
use crate::domain::value::{Entry, Value};
use crate::ports::config_port::ConfigPort;
use configparser::ini::{Ini, IniDefault};
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CfgError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let adapter = Self::parse(content, &path.display().to_string())?;
        tracing::debug!(file = %path.display(), "loaded config file");
        Ok(adapter)
    }

    pub fn from_string(content: &str) -> Result<Self, CfgError> {
        Self::parse(content.to_string(), "<string>")
    }

    /// Case-sensitive names; `#` and `;` only start a comment at the beginning of a line.
    fn parse(content: String, file: &str) -> Result<Self, CfgError> {
        let mut defaults = IniDefault::default();
        defaults.case_sensitive = true;
        defaults.enable_inline_comments = false;
        let mut config = Ini::new_from_defaults(defaults);
        config
            .read(content)
            .map_err(|reason| CfgError::ConfigParse {
                file: file.to_string(),
                reason,
            })?;
        Ok(Self { config })
    }

    /// Every (namespace, key, entry) triple, sorted by namespace then key.
    pub fn entries(&self) -> Vec<(String, String, Entry)> {
        let mut entries: Vec<_> = self
            .config
            .get_map_ref()
            .iter()
            .flat_map(|(section, keys)| {
                keys.iter().filter_map(move |(key, value)| {
                    let value = value.as_deref()?;
                    Some((section.clone(), key.clone(), parse_entry(value)))
                })
            })
            .collect();
        entries.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        entries
    }
}

impl ConfigPort for FileConfigAdapter {
    fn lookup(&self, namespace: &str, key: &str) -> Option<Entry> {
        self.config.get(namespace, key).as_deref().map(parse_entry)
    }
}

fn parse_entry(raw: &str) -> Entry {
    match raw
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
    {
        Some(name) if is_env_name(name) => Entry::env(name),
        _ => Entry::Literal(Value::from(raw)),
    }
}

fn is_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
