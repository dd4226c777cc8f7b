//! Namespace/key resolution with environment indirection and typed coercion.
//!
//! Every accessor family comes in four shapes:
//!
//! | shape          | on absence                 |
//! |----------------|----------------------------|
//! | `get*`         | `None`                     |
//! | `get*_or`      | `Some(default)`            |
//! | `require*`     | `Err(CfgError)`            |
//! | `require*_or`  | `default`                  |
//!
//! Nothing is cached: each call re-reads both ports.

use crate::domain::error::CfgError;
use crate::domain::value::{Entry, Value, ValueKind};
use crate::ports::config_port::ConfigPort;
use crate::ports::env_port::EnvPort;

/// Why a typed lookup produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Absence {
    Missing,
    Mismatch,
}

pub struct Resolver<'a> {
    store: &'a dyn ConfigPort,
    env: &'a dyn EnvPort,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn ConfigPort, env: &'a dyn EnvPort) -> Self {
        Self { store, env }
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<Value> {
        match self.store.lookup(namespace, key)? {
            Entry::Literal(value) => Some(value),
            Entry::Env(marker) => {
                tracing::debug!(namespace, key, var = %marker.var, "following env redirect");
                let value = self.env.var(&marker.var);
                if value.is_none() {
                    tracing::debug!(namespace, key, var = %marker.var, "env redirect target unset");
                }
                value.map(Value::String)
            }
        }
    }

    /// Always `Some`: the default fills in for an absent value.
    pub fn get_or(&self, namespace: &str, key: &str, default: Value) -> Option<Value> {
        Some(self.require_or(namespace, key, default))
    }

    pub fn require(&self, namespace: &str, key: &str) -> Result<Value, CfgError> {
        self.get(namespace, key).ok_or_else(|| {
            tracing::warn!(namespace, key, "required config value missing");
            CfgError::missing(namespace, key)
        })
    }

    /// Never errors: the default fills in for an absent value.
    pub fn require_or(&self, namespace: &str, key: &str, default: Value) -> Value {
        self.get(namespace, key).unwrap_or(default)
    }

    pub fn get_integer(&self, namespace: &str, key: &str) -> Option<i64> {
        self.typed(namespace, key, ValueKind::Integer, Value::as_integer).ok()
    }

    pub fn get_integer_or(&self, namespace: &str, key: &str, default: i64) -> Option<i64> {
        Some(self.require_integer_or(namespace, key, default))
    }

    pub fn require_integer(&self, namespace: &str, key: &str) -> Result<i64, CfgError> {
        self.typed(namespace, key, ValueKind::Integer, Value::as_integer)
            .map_err(|absence| Self::strict_error(namespace, key, ValueKind::Integer, absence))
    }

    pub fn require_integer_or(&self, namespace: &str, key: &str, default: i64) -> i64 {
        self.get_integer(namespace, key).unwrap_or(default)
    }

    pub fn get_boolean(&self, namespace: &str, key: &str) -> Option<bool> {
        self.typed(namespace, key, ValueKind::Boolean, Value::as_boolean).ok()
    }

    pub fn get_boolean_or(&self, namespace: &str, key: &str, default: bool) -> Option<bool> {
        Some(self.require_boolean_or(namespace, key, default))
    }

    pub fn require_boolean(&self, namespace: &str, key: &str) -> Result<bool, CfgError> {
        self.typed(namespace, key, ValueKind::Boolean, Value::as_boolean)
            .map_err(|absence| Self::strict_error(namespace, key, ValueKind::Boolean, absence))
    }

    pub fn require_boolean_or(&self, namespace: &str, key: &str, default: bool) -> bool {
        self.get_boolean(namespace, key).unwrap_or(default)
    }

    fn typed<T>(
        &self,
        namespace: &str,
        key: &str,
        kind: ValueKind,
        coerce: fn(&Value) -> Option<T>,
    ) -> Result<T, Absence> {
        let value = self.get(namespace, key).ok_or(Absence::Missing)?;
        coerce(&value).ok_or_else(|| {
            tracing::debug!(namespace, key, found = ?value.kind(), expected = ?kind, "config value coercion failed");
            Absence::Mismatch
        })
    }

    fn strict_error(namespace: &str, key: &str, kind: ValueKind, absence: Absence) -> CfgError {
        tracing::warn!(namespace, key, ?absence, expected = ?kind, "required config value unavailable");
        match absence {
            Absence::Missing => CfgError::missing(namespace, key),
            Absence::Mismatch => CfgError::invalid(namespace, key, kind),
        }
    }
}
