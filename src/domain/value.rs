//! Stored entries and resolved values.

use std::fmt;

/// A resolved configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Integer view: integers pass through, strings parse their leading integer literal.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::String(s) => parse_leading_integer(s),
            Value::Boolean(_) => None,
        }
    }

    /// Boolean view: booleans pass through, only the exact strings `"true"`/`"false"` coerce.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            Value::Integer(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// The type a typed accessor asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Integer,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "a string",
            ValueKind::Integer => "an integer",
            ValueKind::Boolean => "a boolean",
        };
        f.write_str(name)
    }
}

/// Names the environment variable an entry defers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectMarker {
    pub var: String,
}

impl RedirectMarker {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

/// What a config store holds under a (namespace, key) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Literal(Value),
    Env(RedirectMarker),
}

impl Entry {
    pub fn env(var: impl Into<String>) -> Self {
        Entry::Env(RedirectMarker::new(var))
    }

    pub fn redirect(&self) -> Option<&RedirectMarker> {
        match self {
            Entry::Env(marker) => Some(marker),
            Entry::Literal(_) => None,
        }
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Literal(value)
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Literal(s.into())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Literal(s.into())
    }
}

impl From<i64> for Entry {
    fn from(n: i64) -> Self {
        Entry::Literal(n.into())
    }
}

impl From<i32> for Entry {
    fn from(n: i32) -> Self {
        Entry::Literal(n.into())
    }
}

impl From<bool> for Entry {
    fn from(b: bool) -> Self {
        Entry::Literal(b.into())
    }
}

impl From<RedirectMarker> for Entry {
    fn from(marker: RedirectMarker) -> Self {
        Entry::Env(marker)
    }
}

/// Parse an optional sign followed by ASCII digits at the start of `s`.
///
/// Trailing content after the digits is ignored. Returns `None` when no digit
/// follows the sign, or when the prefix does not fit in an `i64`.
pub fn parse_leading_integer(s: &str) -> Option<i64> {
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
