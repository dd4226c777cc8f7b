//! Environment variable access port trait.

/// Read-only view of an environment variable table.
///
/// A variable that is unset, or whose value is not valid Unicode, is `None`.
pub trait EnvPort {
    fn var(&self, name: &str) -> Option<String>;
}
