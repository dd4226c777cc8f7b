//! Error types for configuration lookup.

use crate::domain::value::ValueKind;

/// Top-level error type for cfglookup.
#[derive(Debug, thiserror::Error)]
pub enum CfgError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config value {namespace}.{key}")]
    Missing { namespace: String, key: String },

    #[error("config value {namespace}.{key} is not {expected}")]
    Invalid {
        namespace: String,
        key: String,
        expected: ValueKind,
    },

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CfgError {
    pub fn missing(namespace: &str, key: &str) -> Self {
        CfgError::Missing {
            namespace: namespace.to_string(),
            key: key.to_string(),
        }
    }

    pub fn invalid(namespace: &str, key: &str, expected: ValueKind) -> Self {
        CfgError::Invalid {
            namespace: namespace.to_string(),
            key: key.to_string(),
            expected,
        }
    }

    /// Process exit status the CLI reports for this error.
    pub fn exit_status(&self) -> u8 {
        match self {
            CfgError::Io(_) => 1,
            CfgError::ConfigParse { .. } => 2,
            CfgError::Missing { .. } => 3,
            CfgError::Invalid { .. } => 4,
            CfgError::InvalidArgument { .. } => 5,
        }
    }
}

impl From<&CfgError> for std::process::ExitCode {
    fn from(err: &CfgError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
