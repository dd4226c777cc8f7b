//! Process environment adapter.

use crate::ports::env_port::EnvPort;

/// Reads straight from the live process environment on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvPort for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_std_env() {
        for (name, value) in std::env::vars_os() {
            let (Ok(name), Ok(value)) = (name.into_string(), value.into_string()) else {
                continue;
            };
            assert_eq!(ProcessEnv.var(&name), Some(value), "{name}");
        }
    }

    #[test]
    fn unknown_variable_is_unset() {
        assert_eq!(ProcessEnv.var("CFGLOOKUP_PROCESS_ENV_NEVER_SET_3K"), None);
    }
}
