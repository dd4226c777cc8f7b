//! Port traits the resolver reads through.

pub mod config_port;
pub mod env_port;
