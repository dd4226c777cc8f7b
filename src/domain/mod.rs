//! Values, errors and the resolver.

pub mod value;
pub mod resolver;
pub mod error;
