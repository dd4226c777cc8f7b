//! cfglookup: namespaced configuration lookup with environment redirects.
//!
//! Hexagonal architecture: resolution logic in [`domain`], port traits in [`ports`],
//! concrete stores and environments in [`adapters`].
//!
//! ```
//! use cfglookup::adapters::map_env::MapEnv;
//! use cfglookup::adapters::memory_store::MemoryStore;
//! use cfglookup::domain::resolver::Resolver;
//! use cfglookup::domain::value::Entry;
//!
//! let store = MemoryStore::new()
//!     .with("mailer", "port", "2525")
//!     .with("mailer", "password", Entry::env("SMTP_PASSWORD"));
//! let env = MapEnv::new().with("SMTP_PASSWORD", "hunter2");
//! let resolver = Resolver::new(&store, &env);
//!
//! assert_eq!(resolver.get_integer("mailer", "port"), Some(2525));
//! assert_eq!(resolver.require("mailer", "password").unwrap().to_string(), "hunter2");
//! assert!(resolver.require_boolean_or("mailer", "starttls", true));
//! ```

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
