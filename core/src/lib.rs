//! Todo persistence core.
//!
//! # Overview
//! Defines the `Todo` record and the `TodoStore` contract, with two
//! interchangeable backends: a process-local `MemoryStore` and a durable
//! `PostgresStore`. The HTTP layer picks one at startup and holds it as
//! `Arc<dyn TodoStore>`.
//!
//! # Design
//! - Stores own their state privately; callers only ever get clones.
//! - Lookups by unknown id return `Ok(None)`; errors are reserved for
//!   backend failures.
//! - The database password comes from a `SecretResolver`, injected at
//!   startup rather than read inside the store.

pub mod error;
pub mod secrets;
pub mod store;
pub mod types;

pub use error::{ConfigError, StoreError};
pub use secrets::{EnvSecretResolver, SecretResolver};
pub use store::{MemoryStore, PgConfig, PostgresStore, TodoStore};
pub use types::{NewTodo, Todo, TodoId};
