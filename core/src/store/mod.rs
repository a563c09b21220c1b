//! Persistence contract for todos and its backends.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{NewTodo, Todo};

pub use memory::MemoryStore;
pub use postgres::{PgConfig, PostgresStore};

/// A backend that owns a collection of todos.
///
/// Todos are append-only: there is no update or delete. Every method returns
/// owned values, never a handle into backend state.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Look up a todo by the identifier as it appears in a request path.
    ///
    /// Returns `Ok(None)` when no todo has that id, including ids that this
    /// backend could never have issued.
    async fn get_single_todo(&self, id: &str) -> Result<Option<Todo>>;

    /// All todos, in backend-defined order.
    async fn get_all_todos(&self) -> Result<Vec<Todo>>;

    /// Allocate an id, persist the todo and return what was stored.
    async fn create_todo(&self, new: NewTodo) -> Result<Todo>;
}
