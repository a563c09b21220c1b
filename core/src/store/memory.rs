use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::TodoStore;
use crate::error::Result;
use crate::types::{NewTodo, Todo, TodoId};

/// Process-local store. Nothing survives a restart.
///
/// New todos are always stored with `is_complete = false`, whatever the
/// caller asked for. The PostgreSQL backend keeps the supplied value.
#[derive(Debug, Default)]
pub struct MemoryStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get_single_todo(&self, id: &str) -> Result<Option<Todo>> {
        // Only the lowercase hyphenated spelling was ever issued.
        let issued = match Uuid::parse_str(id) {
            Ok(parsed) if parsed.hyphenated().to_string() == id => TodoId::Uuid(parsed),
            _ => return Ok(None),
        };
        let todos = self.todos.read().await;
        Ok(todos.iter().find(|todo| todo.id == issued).cloned())
    }

    async fn get_all_todos(&self) -> Result<Vec<Todo>> {
        Ok(self.todos.read().await.clone())
    }

    async fn create_todo(&self, new: NewTodo) -> Result<Todo> {
        let todo = Todo {
            id: TodoId::Uuid(Uuid::new_v4()),
            description: new.description,
            is_complete: false,
        };
        self.todos.write().await.push(todo.clone());
        tracing::debug!(id = %todo.id, "stored todo in memory");
        Ok(todo)
    }
}
