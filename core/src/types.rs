//! Domain types for the todo service.
//!
//! # Design
//! A `Todo` is only ever produced by a store, so the caller-supplied half
//! lives in its own type (`NewTodo`). Identifiers are opaque to callers but
//! each backend issues a different kind: the in-memory store hands out random
//! UUIDs, PostgreSQL hands out `SERIAL` keys. `TodoId` is serialized untagged
//! so each backend keeps its natural JSON shape (string vs. number).

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Store-assigned identifier of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    /// Auto-incremented primary key issued by the relational backend.
    Serial(i32),
    /// Random v4 UUID issued by the in-memory backend.
    Uuid(Uuid),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Serial(id) => write!(f, "{id}"),
            TodoId::Uuid(id) => write!(f, "{id}"),
        }
    }
}

impl From<Uuid> for TodoId {
    fn from(id: Uuid) -> Self {
        TodoId::Uuid(id)
    }
}

impl From<i32> for TodoId {
    fn from(id: i32) -> Self {
        TodoId::Serial(id)
    }
}

/// A single stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub description: String,
    pub is_complete: bool,
}

/// Caller-supplied fields for a todo that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub description: String,
    pub is_complete: bool,
}

impl NewTodo {
    pub fn new(description: impl Into<String>, is_complete: bool) -> Self {
        Self {
            description: description.into(),
            is_complete,
        }
    }
}
