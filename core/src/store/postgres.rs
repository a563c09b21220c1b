use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

use super::TodoStore;
use crate::error::Result;
use crate::types::{NewTodo, Todo, TodoId};

/// Connection settings for the relational backend. The password is resolved
/// separately and never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgConfig {
    pub user: String,
    pub database: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

/// Durable store backed by a single `todos` table.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct TodoRow {
    id: i32,
    description: String,
    is_complete: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Todo {
            id: TodoId::Serial(row.id),
            description: row.description,
            is_complete: row.is_complete,
        }
    }
}

impl PostgresStore {
    /// Connect and make sure the `todos` table exists.
    pub async fn connect(config: &PgConfig, password: &str) -> Result<Self> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            user = %config.user,
            "connecting to PostgreSQL"
        );

        let options = PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(password)
            .database(&config.database);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool and make sure the `todos` table exists.
    pub async fn from_pool(pool: PgPool) -> Result<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS todos (
                id SERIAL PRIMARY KEY,
                description TEXT NOT NULL,
                is_complete BOOLEAN NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await?;

        tracing::info!("todos table ready");
        Ok(Self { pool })
    }
}

#[async_trait]
impl TodoStore for PostgresStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn get_single_todo(&self, id: &str) -> Result<Option<Todo>> {
        // Only SERIAL keys are ever issued here, in their plain decimal form.
        let id = match id.parse::<i32>() {
            Ok(parsed) if parsed.to_string() == id => parsed,
            _ => return Ok(None),
        };

        let row: Option<TodoRow> =
            sqlx::query_as("SELECT id, description, is_complete FROM todos WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(Todo::from))
    }

    async fn get_all_todos(&self) -> Result<Vec<Todo>> {
        let rows: Vec<TodoRow> = sqlx::query_as("SELECT id, description, is_complete FROM todos")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Todo::from).collect())
    }

    async fn create_todo(&self, new: NewTodo) -> Result<Todo> {
        let row: TodoRow = sqlx::query_as(
            r#"
            INSERT INTO todos (description, is_complete)
            VALUES ($1, $2)
            RETURNING id, description, is_complete
            "#,
        )
        .bind(&new.description)
        .bind(new.is_complete)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = row.id, "inserted todo row");
        Ok(row.into())
    }
}
