//! HTTP surface for the todo store.
//!
//! Four routes, each passing straight through to the `TodoStore` chosen at
//! startup. The router owns exactly one store instance as its state.

pub mod config;
pub mod error;
pub mod request;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use todo_core::{MemoryStore, PostgresStore, SecretResolver, Todo, TodoStore};
use tower_http::trace::TraceLayer;

use config::{ServerConfig, StoreKind};
use error::ApiError;

pub type SharedStore = Arc<dyn TodoStore>;

pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Build the backend named by `config`. The password is only requested for
/// PostgreSQL, after the other settings have been checked.
pub async fn connect_store(
    config: &ServerConfig,
    secrets: &dyn SecretResolver,
) -> anyhow::Result<SharedStore> {
    match config.store {
        StoreKind::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreKind::Postgres => {
            let pg = config
                .pg_config()
                .context("incomplete PostgreSQL configuration")?;
            let password = secrets
                .db_password()
                .await
                .context("failed to resolve database password")?;
            let store = PostgresStore::connect(&pg, &password)
                .await
                .context("failed to initialize PostgreSQL store")?;
            Ok(Arc::new(store))
        }
    }
}

async fn ready() -> &'static str {
    "OK"
}

async fn list_todos(State(store): State<SharedStore>) -> Result<Json<Vec<Todo>>, ApiError> {
    Ok(Json(store.get_all_todos().await?))
}

async fn get_todo(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    store
        .get_single_todo(&id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn create_todo(
    State(store): State<SharedStore>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let body = body.map_err(|rejection| {
        tracing::debug!("unreadable create body: {rejection}");
        ApiError::Validation
    })?;
    let new = request::parse_create_todo(&body)?;
    tracing::debug!(
        description = %new.description,
        is_complete = new.is_complete,
        "creating todo"
    );
    let todo = store.create_todo(new).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
