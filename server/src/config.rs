//! Process configuration, read from flags or the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{Parser, ValueEnum};
use todo_core::{ConfigError, PgConfig};

/// Which backend holds the todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Process-local, lost on restart.
    Memory,
    /// PostgreSQL `todos` table.
    Postgres,
}

/// Todo REST API server
#[derive(Parser, Debug, Clone)]
#[command(name = "todo-server")]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "BIND_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Storage backend
    #[arg(long, env = "TODO_STORE", value_enum, default_value_t = StoreKind::Postgres)]
    pub store: StoreKind,

    /// PostgreSQL user
    #[arg(long, env = "PG_USER")]
    pub pg_user: Option<String>,

    /// PostgreSQL database name
    #[arg(long, env = "PG_DATABASE")]
    pub pg_database: Option<String>,

    /// PostgreSQL host
    #[arg(long, env = "PG_HOST")]
    pub pg_host: Option<String>,

    /// PostgreSQL port
    #[arg(long, env = "PG_PORT")]
    pub pg_port: Option<u16>,

    /// Connections held open to PostgreSQL
    #[arg(long, env = "PG_MAX_CONNECTIONS", default_value_t = 1)]
    pub pg_max_connections: u32,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Connection settings for the PostgreSQL backend. Fails on the first
    /// required setting that is absent.
    pub fn pg_config(&self) -> Result<PgConfig, ConfigError> {
        if self.pg_max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "PG_MAX_CONNECTIONS",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(PgConfig {
            user: required(&self.pg_user, "PG_USER")?,
            database: required(&self.pg_database, "PG_DATABASE")?,
            host: required(&self.pg_host, "PG_HOST")?,
            port: self.pg_port.ok_or(ConfigError::Missing("PG_PORT"))?,
            max_connections: self.pg_max_connections,
        })
    }
}

fn required(value: &Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .as_deref()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::Missing(name))
}
