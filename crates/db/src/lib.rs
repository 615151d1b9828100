//! SQLite connectivity for erudio.
//!
//! Modules contribute their schema as [`erudio_kernel::Migration`]s; this crate
//! owns the pool, applies those migrations once, and provides the paging
//! types repositories share.

pub mod migrate;
pub mod module;
pub mod pagination;

use std::str::FromStr;

use anyhow::Context;
use erudio_kernel::settings::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use migrate::run_migrations;
pub use module::{create_module, DatabaseModule};
pub use pagination::{Page, PageQuery, Pageable, SortDirection};

/// Open the pool described by `settings`, creating the database file (and its
/// parent directory) when missing.
pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&settings.url)
        .with_context(|| format!("invalid database url '{}'", settings.url))?
        .create_if_missing(true)
        .foreign_keys(true);

    if let Some(parent) = options.get_filename().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("failed to connect to {}", settings.url))?;

    tracing::info!(target: "erudio-db", url = %settings.url, "database pool ready");

    Ok(pool)
}

/// Single-connection in-memory pool. Every connection to `sqlite::memory:`
/// is a separate database, so the pool must never open a second one.
pub async fn connect_in_memory() -> anyhow::Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("failed to open in-memory database")
}
