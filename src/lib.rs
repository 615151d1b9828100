//! Erudio application library
//!
//! Feature modules (person, book, file, math) and the helpers that wire them
//! into a [`ModuleRegistry`].

#![recursion_limit = "256"]

pub mod modules;
pub mod utils;

use erudio_kernel::{settings::Settings, ModuleRegistry};
use sqlx::SqlitePool;

/// Registry holding the core `db` module and every feature module.
pub fn build_registry(pool: &SqlitePool, settings: &Settings) -> anyhow::Result<ModuleRegistry> {
    let mut registry = ModuleRegistry::new();
    registry.register_core(erudio_db::create_module(pool.clone()));
    modules::register_all(&mut registry, pool, settings)?;
    Ok(registry)
}

/// Apply every pending module migration; returns how many ran.
pub async fn migrate(pool: &SqlitePool, registry: &ModuleRegistry) -> anyhow::Result<usize> {
    erudio_db::run_migrations(pool, &registry.collect_migrations()).await
}
