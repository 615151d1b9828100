use std::sync::Arc;

use async_trait::async_trait;
use erudio_kernel::{InitCtx, Module};
use sqlx::SqlitePool;

/// Core module owning the connection pool's lifecycle.
pub struct DatabaseModule {
    pool: SqlitePool,
}

impl DatabaseModule {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Module for DatabaseModule {
    fn name(&self) -> &'static str {
        "db"
    }

    fn base_path(&self) -> Option<String> {
        None
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        tracing::info!(
            module = self.name(),
            url = %ctx.settings.database.url,
            connections = self.pool.size(),
            "database reachable"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        self.pool.close().await;
        tracing::info!(module = self.name(), "database pool closed");
        Ok(())
    }
}

pub fn create_module(pool: SqlitePool) -> Arc<dyn Module> {
    Arc::new(DatabaseModule::new(pool))
}
