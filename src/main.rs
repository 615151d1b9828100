use anyhow::Context;
use erudio_kernel::{settings::Settings, InitCtx};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load erudio settings")?;
    erudio_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        db = %settings.database.url,
        "erudio-app bootstrap starting"
    );

    let pool = erudio_db::connect(&settings.database).await?;
    let registry = erudio_app::build_registry(&pool, &settings)?;

    let applied = erudio_app::migrate(&pool, &registry)
        .await
        .context("failed to apply migrations")?;
    tracing::info!(applied, "migrations complete");

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_all(&ctx).await?;
    registry.start_all(&ctx).await?;

    tracing::info!("erudio-app bootstrap complete");

    let served = erudio_http::start_server(&registry, &settings).await;
    registry.stop_all().await?;
    served
}
