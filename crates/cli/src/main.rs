use anyhow::Context;
use clap::{Parser, Subcommand};
use erudio_kernel::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "erudio", version, about = "Operator commands for the erudio service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply pending module migrations to the configured database
    Migrate,
    /// Print the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("failed to load erudio settings")?;

    match cli.command {
        Command::Migrate => migrate(&settings).await,
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
    }
}

async fn migrate(settings: &Settings) -> anyhow::Result<()> {
    erudio_telemetry::init(&settings.telemetry)?;

    let pool = erudio_db::connect(&settings.database).await?;
    let registry = erudio_app::build_registry(&pool, settings)?;
    let applied = erudio_app::migrate(&pool, &registry).await?;

    tracing::info!(applied, db = %settings.database.url, "migrations complete");
    pool.close().await;
    Ok(())
}
