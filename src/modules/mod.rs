pub mod book;
pub mod file;
pub mod math;
pub mod person;

use erudio_http::hateoas::LinkBuilder;
use erudio_kernel::{settings::Settings, ModuleRegistry};
use sqlx::SqlitePool;

/// Register all project-specific modules with the registry
pub fn register_all(
    registry: &mut ModuleRegistry,
    pool: &SqlitePool,
    settings: &Settings,
) -> anyhow::Result<()> {
    let links = LinkBuilder::new(settings.server.public_url.as_str());

    registry.register_custom(person::create_module(pool.clone(), links.clone()));
    registry.register_custom(book::create_module(pool.clone(), links.clone()));
    registry.register_custom(file::create_module(&settings.file_storage, links)?);
    registry.register_custom(math::create_module());
    Ok(())
}
