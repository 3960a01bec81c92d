use media_library::config::{self, DatabaseConfig};
use media_library::media::application::domain::status::STATUSES;
use media_library::{db, telemetry};
use migration::{Migrator, MigratorTrait};
use tracing::info;

/// Applies pending migrations against the configured database.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_env();
    telemetry::init_tracing();

    let db_config = DatabaseConfig::from_env()?;
    let conn = db::connect(&db_config).await?;

    Migrator::up(&*conn, None).await?;
    info!("Migrations applied");

    for status in STATUSES.iter() {
        info!(code = status.code, slug = status.slug, "Registered media status");
    }

    Ok(())
}
