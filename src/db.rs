use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;

pub fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(config.sqlx_logging);
    opt
}

pub async fn connect(config: &DatabaseConfig) -> Result<Arc<DatabaseConnection>, DbErr> {
    let conn = Database::connect(connect_options(config)).await?;
    info!(
        max_connections = config.max_connections,
        "Connected to database"
    );
    Ok(Arc::new(conn))
}
