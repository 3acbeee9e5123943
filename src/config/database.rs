use migration::{CfpMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};

use crate::config::BootstrapSettings;

/// Connect to the application database
///
/// Does NOT run migrations - call migrate_database() separately.
pub async fn init_database(settings: &BootstrapSettings) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(settings.database_url()).await?;

    tracing::debug!("Connected to database: {}", settings.database_url());

    Ok(db)
}

/// Run all pending migrations on the provided connection
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), DbErr> {
    CfpMigrator::up(db, None).await?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
