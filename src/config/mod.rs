mod bootstrap_settings;
mod database;
mod env_provider;
mod logging;

pub use bootstrap_settings::{BootstrapSettings, SettingsError};
pub use database::{init_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use logging::init_logging;

#[cfg(test)]
pub use env_provider::MockEnvironment;
