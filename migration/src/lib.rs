pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_users;

pub struct CfpMigrator;

#[async_trait::async_trait]
impl MigratorTrait for CfpMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_users::Migration),
        ]
    }
}
