pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_modified_on_function;
mod m20260301_000002_create_table_tags;
mod m20260301_000003_create_table_comments;
mod m20260301_000004_create_table_media;
mod m20260301_000005_create_table_media_tags;
mod m20260301_000006_create_table_media_comments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_modified_on_function::Migration),
            Box::new(m20260301_000002_create_table_tags::Migration),
            Box::new(m20260301_000003_create_table_comments::Migration),
            Box::new(m20260301_000004_create_table_media::Migration),
            Box::new(m20260301_000005_create_table_media_tags::Migration),
            Box::new(m20260301_000006_create_table_media_comments::Migration),
        ]
    }
}
