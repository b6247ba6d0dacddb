pub use sea_orm_migration::prelude::*;

mod m20260815_create_link;
mod m20260816_create_comment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_create_link::Migration),
            Box::new(m20260816_create_comment::Migration),
        ]
    }
}
