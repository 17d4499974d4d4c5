pub use sea_orm_migration::prelude::*;

pub(crate) mod datatype;

mod m20250312_000001_initial;
mod m20250402_101530_name_synonym;
mod m20250519_083012_normalized_email_address;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250312_000001_initial::Migration),
            Box::new(m20250402_101530_name_synonym::Migration),
            Box::new(m20250519_083012_normalized_email_address::Migration),
        ]
    }
}
