#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use name_synonym::NameSynonymProvider;
use person::PersonProvider;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use trs_core::repository::DataRepository;
use trs_core::repository::error::DataLayerError;
use trs_core::repository::name_synonym_repository::NameSynonymRepository;
use trs_core::repository::person_repository::PersonRepository;

use crate::mapper::to_data_layer_error;

mod entity;
mod mapper;
pub mod name_synonym;
pub mod person;

#[cfg(test)]
mod test_utilities;

pub type DbConn = DatabaseConnection;

#[derive(Clone)]
pub struct DataLayer {
    person_repository: Arc<dyn PersonRepository>,
    name_synonym_repository: Arc<dyn NameSynonymRepository>,
}

impl DataLayer {
    pub fn build(db: DbConn) -> Self {
        Self {
            person_repository: Arc::new(PersonProvider { db: db.clone() }),
            name_synonym_repository: Arc::new(NameSynonymProvider { db }),
        }
    }
}

impl DataRepository for DataLayer {
    fn get_person_repository(&self) -> Arc<dyn PersonRepository> {
        self.person_repository.clone()
    }

    fn get_name_synonym_repository(&self) -> Arc<dyn NameSynonymRepository> {
        self.name_synonym_repository.clone()
    }
}

/// Connects to the register database, optionally bringing its schema up to date first.
pub async fn db_conn(
    database_url: impl Into<String>,
    run_migrations: bool,
) -> Result<DbConn, DataLayerError> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(to_data_layer_error)?;

    if run_migrations {
        Migrator::up(&db, None)
            .await
            .map_err(to_data_layer_error)?;
        tracing::debug!("Database schema up to date");
    }

    Ok(db)
}
