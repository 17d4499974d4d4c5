use sea_orm::DatabaseConnection;

pub mod repository;

#[cfg(test)]
mod test;

pub(crate) struct NameSynonymProvider {
    pub db: DatabaseConnection,
}
