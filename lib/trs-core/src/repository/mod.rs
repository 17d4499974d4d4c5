use std::sync::Arc;

use name_synonym_repository::NameSynonymRepository;
use person_repository::PersonRepository;

pub mod error;
pub mod name_synonym_repository;
pub mod person_repository;

pub trait DataRepository: Send + Sync {
    fn get_person_repository(&self) -> Arc<dyn PersonRepository>;
    fn get_name_synonym_repository(&self) -> Arc<dyn NameSynonymRepository>;
}
