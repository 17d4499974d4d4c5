use std::sync::Arc;

use crate::config::core_config::CoreConfig;
use crate::repository::name_synonym_repository::NameSynonymRepository;
use crate::repository::person_repository::PersonRepository;

pub mod attribute_matcher;
pub mod candidate_finder;
pub mod dto;
mod mapper;
pub mod name_alias;
pub mod policy;
pub mod ranker;
pub mod service;
mod validator;

#[derive(Clone)]
pub struct IdentityMatchingService {
    person_repository: Arc<dyn PersonRepository>,
    name_synonym_repository: Arc<dyn NameSynonymRepository>,
    config: Arc<CoreConfig>,
}

impl IdentityMatchingService {
    pub fn new(
        person_repository: Arc<dyn PersonRepository>,
        name_synonym_repository: Arc<dyn NameSynonymRepository>,
        config: Arc<CoreConfig>,
    ) -> Self {
        Self {
            person_repository,
            name_synonym_repository,
            config,
        }
    }
}
