//! Identity matching engine of the teacher record register.
//!
//! Decides whether an inbound identity claim refers to an existing person record, to a set of
//! plausible candidates needing human review, or to nobody on file. The crate is read-only: it
//! queries the person store through the traits in [`repository`] and never writes.

#![cfg_attr(feature = "strict", deny(warnings))]

use std::sync::Arc;

use config::core_config::CoreConfig;
use repository::DataRepository;
use service::identity_matching::IdentityMatchingService;

pub mod config;
pub mod model;
pub mod repository;
pub mod service;
pub mod util;

#[derive(Clone)]
pub struct TrsCore {
    pub identity_matching_service: IdentityMatchingService,
}

impl TrsCore {
    pub fn new(data_repository: Arc<dyn DataRepository>, config: CoreConfig) -> Self {
        let config = Arc::new(config);

        Self {
            identity_matching_service: IdentityMatchingService::new(
                data_repository.get_person_repository(),
                data_repository.get_name_synonym_repository(),
                config,
            ),
        }
    }
}
