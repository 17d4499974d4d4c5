use shared_types::PersonId;
use thiserror::Error;

use crate::repository::error::DataLayerError;

/// Errors of the service layer.
///
/// Business outcomes, including "nobody matched", are never reported here. `Repository` is the
/// infrastructure kind: the store could not be queried, which says nothing about whether a
/// matching record exists.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    EntityNotFound(#[from] EntityNotFoundError),

    #[error("Repository error: `{0}`")]
    Repository(#[from] DataLayerError),
}

#[derive(Debug, Error)]
pub enum EntityNotFoundError {
    #[error("Person `{0}` not found")]
    Person(PersonId),
}
