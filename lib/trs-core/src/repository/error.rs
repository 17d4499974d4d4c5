use thiserror::Error;

/// Failures of the underlying store.
///
/// These never mean "no record exists": an empty lookup is `Ok(vec![])`.
#[derive(Debug, Error)]
pub enum DataLayerError {
    /// A stored record could not be decoded into the model.
    #[error("Response could not be mapped")]
    MappingError,

    #[error("Database error: {0}")]
    Db(#[from] anyhow::Error),
}
