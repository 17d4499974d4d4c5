use sea_orm::DbErr;
use trs_core::repository::error::DataLayerError;

pub(crate) fn to_data_layer_error(e: DbErr) -> DataLayerError {
    match e {
        // a stored value that does not decode into the model
        DbErr::Type(reason) => {
            tracing::warn!("Failed to map stored record: {reason}");
            DataLayerError::MappingError
        }
        DbErr::TryIntoErr { from, into, .. } => {
            tracing::warn!("Failed to map stored record: {from} into {into}");
            DataLayerError::MappingError
        }
        other => DataLayerError::Db(anyhow::Error::new(other)),
    }
}
