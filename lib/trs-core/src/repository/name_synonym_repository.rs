use super::error::DataLayerError;
use crate::model::name_synonym::NameSynonym;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait NameSynonymRepository: Send + Sync {
    /// Returns every stored row whose `name` is one of `names`.
    async fn get_name_synonyms(&self, names: &[String]) -> Result<Vec<NameSynonym>, DataLayerError>;
}
