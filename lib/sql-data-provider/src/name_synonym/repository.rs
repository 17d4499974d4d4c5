use autometrics::autometrics;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{EntityTrait, QueryFilter, QueryOrder};
use trs_core::model::name_synonym::NameSynonym;
use trs_core::repository::error::DataLayerError;
use trs_core::repository::name_synonym_repository::NameSynonymRepository;

use super::NameSynonymProvider;
use crate::entity::name_synonym;
use crate::mapper::to_data_layer_error;

impl From<name_synonym::Model> for NameSynonym {
    fn from(value: name_synonym::Model) -> Self {
        Self {
            name: value.name,
            synonym: value.synonym,
        }
    }
}

#[autometrics]
#[async_trait::async_trait]
impl NameSynonymRepository for NameSynonymProvider {
    async fn get_name_synonyms(&self, names: &[String]) -> Result<Vec<NameSynonym>, DataLayerError> {
        if names.is_empty() {
            return Ok(vec![]);
        }

        let synonyms = name_synonym::Entity::find()
            // keys are lowercase, stored rows may not be
            .filter(
                Expr::expr(Func::lower(Expr::col(name_synonym::Column::Name)))
                    .is_in(names.iter().map(String::as_str)),
            )
            .order_by_asc(name_synonym::Column::Name)
            .order_by_asc(name_synonym::Column::Synonym)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(synonyms.into_iter().map(Into::into).collect())
    }
}
