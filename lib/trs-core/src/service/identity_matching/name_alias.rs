use std::collections::{HashMap, HashSet};

use crate::model::name_synonym::NameSynonym;
use crate::repository::error::DataLayerError;
use crate::repository::name_synonym_repository::NameSynonymRepository;
use crate::util::normalization::normalize_name;

/// Resolves a first name to the closed set of names treated as equivalent to it.
///
/// Lookups are direct: the store already holds both directions of every synonym pair, so no
/// symmetric or transitive closure is computed here.
#[derive(Clone, Debug, Default)]
pub struct NameAliasResolver {
    synonyms: HashMap<String, HashSet<String>>,
}

impl NameAliasResolver {
    pub fn new(rows: impl IntoIterator<Item = NameSynonym>) -> Self {
        let mut synonyms: HashMap<String, HashSet<String>> = HashMap::new();

        for row in rows {
            let (Some(name), Some(synonym)) =
                (normalize_name(&row.name), normalize_name(&row.synonym))
            else {
                continue;
            };

            synonyms.entry(name).or_default().insert(synonym);
        }

        Self { synonyms }
    }

    /// Loads the synonyms of `names` (already normalized) from the store.
    pub async fn load(
        repository: &dyn NameSynonymRepository,
        names: &[String],
    ) -> Result<Self, DataLayerError> {
        if names.is_empty() {
            return Ok(Self::default());
        }

        let rows = repository.get_name_synonyms(names).await?;
        tracing::debug!("Loaded {} name synonym(s)", rows.len());

        Ok(Self::new(rows))
    }

    /// The normalized name itself plus every registered synonym. Empty for a blank name.
    pub fn resolve(&self, name: &str) -> HashSet<String> {
        let Some(name) = normalize_name(name) else {
            return HashSet::new();
        };

        let mut names = self.synonyms.get(&name).cloned().unwrap_or_default();
        names.insert(name);
        names
    }

    /// Whether the claimed first name equals, or is a registered synonym of, the stored one.
    pub fn is_equivalent(&self, claimed: &str, stored: &str) -> bool {
        let (Some(claimed), Some(stored)) = (normalize_name(claimed), normalize_name(stored))
        else {
            return false;
        };

        claimed == stored
            || self
                .synonyms
                .get(&claimed)
                .is_some_and(|synonyms| synonyms.contains(&stored))
    }
}
