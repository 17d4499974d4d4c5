use similar_asserts::assert_eq;
use trs_core::model::name_synonym::NameSynonym;
use trs_core::repository::name_synonym_repository::NameSynonymRepository;

use super::NameSynonymProvider;
use crate::test_utilities::{insert_name_synonym_pair, setup_test_database};

fn synonym(name: &str, synonym: &str) -> NameSynonym {
    NameSynonym {
        name: name.to_string(),
        synonym: synonym.to_string(),
    }
}

#[tokio::test]
async fn test_get_name_synonyms() {
    let db = setup_test_database().await;
    insert_name_synonym_pair(&db, "william", "bill").await.unwrap();
    insert_name_synonym_pair(&db, "william", "will").await.unwrap();
    insert_name_synonym_pair(&db, "margaret", "peggy").await.unwrap();

    let provider = NameSynonymProvider { db };

    let synonyms = provider
        .get_name_synonyms(&["william".to_string(), "peggy".to_string()])
        .await
        .unwrap();

    assert_eq!(
        synonyms,
        vec![
            synonym("peggy", "margaret"),
            synonym("william", "bill"),
            synonym("william", "will"),
        ]
    );
}

#[tokio::test]
async fn test_get_name_synonyms_without_names() {
    let db = setup_test_database().await;
    insert_name_synonym_pair(&db, "william", "bill").await.unwrap();

    let provider = NameSynonymProvider { db };

    assert!(provider.get_name_synonyms(&[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_name_synonyms_ignores_stored_case() {
    let db = setup_test_database().await;
    insert_name_synonym_pair(&db, "William", "Bill").await.unwrap();

    let provider = NameSynonymProvider { db };

    let synonyms = provider
        .get_name_synonyms(&["william".to_string(), "bill".to_string()])
        .await
        .unwrap();

    assert_eq!(
        synonyms,
        vec![synonym("Bill", "William"), synonym("William", "Bill")]
    );
}
