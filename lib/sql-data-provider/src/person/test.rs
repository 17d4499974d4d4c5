use sea_orm::{ConnectionTrait, Statement};
use similar_asserts::assert_eq;
use time::macros::date;
use trs_core::model::employment::EmploymentRelations;
use trs_core::model::person::{Person, PersonRelations};
use trs_core::repository::error::DataLayerError;
use trs_core::repository::person_repository::PersonRepository;
use uuid::Uuid;

use super::PersonProvider;
use crate::test_utilities::{
    dummy_person, insert_employment, insert_person, setup_test_database,
};

struct TestSetup {
    pub db: sea_orm::DatabaseConnection,
    pub provider: PersonProvider,
}

async fn setup() -> TestSetup {
    let db = setup_test_database().await;

    TestSetup {
        provider: PersonProvider { db: db.clone() },
        db,
    }
}

fn with_employments() -> PersonRelations {
    PersonRelations {
        employments: Some(EmploymentRelations::default()),
    }
}

fn ids(persons: &[Person]) -> Vec<u128> {
    persons
        .iter()
        .map(|person| Uuid::from(person.id).as_u128())
        .collect()
}

#[tokio::test]
async fn test_get_person() {
    let TestSetup { db, provider } = setup().await;

    let person = Person {
        middle_name: Some("Jane".to_string()),
        national_insurance_number: Some("AB123456C".to_string()),
        email_address: Some("amelia@example.com".to_string()),
        ..dummy_person(1)
    };
    insert_person(&db, &person).await.unwrap();
    insert_employment(&db, person.id, Some("QQ123456C"))
        .await
        .unwrap();

    let without_relations = provider
        .get_person(&person.id, &PersonRelations::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(without_relations, person);

    let with_relations = provider
        .get_person(&person.id, &with_employments())
        .await
        .unwrap()
        .unwrap();
    let employments = with_relations.employments.unwrap();
    assert_eq!(employments.len(), 1);
    assert_eq!(
        employments[0].national_insurance_number.as_deref(),
        Some("QQ123456C")
    );
    assert_eq!(employments[0].person_id, person.id);
}

#[tokio::test]
async fn test_get_person_missing() {
    let TestSetup { provider, .. } = setup().await;

    let result = provider
        .get_person(&Uuid::new_v4().into(), &with_employments())
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_persons_by_last_name_and_date_of_birth() {
    let TestSetup { db, provider } = setup().await;

    insert_person(
        &db,
        &Person {
            last_name: "  SMITH ".to_string(),
            ..dummy_person(1)
        },
    )
    .await
    .unwrap();
    insert_person(
        &db,
        &Person {
            date_of_birth: Some(date!(1991 - 05 - 02)),
            ..dummy_person(2)
        },
    )
    .await
    .unwrap();
    insert_person(
        &db,
        &Person {
            last_name: "Jones".to_string(),
            ..dummy_person(3)
        },
    )
    .await
    .unwrap();

    let persons = provider
        .get_persons_by_last_name_and_date_of_birth(
            &["amelia".to_string(), "smith".to_string()],
            &[date!(1990 - 05 - 02)],
            &with_employments(),
        )
        .await
        .unwrap();

    assert_eq!(ids(&persons), vec![1]);
    assert_eq!(persons[0].employments, Some(vec![]));
}

#[tokio::test]
async fn test_get_persons_by_national_insurance_number_searches_employments() {
    let TestSetup { db, provider } = setup().await;

    let own = Person {
        national_insurance_number: Some("ab 12 34 56 c".to_string()),
        ..dummy_person(1)
    };
    insert_person(&db, &own).await.unwrap();

    let via_employment = dummy_person(2);
    insert_person(&db, &via_employment).await.unwrap();
    insert_employment(&db, via_employment.id, Some("AB123456C"))
        .await
        .unwrap();
    insert_employment(&db, via_employment.id, Some("AB123456C"))
        .await
        .unwrap();

    let both = Person {
        national_insurance_number: Some("AB123456C".to_string()),
        ..dummy_person(3)
    };
    insert_person(&db, &both).await.unwrap();
    insert_employment(&db, both.id, Some("AB123456C"))
        .await
        .unwrap();

    let unrelated = dummy_person(4);
    insert_person(&db, &unrelated).await.unwrap();
    insert_employment(&db, unrelated.id, Some("ZZ999999Z"))
        .await
        .unwrap();

    let persons = provider
        .get_persons_by_national_insurance_number(&["AB123456C".to_string()], &with_employments())
        .await
        .unwrap();

    assert_eq!(ids(&persons), vec![1, 2, 3]);
    assert_eq!(persons[1].employments.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_get_persons_by_reference_number() {
    let TestSetup { db, provider } = setup().await;

    insert_person(&db, &dummy_person(1)).await.unwrap();
    insert_person(&db, &dummy_person(2)).await.unwrap();
    insert_person(&db, &dummy_person(3)).await.unwrap();

    let persons = provider
        .get_persons_by_reference_number(
            &["0000003".to_string(), "0000001".to_string()],
            &PersonRelations::default(),
        )
        .await
        .unwrap();

    assert_eq!(ids(&persons), vec![1, 3]);
    assert!(persons.iter().all(|person| person.employments.is_none()));
}

#[tokio::test]
async fn test_get_persons_by_single_attribute() {
    let TestSetup { db, provider } = setup().await;

    insert_person(
        &db,
        &Person {
            email_address: Some("Amelia.Smith@Example.com".to_string()),
            ..dummy_person(1)
        },
    )
    .await
    .unwrap();
    insert_person(
        &db,
        &Person {
            last_name: "Jones".to_string(),
            date_of_birth: None,
            ..dummy_person(2)
        },
    )
    .await
    .unwrap();

    let by_last_name = provider
        .get_persons_by_last_name(&["jones".to_string()], &PersonRelations::default())
        .await
        .unwrap();
    assert_eq!(ids(&by_last_name), vec![2]);

    let by_date_of_birth = provider
        .get_persons_by_date_of_birth(&[date!(1990 - 05 - 02)], &PersonRelations::default())
        .await
        .unwrap();
    assert_eq!(ids(&by_date_of_birth), vec![1]);

    let by_email_address = provider
        .get_persons_by_email_address(
            &["amelia.smith@example.com".to_string()],
            &PersonRelations::default(),
        )
        .await
        .unwrap();
    assert_eq!(ids(&by_email_address), vec![1]);
    assert_eq!(
        by_email_address[0].email_address.as_deref(),
        Some("Amelia.Smith@Example.com")
    );
}

#[tokio::test]
async fn test_empty_keys_return_nothing() {
    let TestSetup { db, provider } = setup().await;

    insert_person(&db, &dummy_person(1)).await.unwrap();

    let relations = with_employments();
    assert!(
        provider
            .get_persons_by_last_name_and_date_of_birth(&[], &[date!(1990 - 05 - 02)], &relations)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        provider
            .get_persons_by_national_insurance_number(&[], &relations)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        provider
            .get_persons_by_last_name(&[], &relations)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(
        provider
            .get_persons_by_date_of_birth(&[], &relations)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_undecodable_stored_id_is_mapping_error() {
    let TestSetup { db, provider } = setup().await;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "INSERT INTO person (id, created_date, last_modified, reference_number, \
         first_name, last_name, normalized_last_name) \
         VALUES ('not-a-uuid', '2025-01-01 00:00:00', '2025-01-01 00:00:00', '1234567', \
         'Amelia', 'Smith', 'smith')",
    ))
    .await
    .unwrap();

    let result = provider
        .get_persons_by_last_name(&["smith".to_owned()], &PersonRelations::default())
        .await;
    assert!(matches!(result, Err(DataLayerError::MappingError)));
}
