use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use shared_types::{EmploymentId, PersonId};
use time::OffsetDateTime;
use time::macros::{date, datetime};
use trs_core::model::person::{Gender, Person};
use trs_core::util::normalization::{
    normalize_email_address, normalize_name, normalize_national_insurance_number,
};
use uuid::Uuid;

use crate::entity::{employment, name_synonym, person};
use crate::{DataLayer, DbConn, db_conn};

pub fn get_dummy_date() -> OffsetDateTime {
    datetime!(2005-04-02 21:37 +1)
}

pub fn dummy_person(id: u128) -> Person {
    Person {
        id: Uuid::from_u128(id).into(),
        reference_number: format!("{id:07}"),
        first_name: "Amelia".to_string(),
        middle_name: None,
        last_name: "Smith".to_string(),
        date_of_birth: Some(date!(1990 - 05 - 02)),
        national_insurance_number: None,
        email_address: None,
        gender: Some(Gender::Female),
        employments: None,
    }
}

pub async fn insert_person(db: &DatabaseConnection, person: &Person) -> Result<PersonId, DbErr> {
    let normalized_last_name = normalize_name(&person.last_name).unwrap_or_default();

    let model = person::ActiveModel {
        id: Set(person.id),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        reference_number: Set(person.reference_number.to_owned()),
        first_name: Set(person.first_name.to_owned()),
        middle_name: Set(person.middle_name.to_owned()),
        last_name: Set(person.last_name.to_owned()),
        normalized_last_name: Set(normalized_last_name),
        date_of_birth: Set(person.date_of_birth),
        national_insurance_number: Set(person.national_insurance_number.to_owned()),
        normalized_national_insurance_number: Set(person
            .national_insurance_number
            .as_deref()
            .and_then(normalize_national_insurance_number)),
        email_address: Set(person.email_address.to_owned()),
        normalized_email_address: Set(person
            .email_address
            .as_deref()
            .and_then(normalize_email_address)),
        gender: Set(person.gender.map(Into::into)),
    }
    .insert(db)
    .await?;

    Ok(model.id)
}

pub async fn insert_employment(
    db: &DatabaseConnection,
    person_id: PersonId,
    national_insurance_number: Option<&str>,
) -> Result<EmploymentId, DbErr> {
    let model = employment::ActiveModel {
        id: Set(Uuid::new_v4().into()),
        created_date: Set(get_dummy_date()),
        last_modified: Set(get_dummy_date()),
        person_id: Set(person_id),
        national_insurance_number: Set(national_insurance_number.map(ToOwned::to_owned)),
        normalized_national_insurance_number: Set(
            national_insurance_number.and_then(normalize_national_insurance_number)
        ),
        postcode: Set(Some("SW1A 1AA".to_string())),
    }
    .insert(db)
    .await?;

    Ok(model.id)
}

/// Inserts both directions of a synonym pair.
pub async fn insert_name_synonym_pair(
    db: &DatabaseConnection,
    name: &str,
    synonym: &str,
) -> Result<(), DbErr> {
    for (name, synonym) in [(name, synonym), (synonym, name)] {
        name_synonym::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            name: Set(name.to_owned()),
            synonym: Set(synonym.to_owned()),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

pub async fn setup_test_database() -> DbConn {
    db_conn("sqlite::memory:", true).await.unwrap()
}

pub async fn setup_test_data_layer_and_connection() -> (DataLayer, DbConn) {
    let db = setup_test_database().await;
    (DataLayer::build(db.clone()), db)
}
