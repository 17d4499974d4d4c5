use shared_types::{EmploymentId, PersonId};
use time::macros::date;
use uuid::Uuid;

use crate::model::employment::Employment;
use crate::model::person::{Gender, Person};

pub fn dummy_person() -> Person {
    Person {
        id: Uuid::new_v4().into(),
        reference_number: "1234567".to_string(),
        first_name: "Amelia".to_string(),
        middle_name: None,
        last_name: "Smith".to_string(),
        date_of_birth: Some(date!(1990 - 01 - 01)),
        national_insurance_number: Some("QQ123456C".to_string()),
        email_address: Some("amelia.smith@example.com".to_string()),
        gender: Some(Gender::Female),
        employments: Some(vec![]),
    }
}

pub fn dummy_person_with_id(id: u128) -> Person {
    Person {
        id: Uuid::from_u128(id).into(),
        ..dummy_person()
    }
}

pub fn dummy_employment(person_id: PersonId, national_insurance_number: Option<&str>) -> Employment {
    Employment {
        id: EmploymentId::from(Uuid::new_v4()),
        person_id,
        national_insurance_number: national_insurance_number.map(ToOwned::to_owned),
        postcode: None,
    }
}
