use trs_core::model::employment::Employment;
use trs_core::model::person::Person;

use crate::entity::{employment, person};

impl From<person::Model> for Person {
    fn from(value: person::Model) -> Self {
        Self {
            id: value.id,
            reference_number: value.reference_number,
            first_name: value.first_name,
            middle_name: value.middle_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            national_insurance_number: value.national_insurance_number,
            email_address: value.email_address,
            gender: value.gender.map(Into::into),
            employments: None,
        }
    }
}

impl From<employment::Model> for Employment {
    fn from(value: employment::Model) -> Self {
        Self {
            id: value.id,
            person_id: value.person_id,
            national_insurance_number: value.national_insurance_number,
            postcode: value.postcode,
        }
    }
}
