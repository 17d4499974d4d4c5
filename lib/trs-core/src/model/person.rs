use serde::{Deserialize, Serialize};
use shared_types::PersonId;
use strum::{Display, EnumString};
use time::Date;

use super::employment::{Employment, EmploymentRelations};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    NotAvailable,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub reference_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub national_insurance_number: Option<String>,
    pub email_address: Option<String>,
    pub gender: Option<Gender>,

    // Relations:
    pub employments: Option<Vec<Employment>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct PersonRelations {
    pub employments: Option<EmploymentRelations>,
}
