use one_dto_mapper::{From, Into, convert_inner};
use serde::{Deserialize, Serialize};
use shared_types::PersonId;
use time::Date;
use trs_core::model::person::Gender;
use trs_core::service::identity_matching::dto::{
    DigitalIdentityClaimDTO, MatchSuggestionDTO, MatchedAttribute, MatchedAttributeValueDTO,
    RegistrationRequestDTO,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, From, Into)]
#[from(Gender)]
#[into(Gender)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GenderRestEnum {
    Male,
    Female,
    Other,
    NotAvailable,
}

/// Verified assertion of a digital identity provider, as read from a claim file.
#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(DigitalIdentityClaimDTO)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DigitalIdentityClaimRestDTO {
    /// Each entry is one full name, given as unordered name parts.
    #[serde(default)]
    pub names: Vec<Vec<String>>,
    #[serde(default)]
    pub dates_of_birth: Vec<Date>,
    pub national_insurance_number: Option<String>,
    pub reference_number: Option<String>,
    pub reference_number_hint: Option<String>,
    pub email_address: Option<String>,
    #[into(with_fn = convert_inner)]
    pub gender: Option<GenderRestEnum>,
}

#[derive(Clone, Debug, Default, Deserialize, Into)]
#[into(RegistrationRequestDTO)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationRequestRestDTO {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Vec<String>,
    pub date_of_birth: Option<Date>,
    pub email_address: Option<String>,
    pub national_insurance_number: Option<String>,
    #[into(with_fn = convert_inner)]
    pub gender: Option<GenderRestEnum>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, From)]
#[from(MatchedAttribute)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchedAttributeRestEnum {
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    NationalInsuranceNumber,
    EmailAddress,
    Gender,
    ReferenceNumber,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, From)]
#[from(MatchedAttributeValueDTO)]
#[serde(rename_all = "camelCase")]
pub struct MatchedAttributeValueRestDTO {
    pub attribute: MatchedAttributeRestEnum,
    pub value: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigitalIdentityMatchOutcomeRestDTO {
    NoMatch,
    #[serde(rename_all = "camelCase")]
    Match {
        person_id: PersonId,
        reference_number: String,
        matched_attributes: Vec<MatchedAttributeValueRestDTO>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationMatchOutcomeRestDTO {
    NoMatches,
    #[serde(rename_all = "camelCase")]
    PotentialMatches { person_ids: Vec<PersonId> },
    #[serde(rename_all = "camelCase")]
    DefiniteMatch { person_id: PersonId },
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, From)]
#[from(MatchSuggestionDTO)]
#[serde(rename_all = "camelCase")]
pub struct MatchSuggestionRestDTO {
    pub person_id: PersonId,
    pub reference_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub email_address: Option<String>,
    pub national_insurance_number: Option<String>,
    #[from(with_fn = convert_inner)]
    pub matched_attributes: Vec<MatchedAttributeValueRestDTO>,
}
