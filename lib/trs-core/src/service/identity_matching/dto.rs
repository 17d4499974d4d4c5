use std::collections::BTreeMap;

use shared_types::PersonId;
use strum::{Display, EnumString};
use time::Date;

use crate::model::person::{Gender, Person};

/// Category of evidence shared by a claim and a person record.
///
/// NINO matches from the person record and from employment history collapse into
/// `NationalInsuranceNumber`; first-name matches through a synonym collapse into `FirstName`;
/// primary and hint reference-number matches collapse into `ReferenceNumber`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchedAttribute {
    FirstName,
    MiddleName,
    LastName,
    DateOfBirth,
    NationalInsuranceNumber,
    EmailAddress,
    Gender,
    ReferenceNumber,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchedAttributeValueDTO {
    pub attribute: MatchedAttribute,
    /// Value as held by the person record (or the employment record for NINO matches).
    pub value: String,
}

/// Set of matched categories, each with the literal value that matched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchedAttributes(BTreeMap<MatchedAttribute, String>);

impl MatchedAttributes {
    /// Records a match. The first value recorded for a category is kept.
    pub fn insert(&mut self, attribute: MatchedAttribute, value: impl Into<String>) {
        self.0.entry(attribute).or_insert_with(|| value.into());
    }

    pub fn contains(&self, attribute: MatchedAttribute) -> bool {
        self.0.contains_key(&attribute)
    }

    pub fn value(&self, attribute: MatchedAttribute) -> Option<&str> {
        self.0.get(&attribute).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct matched categories, not counting `Gender`.
    pub fn matched_count(&self) -> usize {
        self.0
            .keys()
            .filter(|attribute| **attribute != MatchedAttribute::Gender)
            .count()
    }

    pub fn attributes(&self) -> impl Iterator<Item = MatchedAttribute> + '_ {
        self.0.keys().copied()
    }
}

impl<V: Into<String>> FromIterator<(MatchedAttribute, V)> for MatchedAttributes {
    fn from_iter<T: IntoIterator<Item = (MatchedAttribute, V)>>(iter: T) -> Self {
        let mut attributes = Self::default();
        for (attribute, value) in iter {
            attributes.insert(attribute, value);
        }
        attributes
    }
}

impl From<MatchedAttributes> for Vec<MatchedAttributeValueDTO> {
    fn from(value: MatchedAttributes) -> Self {
        value
            .0
            .into_iter()
            .map(|(attribute, value)| MatchedAttributeValueDTO { attribute, value })
            .collect()
    }
}

/// Verified assertion from a digital identity provider.
///
/// Each entry of `names` is one full name given as a list of name parts. The order of the parts
/// carries no meaning.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DigitalIdentityClaimDTO {
    pub names: Vec<Vec<String>>,
    pub dates_of_birth: Vec<Date>,
    pub national_insurance_number: Option<String>,
    pub reference_number: Option<String>,
    pub reference_number_hint: Option<String>,
    pub email_address: Option<String>,
    pub gender: Option<Gender>,
}

/// Third-party request to register a person.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationRequestDTO {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    /// Full name as free name parts, matched order-independently.
    pub full_name: Vec<String>,
    pub date_of_birth: Option<Date>,
    pub email_address: Option<String>,
    pub national_insurance_number: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DigitalIdentityMatchOutcome {
    NoMatch,
    Match {
        person_id: PersonId,
        reference_number: String,
        matched_attributes: Vec<MatchedAttributeValueDTO>,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationMatchOutcome {
    NoMatches,
    PotentialMatches { person_ids: Vec<PersonId> },
    DefiniteMatch { person_id: PersonId },
}

/// Entry of a ranked shortlist presented for human triage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchSuggestionDTO {
    pub person_id: PersonId,
    pub reference_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub email_address: Option<String>,
    pub national_insurance_number: Option<String>,
    pub matched_attributes: Vec<MatchedAttributeValueDTO>,
}

/// A candidate person together with the evidence it shares with a claim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PersonMatch {
    pub person: Person,
    pub matched_attributes: MatchedAttributes,
}
