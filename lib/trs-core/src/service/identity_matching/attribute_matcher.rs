use itertools::Itertools;
use time::Date;

use super::dto::{MatchedAttribute, MatchedAttributes, PersonMatch};
use super::name_alias::NameAliasResolver;
use crate::model::person::{Gender, Person};
use crate::util::normalization::{
    normalize_email_address, normalize_name, normalize_national_insurance_number,
    normalize_reference_number,
};

/// Normalized evidence extracted from a digital identity claim or a registration request.
///
/// Names arrive either as an unordered token set (`name_tokens`) or as structured fields; both
/// forms may be present at once, in which case a name matches if either form agrees.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MatchCriteria {
    pub name_tokens: Vec<String>,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub dates_of_birth: Vec<Date>,
    pub national_insurance_number: Option<String>,
    pub reference_number: Option<String>,
    pub reference_number_hint: Option<String>,
    pub email_address: Option<String>,
    pub gender: Option<Gender>,
}

impl MatchCriteria {
    /// Names that may identify a person's first name; their synonyms are needed for matching.
    pub fn first_name_keys(&self) -> Vec<String> {
        self.first_name
            .iter()
            .chain(&self.name_tokens)
            .cloned()
            .unique()
            .collect()
    }

    /// Keys for last name lookups.
    pub fn last_name_keys(&self) -> Vec<String> {
        self.last_name
            .iter()
            .chain(&self.name_tokens)
            .cloned()
            .unique()
            .collect()
    }

    /// Keys for reference number lookups: the primary reference and the hint.
    pub fn reference_number_keys(&self) -> Vec<String> {
        self.reference_number
            .iter()
            .chain(&self.reference_number_hint)
            .cloned()
            .unique()
            .collect()
    }

    pub fn national_insurance_number_keys(&self) -> Vec<String> {
        self.national_insurance_number.iter().cloned().collect()
    }

    pub fn email_address_keys(&self) -> Vec<String> {
        self.email_address.iter().cloned().collect()
    }

    pub fn has_names(&self) -> bool {
        !self.name_tokens.is_empty()
            || self.first_name.is_some()
            || self.middle_name.is_some()
            || self.last_name.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_names()
            && self.dates_of_birth.is_empty()
            && self.national_insurance_number.is_none()
            && self.reference_number.is_none()
            && self.reference_number_hint.is_none()
            && self.email_address.is_none()
            && self.gender.is_none()
    }
}

/// Compares a claim against one person record, category by category.
pub struct AttributeMatcher<'a> {
    aliases: &'a NameAliasResolver,
}

impl<'a> AttributeMatcher<'a> {
    pub fn new(aliases: &'a NameAliasResolver) -> Self {
        Self { aliases }
    }

    pub fn evaluate(&self, criteria: &MatchCriteria, person: Person) -> PersonMatch {
        let matched_attributes = self.match_person(criteria, &person);
        PersonMatch {
            person,
            matched_attributes,
        }
    }

    /// Categories on which `criteria` and `person` agree, each with the value held by the record.
    pub fn match_person(&self, criteria: &MatchCriteria, person: &Person) -> MatchedAttributes {
        let mut matched = MatchedAttributes::default();

        if self.first_name_matches(criteria, &person.first_name) {
            matched.insert(MatchedAttribute::FirstName, &person.first_name);
        }

        if let Some(middle_name) = &person.middle_name
            && name_matches(criteria, criteria.middle_name.as_deref(), middle_name)
        {
            matched.insert(MatchedAttribute::MiddleName, middle_name);
        }

        if name_matches(criteria, criteria.last_name.as_deref(), &person.last_name) {
            matched.insert(MatchedAttribute::LastName, &person.last_name);
        }

        if let Some(date_of_birth) = person.date_of_birth
            && criteria.dates_of_birth.contains(&date_of_birth)
        {
            matched.insert(MatchedAttribute::DateOfBirth, date_of_birth.to_string());
        }

        if let Some(national_insurance_number) =
            matching_national_insurance_number(criteria, person)
        {
            matched.insert(
                MatchedAttribute::NationalInsuranceNumber,
                national_insurance_number,
            );
        }

        if let Some(reference_number) = normalize_reference_number(&person.reference_number)
            && (criteria.reference_number.as_ref() == Some(&reference_number)
                || criteria.reference_number_hint.as_ref() == Some(&reference_number))
        {
            matched.insert(MatchedAttribute::ReferenceNumber, &person.reference_number);
        }

        if let Some(email_address) = &person.email_address
            && criteria.email_address.is_some()
            && normalize_email_address(email_address) == criteria.email_address
        {
            matched.insert(MatchedAttribute::EmailAddress, email_address);
        }

        // NotAvailable records an unknown gender, so it never agrees with anything
        if let Some(gender) = person.gender
            && gender != Gender::NotAvailable
            && criteria.gender == Some(gender)
        {
            matched.insert(MatchedAttribute::Gender, gender.to_string());
        }

        matched
    }

    fn first_name_matches(&self, criteria: &MatchCriteria, first_name: &str) -> bool {
        criteria
            .first_name
            .iter()
            .chain(&criteria.name_tokens)
            .any(|claimed| self.aliases.is_equivalent(claimed, first_name))
    }
}

fn name_matches(criteria: &MatchCriteria, structured: Option<&str>, stored: &str) -> bool {
    let Some(stored) = normalize_name(stored) else {
        return false;
    };

    structured == Some(stored.as_str()) || criteria.name_tokens.contains(&stored)
}

/// The person's own NINO takes precedence over the NINOs of its employment history.
fn matching_national_insurance_number<'p>(
    criteria: &MatchCriteria,
    person: &'p Person,
) -> Option<&'p str> {
    let claimed = criteria.national_insurance_number.as_ref()?;
    let matches = |value: &Option<String>| {
        value
            .as_deref()
            .and_then(normalize_national_insurance_number)
            .is_some_and(|value| &value == claimed)
    };

    if matches(&person.national_insurance_number) {
        return person.national_insurance_number.as_deref();
    }

    person
        .employments
        .iter()
        .flatten()
        .find(|employment| matches(&employment.national_insurance_number))
        .and_then(|employment| employment.national_insurance_number.as_deref())
}
