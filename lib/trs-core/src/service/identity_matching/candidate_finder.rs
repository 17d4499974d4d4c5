use itertools::Itertools;
use shared_types::PersonId;
use time::Date;

use super::attribute_matcher::MatchCriteria;
use crate::model::employment::EmploymentRelations;
use crate::model::person::{Person, PersonRelations};
use crate::repository::error::DataLayerError;
use crate::repository::person_repository::PersonRepository;

/// Retrieves candidate persons through the indexed store lookups.
///
/// Lookups with no keys are skipped without touching the store. Employment history is always
/// loaded, since NINO matching consults it.
pub struct CandidateFinder<'a> {
    person_repository: &'a dyn PersonRepository,
}

fn relations() -> PersonRelations {
    PersonRelations {
        employments: Some(EmploymentRelations::default()),
    }
}

impl<'a> CandidateFinder<'a> {
    pub fn new(person_repository: &'a dyn PersonRepository) -> Self {
        Self { person_repository }
    }

    pub async fn by_id(&self, id: &PersonId) -> Result<Option<Person>, DataLayerError> {
        self.person_repository.get_person(id, &relations()).await
    }

    pub async fn by_last_name_and_date_of_birth(
        &self,
        last_names: &[String],
        dates_of_birth: &[Date],
    ) -> Result<Vec<Person>, DataLayerError> {
        if last_names.is_empty() || dates_of_birth.is_empty() {
            return Ok(vec![]);
        }

        let persons = self
            .person_repository
            .get_persons_by_last_name_and_date_of_birth(last_names, dates_of_birth, &relations())
            .await?;
        tracing::debug!(
            "Found {} candidate(s) by last name and date of birth",
            persons.len()
        );

        Ok(persons)
    }

    pub async fn by_last_name(&self, last_names: &[String]) -> Result<Vec<Person>, DataLayerError> {
        if last_names.is_empty() {
            return Ok(vec![]);
        }

        let persons = self
            .person_repository
            .get_persons_by_last_name(last_names, &relations())
            .await?;
        tracing::debug!("Found {} candidate(s) by last name", persons.len());

        Ok(persons)
    }

    pub async fn by_date_of_birth(
        &self,
        dates_of_birth: &[Date],
    ) -> Result<Vec<Person>, DataLayerError> {
        if dates_of_birth.is_empty() {
            return Ok(vec![]);
        }

        let persons = self
            .person_repository
            .get_persons_by_date_of_birth(dates_of_birth, &relations())
            .await?;
        tracing::debug!("Found {} candidate(s) by date of birth", persons.len());

        Ok(persons)
    }

    pub async fn by_national_insurance_number(
        &self,
        national_insurance_numbers: &[String],
    ) -> Result<Vec<Person>, DataLayerError> {
        if national_insurance_numbers.is_empty() {
            return Ok(vec![]);
        }

        let persons = self
            .person_repository
            .get_persons_by_national_insurance_number(national_insurance_numbers, &relations())
            .await?;
        tracing::debug!("Found {} candidate(s) by NINO", persons.len());

        Ok(persons)
    }

    pub async fn by_reference_number(
        &self,
        reference_numbers: &[String],
    ) -> Result<Vec<Person>, DataLayerError> {
        if reference_numbers.is_empty() {
            return Ok(vec![]);
        }

        let persons = self
            .person_repository
            .get_persons_by_reference_number(reference_numbers, &relations())
            .await?;
        tracing::debug!("Found {} candidate(s) by reference number", persons.len());

        Ok(persons)
    }

    pub async fn by_email_address(
        &self,
        email_addresses: &[String],
    ) -> Result<Vec<Person>, DataLayerError> {
        if email_addresses.is_empty() {
            return Ok(vec![]);
        }

        let persons = self
            .person_repository
            .get_persons_by_email_address(email_addresses, &relations())
            .await?;
        tracing::debug!("Found {} candidate(s) by email address", persons.len());

        Ok(persons)
    }

    /// Union of everyone sharing a last name, a date of birth, the NINO or a reference number
    /// with a digital identity claim.
    pub async fn digital_identity_suggestion_candidates(
        &self,
        criteria: &MatchCriteria,
    ) -> Result<Vec<Person>, DataLayerError> {
        let last_names = criteria.last_name_keys();
        let national_insurance_numbers = criteria.national_insurance_number_keys();
        let reference_numbers = criteria.reference_number_keys();

        let (by_last_name, by_date_of_birth, by_national_insurance_number, by_reference_number) =
            futures::try_join!(
                self.by_last_name(&last_names),
                self.by_date_of_birth(&criteria.dates_of_birth),
                self.by_national_insurance_number(&national_insurance_numbers),
                self.by_reference_number(&reference_numbers),
            )?;

        Ok(unique_persons([
            by_last_name,
            by_date_of_birth,
            by_national_insurance_number,
            by_reference_number,
        ]))
    }

    /// Union of everyone sharing the NINO, the email address, a last name or the date of birth
    /// with a registration request.
    ///
    /// No lookup is keyed on first or middle name, so a person who shares only those names with
    /// the request is never retrieved, even though such a match would grade as a potential one.
    pub async fn registration_candidates(
        &self,
        criteria: &MatchCriteria,
    ) -> Result<Vec<Person>, DataLayerError> {
        let last_names = criteria.last_name_keys();
        let national_insurance_numbers = criteria.national_insurance_number_keys();
        let email_addresses = criteria.email_address_keys();

        let (by_national_insurance_number, by_email_address, by_last_name, by_date_of_birth) =
            futures::try_join!(
                self.by_national_insurance_number(&national_insurance_numbers),
                self.by_email_address(&email_addresses),
                self.by_last_name(&last_names),
                self.by_date_of_birth(&criteria.dates_of_birth),
            )?;

        Ok(unique_persons([
            by_national_insurance_number,
            by_email_address,
            by_last_name,
            by_date_of_birth,
        ]))
    }
}

fn unique_persons(groups: impl IntoIterator<Item = Vec<Person>>) -> Vec<Person> {
    groups
        .into_iter()
        .flatten()
        .unique_by(|person| person.id)
        .collect()
}
