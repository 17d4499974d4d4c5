use shared_types::PersonId;
use time::Date;

use super::error::DataLayerError;
use crate::model::person::{Person, PersonRelations};

/// Indexed, read-only access to person records.
///
/// Every lookup takes already-normalized keys (see [`crate::util::normalization`]) and returns
/// each matching person at most once. An empty key list yields an empty result.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait PersonRepository: Send + Sync {
    async fn get_person(
        &self,
        id: &PersonId,
        relations: &PersonRelations,
    ) -> Result<Option<Person>, DataLayerError>;

    async fn get_persons_by_last_name_and_date_of_birth(
        &self,
        last_names: &[String],
        dates_of_birth: &[Date],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError>;

    /// Searches both the person's own NINO and the NINOs of its employment records.
    async fn get_persons_by_national_insurance_number(
        &self,
        national_insurance_numbers: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError>;

    async fn get_persons_by_reference_number(
        &self,
        reference_numbers: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError>;

    async fn get_persons_by_last_name(
        &self,
        last_names: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError>;

    async fn get_persons_by_date_of_birth(
        &self,
        dates_of_birth: &[Date],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError>;

    async fn get_persons_by_email_address(
        &self,
        email_addresses: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError>;
}
