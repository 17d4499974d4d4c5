use autometrics::autometrics;
use itertools::Itertools;
use one_dto_mapper::convert_inner;
use sea_orm::sea_query::Query;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use shared_types::PersonId;
use time::Date;
use trs_core::model::employment::Employment;
use trs_core::model::person::{Person, PersonRelations};
use trs_core::repository::error::DataLayerError;
use trs_core::repository::person_repository::PersonRepository;

use super::PersonProvider;
use crate::entity::{employment, person};
use crate::mapper::to_data_layer_error;

impl PersonProvider {
    async fn find_persons(
        &self,
        condition: Condition,
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        let persons = person::Entity::find()
            .filter(condition)
            .order_by_asc(person::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        self.load_relations(convert_inner(persons), relations).await
    }

    async fn load_relations(
        &self,
        mut persons: Vec<Person>,
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if relations.employments.is_none() || persons.is_empty() {
            return Ok(persons);
        }

        let person_ids = persons.iter().map(|person| person.id).collect::<Vec<_>>();
        let mut employments = employment::Entity::find()
            .filter(employment::Column::PersonId.is_in(person_ids))
            .order_by_asc(employment::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?
            .into_iter()
            .map(Employment::from)
            .into_group_map_by(|employment| employment.person_id);

        for person in &mut persons {
            person.employments = Some(employments.remove(&person.id).unwrap_or_default());
        }

        Ok(persons)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl PersonRepository for PersonProvider {
    async fn get_person(
        &self,
        id: &PersonId,
        relations: &PersonRelations,
    ) -> Result<Option<Person>, DataLayerError> {
        let person = person::Entity::find_by_id(*id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let Some(person) = person else {
            return Ok(None);
        };

        Ok(self
            .load_relations(vec![person.into()], relations)
            .await?
            .pop())
    }

    async fn get_persons_by_last_name_and_date_of_birth(
        &self,
        last_names: &[String],
        dates_of_birth: &[Date],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if last_names.is_empty() || dates_of_birth.is_empty() {
            return Ok(vec![]);
        }

        self.find_persons(
            Condition::all()
                .add(person::Column::NormalizedLastName.is_in(last_names.iter().map(String::as_str)))
                .add(person::Column::DateOfBirth.is_in(dates_of_birth.iter().copied())),
            relations,
        )
        .await
    }

    async fn get_persons_by_national_insurance_number(
        &self,
        national_insurance_numbers: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if national_insurance_numbers.is_empty() {
            return Ok(vec![]);
        }

        let keys = || national_insurance_numbers.iter().map(String::as_str);
        let employment_person_ids = Query::select()
            .column(employment::Column::PersonId)
            .from(employment::Entity)
            .and_where(employment::Column::NormalizedNationalInsuranceNumber.is_in(keys()))
            .to_owned();

        self.find_persons(
            Condition::any()
                .add(person::Column::NormalizedNationalInsuranceNumber.is_in(keys()))
                .add(person::Column::Id.in_subquery(employment_person_ids)),
            relations,
        )
        .await
    }

    async fn get_persons_by_reference_number(
        &self,
        reference_numbers: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if reference_numbers.is_empty() {
            return Ok(vec![]);
        }

        self.find_persons(
            Condition::all().add(
                person::Column::ReferenceNumber.is_in(reference_numbers.iter().map(String::as_str)),
            ),
            relations,
        )
        .await
    }

    async fn get_persons_by_last_name(
        &self,
        last_names: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if last_names.is_empty() {
            return Ok(vec![]);
        }

        self.find_persons(
            Condition::all().add(
                person::Column::NormalizedLastName.is_in(last_names.iter().map(String::as_str)),
            ),
            relations,
        )
        .await
    }

    async fn get_persons_by_date_of_birth(
        &self,
        dates_of_birth: &[Date],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if dates_of_birth.is_empty() {
            return Ok(vec![]);
        }

        self.find_persons(
            Condition::all().add(person::Column::DateOfBirth.is_in(dates_of_birth.iter().copied())),
            relations,
        )
        .await
    }

    async fn get_persons_by_email_address(
        &self,
        email_addresses: &[String],
        relations: &PersonRelations,
    ) -> Result<Vec<Person>, DataLayerError> {
        if email_addresses.is_empty() {
            return Ok(vec![]);
        }

        self.find_persons(
            Condition::all().add(
                person::Column::NormalizedEmailAddress
                    .is_in(email_addresses.iter().map(String::as_str)),
            ),
            relations,
        )
        .await
    }
}
