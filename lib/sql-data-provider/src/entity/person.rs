use one_dto_mapper::{From, Into};
use sea_orm::entity::prelude::*;
use shared_types::PersonId;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "person")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: PersonId,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,
    pub reference_number: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub normalized_last_name: String,
    pub date_of_birth: Option<Date>,
    pub national_insurance_number: Option<String>,
    pub normalized_national_insurance_number: Option<String>,
    pub email_address: Option<String>,
    pub normalized_email_address: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employment::Entity")]
    Employment,
}

impl Related<super::employment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, From, Into)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[from(trs_core::model::person::Gender)]
#[into(trs_core::model::person::Gender)]
pub enum Gender {
    #[sea_orm(string_value = "MALE")]
    Male,
    #[sea_orm(string_value = "FEMALE")]
    Female,
    #[sea_orm(string_value = "OTHER")]
    Other,
    #[sea_orm(string_value = "NOT_AVAILABLE")]
    NotAvailable,
}
