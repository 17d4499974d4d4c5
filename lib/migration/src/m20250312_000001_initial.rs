use sea_orm_migration::prelude::*;

use crate::datatype::{timestamp, uuid_char};

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_PERSON_REFERENCE_NUMBER_INDEX: &str = "index-Person-ReferenceNumber-Unique";
const PERSON_LAST_NAME_DATE_OF_BIRTH_INDEX: &str = "index-Person-NormalizedLastName-DateOfBirth";
const PERSON_DATE_OF_BIRTH_INDEX: &str = "index-Person-DateOfBirth";
const PERSON_NINO_INDEX: &str = "index-Person-NormalizedNationalInsuranceNumber";
const EMPLOYMENT_NINO_INDEX: &str = "index-Employment-NormalizedNationalInsuranceNumber";
const EMPLOYMENT_PERSON_ID_INDEX: &str = "index-Employment-PersonId";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(uuid_char(Person::Id).primary_key())
                    .col(timestamp(Person::CreatedDate, manager))
                    .col(timestamp(Person::LastModified, manager))
                    .col(ColumnDef::new(Person::ReferenceNumber).string().not_null())
                    .col(ColumnDef::new(Person::FirstName).string().not_null())
                    .col(ColumnDef::new(Person::MiddleName).string().null())
                    .col(ColumnDef::new(Person::LastName).string().not_null())
                    .col(
                        ColumnDef::new(Person::NormalizedLastName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Person::DateOfBirth).date().null())
                    .col(
                        ColumnDef::new(Person::NationalInsuranceNumber)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Person::NormalizedNationalInsuranceNumber)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Person::EmailAddress).string().null())
                    .col(ColumnDef::new(Person::Gender).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_PERSON_REFERENCE_NUMBER_INDEX)
                    .table(Person::Table)
                    .col(Person::ReferenceNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(PERSON_LAST_NAME_DATE_OF_BIRTH_INDEX)
                    .table(Person::Table)
                    .col(Person::NormalizedLastName)
                    .col(Person::DateOfBirth)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(PERSON_DATE_OF_BIRTH_INDEX)
                    .table(Person::Table)
                    .col(Person::DateOfBirth)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(PERSON_NINO_INDEX)
                    .table(Person::Table)
                    .col(Person::NormalizedNationalInsuranceNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employment::Table)
                    .if_not_exists()
                    .col(uuid_char(Employment::Id).primary_key())
                    .col(timestamp(Employment::CreatedDate, manager))
                    .col(timestamp(Employment::LastModified, manager))
                    .col(uuid_char(Employment::PersonId))
                    .col(
                        ColumnDef::new(Employment::NationalInsuranceNumber)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Employment::NormalizedNationalInsuranceNumber)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(Employment::Postcode).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-Employment-PersonId")
                            .from_tbl(Employment::Table)
                            .from_col(Employment::PersonId)
                            .to_tbl(Person::Table)
                            .to_col(Person::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(EMPLOYMENT_NINO_INDEX)
                    .table(Employment::Table)
                    .col(Employment::NormalizedNationalInsuranceNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(EMPLOYMENT_PERSON_ID_INDEX)
                    .table(Employment::Table)
                    .col(Employment::PersonId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Person {
    Table,
    Id,
    CreatedDate,
    LastModified,
    ReferenceNumber,
    FirstName,
    MiddleName,
    LastName,
    NormalizedLastName,
    DateOfBirth,
    NationalInsuranceNumber,
    NormalizedNationalInsuranceNumber,
    EmailAddress,
    Gender,
}

#[derive(DeriveIden)]
enum Employment {
    Table,
    Id,
    CreatedDate,
    LastModified,
    PersonId,
    NationalInsuranceNumber,
    NormalizedNationalInsuranceNumber,
    Postcode,
}
