use sea_orm_migration::prelude::*;

use crate::m20250312_000001_initial::Person;

#[derive(DeriveMigrationName)]
pub struct Migration;

const PERSON_EMAIL_ADDRESS_INDEX: &str = "index-Person-NormalizedEmailAddress";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Person::Table)
                    .add_column(
                        ColumnDef::new(NormalizedEmailAddress::NormalizedEmailAddress)
                            .string()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        // NULLIF(LOWER(TRIM(email_address)), ''): blank addresses stay absent
        let normalized = Func::cust(Alias::new("NULLIF"))
            .arg(Func::lower(
                Func::cust(Alias::new("TRIM")).arg(Expr::col(Person::EmailAddress)),
            ))
            .arg("");

        manager
            .exec_stmt(
                Query::update()
                    .table(Person::Table)
                    .value(NormalizedEmailAddress::NormalizedEmailAddress, normalized)
                    .and_where(Expr::col(Person::EmailAddress).is_not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(PERSON_EMAIL_ADDRESS_INDEX)
                    .table(Person::Table)
                    .col(NormalizedEmailAddress::NormalizedEmailAddress)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(PERSON_EMAIL_ADDRESS_INDEX)
                    .table(Person::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Person::Table)
                    .drop_column(NormalizedEmailAddress::NormalizedEmailAddress)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum NormalizedEmailAddress {
    NormalizedEmailAddress,
}
