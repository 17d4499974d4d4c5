use sea_orm_migration::prelude::*;

use crate::datatype::uuid_char;

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIQUE_NAME_SYNONYM_INDEX: &str = "index-NameSynonym-Name-Synonym-Unique";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NameSynonym::Table)
                    .if_not_exists()
                    .col(uuid_char(NameSynonym::Id).primary_key())
                    .col(ColumnDef::new(NameSynonym::Name).string().not_null())
                    .col(ColumnDef::new(NameSynonym::Synonym).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Both directions of a pair are stored as separate rows.
        manager
            .create_index(
                Index::create()
                    .name(UNIQUE_NAME_SYNONYM_INDEX)
                    .table(NameSynonym::Table)
                    .col(NameSynonym::Name)
                    .col(NameSynonym::Synonym)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NameSynonym::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NameSynonym {
    Table,
    Id,
    Name,
    Synonym,
}
