//! Create `ice_cream` table.
//!
//! `id` is a serial key; the text columns are nullable because an update
//! replaces every field and may clear them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(IceCream::Table)
                    .if_not_exists()
                    .col(pk_auto(IceCream::Id))
                    .col(string_null(IceCream::Name))
                    .col(string_null(IceCream::Flavor))
                    .col(string_null(IceCream::Category))
                    .col(boolean(IceCream::DairyFree).default(false))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_ice_cream_dairy_free")
                    .table(IceCream::Table)
                    .col(IceCream::DairyFree)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(IceCream::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum IceCream { Table, Id, Name, Flavor, Category, DairyFree }
