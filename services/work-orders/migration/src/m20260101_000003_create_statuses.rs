use sea_orm_migration::prelude::*;

use fieldops_domain::status::{DEFAULT_CATALOG, DEFAULT_COLOR};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Statuses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Statuses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Statuses::Name).string_len(50).not_null())
                    .col(
                        ColumnDef::new(Statuses::Color)
                            .string_len(7)
                            .not_null()
                            .default(DEFAULT_COLOR),
                    )
                    .col(
                        ColumnDef::new(Statuses::SortOrder)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert()
            .into_table(Statuses::Table)
            .columns([Statuses::Name, Statuses::Color, Statuses::SortOrder])
            .to_owned();
        for status in DEFAULT_CATALOG {
            seed.values_panic([
                status.name.into(),
                status.color.into(),
                status.sort_order.into(),
            ]);
        }
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statuses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Statuses {
    Table,
    Id,
    Name,
    Color,
    SortOrder,
}
