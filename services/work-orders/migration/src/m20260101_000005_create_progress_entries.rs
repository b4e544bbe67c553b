use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressEntries::OrderId).integer().not_null())
                    .col(ColumnDef::new(ProgressEntries::Content).text().not_null())
                    .col(ColumnDef::new(ProgressEntries::Photo).string_len(255))
                    .col(
                        ColumnDef::new(ProgressEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProgressEntries::Table, ProgressEntries::OrderId)
                            .to(WorkOrders::Table, WorkOrders::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ProgressEntries::Table)
                    .col(ProgressEntries::OrderId)
                    .col(ProgressEntries::CreatedAt)
                    .name("idx_progress_entries_order_id_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressEntries::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProgressEntries {
    Table,
    Id,
    OrderId,
    Content,
    Photo,
    CreatedAt,
}

#[derive(Iden)]
enum WorkOrders {
    Table,
    Id,
}
