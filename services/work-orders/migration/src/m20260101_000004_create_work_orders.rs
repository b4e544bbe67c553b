use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkOrders::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkOrders::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(WorkOrders::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(WorkOrders::Address)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(WorkOrders::StartsAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(WorkOrders::EndsAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(WorkOrders::ReferencePhoto).string_len(255))
                    .col(
                        ColumnDef::new(WorkOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(WorkOrders::ClientId).integer().not_null())
                    .col(ColumnDef::new(WorkOrders::SupervisorId).integer())
                    .col(ColumnDef::new(WorkOrders::TechnicianId).integer())
                    .col(ColumnDef::new(WorkOrders::StatusId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkOrders::Table, WorkOrders::ClientId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkOrders::Table, WorkOrders::SupervisorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkOrders::Table, WorkOrders::TechnicianId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkOrders::Table, WorkOrders::StatusId)
                            .to(Statuses::Table, Statuses::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(WorkOrders::Table)
                    .col(WorkOrders::StatusId)
                    .name("idx_work_orders_status_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(WorkOrders::Table)
                    .col(WorkOrders::TechnicianId)
                    .name("idx_work_orders_technician_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkOrders::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkOrders {
    Table,
    Id,
    Title,
    Description,
    Address,
    StartsAt,
    EndsAt,
    ReferencePhoto,
    CreatedAt,
    ClientId,
    SupervisorId,
    TechnicianId,
    StatusId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Statuses {
    Table,
    Id,
}
