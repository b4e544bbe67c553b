use sea_orm_migration::prelude::*;

use fieldops_domain::role::{SUPERVISOR_GROUP, TECHNICIAN_GROUPS};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Groups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Groups::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Groups::Name)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserGroups::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserGroups::UserId).integer().not_null())
                    .col(ColumnDef::new(UserGroups::GroupId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(UserGroups::UserId)
                            .col(UserGroups::GroupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserGroups::Table, UserGroups::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserGroups::Table, UserGroups::GroupId)
                            .to(Groups::Table, Groups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Seed the two staff groups; the first technician name is the canonical one.
        let seed = Query::insert()
            .into_table(Groups::Table)
            .columns([Groups::Name])
            .values_panic([SUPERVISOR_GROUP.into()])
            .values_panic([TECHNICIAN_GROUPS[0].into()])
            .on_conflict(OnConflict::column(Groups::Name).do_nothing().to_owned())
            .to_owned();
        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Groups::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Groups {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum UserGroups {
    Table,
    UserId,
    GroupId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
