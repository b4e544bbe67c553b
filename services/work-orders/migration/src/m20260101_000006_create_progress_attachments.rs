use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressAttachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressAttachments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ProgressAttachments::EntryId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProgressAttachments::Photo)
                            .string_len(255)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ProgressAttachments::Table, ProgressAttachments::EntryId)
                            .to(ProgressEntries::Table, ProgressEntries::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(ProgressAttachments::Table)
                    .col(ProgressAttachments::EntryId)
                    .name("idx_progress_attachments_entry_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressAttachments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProgressAttachments {
    Table,
    Id,
    EntryId,
    Photo,
}

#[derive(Iden)]
enum ProgressEntries {
    Table,
    Id,
}
