use sea_orm::entity::prelude::*;

/// Extra photo bound to a progress entry; written after the entry itself.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "progress_attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub entry_id: i32,
    pub photo: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::progress_entries::Entity",
        from = "Column::EntryId",
        to = "super::progress_entries::Column::Id",
        on_delete = "Cascade"
    )]
    Entry,
}

impl Related<super::progress_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
