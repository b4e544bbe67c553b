use sea_orm::entity::prelude::*;

/// Work order requested by a client.
///
/// Deleted with its client; supervisor, technician and status are nulled when
/// the referenced row goes away.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub address: String,
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    pub reference_photo: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub client_id: i32,
    pub supervisor_id: Option<i32>,
    pub technician_id: Option<i32>,
    pub status_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::ClientId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SupervisorId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    Supervisor,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TechnicianId",
        to = "super::users::Column::Id",
        on_delete = "SetNull"
    )]
    Technician,
    #[sea_orm(
        belongs_to = "super::statuses::Entity",
        from = "Column::StatusId",
        to = "super::statuses::Column::Id",
        on_delete = "SetNull"
    )]
    Status,
    #[sea_orm(has_many = "super::progress_entries::Entity")]
    ProgressEntries,
}

impl Related<super::statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::progress_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
