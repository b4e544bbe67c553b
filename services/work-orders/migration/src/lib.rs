use sea_orm_migration::prelude::*;

mod m20260101_000001_create_users;
mod m20260101_000002_create_groups;
mod m20260101_000003_create_statuses;
mod m20260101_000004_create_work_orders;
mod m20260101_000005_create_progress_entries;
mod m20260101_000006_create_progress_attachments;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_users::Migration),
            Box::new(m20260101_000002_create_groups::Migration),
            Box::new(m20260101_000003_create_statuses::Migration),
            Box::new(m20260101_000004_create_work_orders::Migration),
            Box::new(m20260101_000005_create_progress_entries::Migration),
            Box::new(m20260101_000006_create_progress_attachments::Migration),
        ]
    }
}
