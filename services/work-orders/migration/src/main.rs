use sea_orm_migration::prelude::*;

use fieldops_work_orders_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
