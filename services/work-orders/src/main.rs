use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use fieldops_core::tracing::init_tracing;
use fieldops_work_orders::config::WorkOrdersConfig;
use fieldops_work_orders::lock::OrderLocks;
use fieldops_work_orders::router::build_router;
use fieldops_work_orders::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("info,sqlx=warn");

    let config = WorkOrdersConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        db: Arc::new(db),
        locks: OrderLocks::new(),
        media_root: config.media_root,
        http: reqwest::Client::new(),
        renderer_url: config.renderer_url,
        logo_path: config.logo_path,
        max_upload_bytes: config.max_upload_bytes,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("work-orders service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
