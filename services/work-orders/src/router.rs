use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    routing::get,
};

use fieldops_core::health::{healthz, readiness};
use fieldops_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    dashboard::get_dashboard,
    order::{create_order, get_order, list_orders, update_order},
    progress::{create_progress_entry, list_progress_entries},
    report::download_report,
    session::get_session,
    status::list_statuses,
};
use crate::state::AppState;

async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Session
        .route("/session", get(get_session))
        // Orders
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order).patch(update_order))
        .route("/orders/{id}/pdf", get(download_report))
        // Progress log
        .route(
            "/progress-entries",
            get(list_progress_entries).post(create_progress_entry),
        )
        // Read-only views
        .route("/dashboard", get(get_dashboard))
        .route("/statuses", get(list_statuses))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
