use axum::{
    Json,
    extract::{
        Multipart, Path, Query, State,
        multipart::MultipartRejection,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldops_auth_types::identity::IdentityHeaders;
use fieldops_domain::id::{OrderId, StatusId, UserId};
use fieldops_domain::pagination::PageRequest;

use crate::domain::types::{OrderChanges, Status, WorkOrder};
use crate::error::WorkOrdersError;
use crate::handlers::form::FormData;
use crate::handlers::resolve_caller;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListOrdersUseCase, UpdateOrderUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub id: StatusId,
    pub name: String,
    pub color: String,
    pub sort_order: i32,
}

impl From<Status> for StatusResponse {
    fn from(status: Status) -> Self {
        Self {
            id: status.id,
            name: status.name,
            color: status.color,
            sort_order: status.sort_order,
        }
    }
}

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: OrderId,
    pub title: String,
    pub description: String,
    pub address: String,
    #[serde(serialize_with = "fieldops_core::serde::to_rfc3339_ms_opt")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "fieldops_core::serde::to_rfc3339_ms_opt")]
    pub ends_at: Option<DateTime<Utc>>,
    pub reference_photo: Option<String>,
    #[serde(serialize_with = "fieldops_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub client: UserId,
    pub client_name: String,
    pub supervisor: Option<UserId>,
    pub supervisor_name: Option<String>,
    pub technician: Option<UserId>,
    pub technician_name: Option<String>,
    pub status: Option<StatusId>,
    pub status_data: Option<StatusResponse>,
}

impl From<WorkOrder> for OrderResponse {
    fn from(order: WorkOrder) -> Self {
        let (supervisor, supervisor_name) = order.supervisor.map(|u| (u.id, u.username)).unzip();
        let (technician, technician_name) = order.technician.map(|u| (u.id, u.username)).unzip();
        Self {
            id: order.id,
            title: order.title,
            description: order.description,
            address: order.address,
            starts_at: order.starts_at,
            ends_at: order.ends_at,
            reference_photo: order.reference_photo,
            created_at: order.created_at,
            client: order.client.id,
            client_name: order.client.username,
            supervisor,
            supervisor_name,
            technician,
            technician_name,
            status: order.status.as_ref().map(|s| s.id),
            status_data: order.status.map(StatusResponse::from),
        }
    }
}

// ── GET /orders ──────────────────────────────────────────────────────────────

pub async fn list_orders(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<Vec<OrderResponse>>, WorkOrdersError> {
    let Query(page) = page?;
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    let orders = usecase.execute(page).await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

// ── GET /orders/{id} ─────────────────────────────────────────────────────────

pub async fn get_order(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
) -> Result<Json<OrderResponse>, WorkOrdersError> {
    let Path(id) = id?;
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(id).await?;
    Ok(Json(order.into()))
}

// ── POST /orders ─────────────────────────────────────────────────────────────

pub async fn create_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<OrderResponse>), WorkOrdersError> {
    let caller = resolve_caller(&state, identity).await?;
    let mut form = FormData::read(multipart?).await?;
    let input = CreateOrderInput {
        title: form.required("title")?.to_owned(),
        description: form.text("description").unwrap_or_default().to_owned(),
        address: form.text("address").unwrap_or_default().to_owned(),
        starts_at: form.parse("starts_at")?,
        ends_at: form.parse("ends_at")?,
        client_id: form.parse("client")?.ok_or(WorkOrdersError::MissingData)?,
        supervisor_id: form.parse("supervisor")?,
        technician_id: form.parse("technician")?,
        status_id: form.parse("status")?,
        reference_photo: form.take_file("reference_photo"),
    };
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
        photos: state.photo_store(),
    };
    let order = usecase.execute(&caller, input).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

// ── PATCH /orders/{id} ───────────────────────────────────────────────────────

/// Partial update. Absent keys are left unchanged; `null` clears a nullable field.
#[derive(Deserialize)]
pub struct UpdateOrderRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "fieldops_core::serde::double_option")]
    pub starts_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "fieldops_core::serde::double_option")]
    pub ends_at: Option<Option<DateTime<Utc>>>,
    pub client: Option<UserId>,
    #[serde(default, deserialize_with = "fieldops_core::serde::double_option")]
    pub supervisor: Option<Option<UserId>>,
    #[serde(default, deserialize_with = "fieldops_core::serde::double_option")]
    pub technician: Option<Option<UserId>>,
    #[serde(default, deserialize_with = "fieldops_core::serde::double_option")]
    pub status: Option<Option<StatusId>>,
}

impl From<UpdateOrderRequest> for OrderChanges {
    fn from(body: UpdateOrderRequest) -> Self {
        Self {
            title: body.title,
            description: body.description,
            address: body.address,
            starts_at: body.starts_at,
            ends_at: body.ends_at,
            client_id: body.client,
            supervisor_id: body.supervisor,
            technician_id: body.technician,
            status_id: body.status,
        }
    }
}

pub async fn update_order(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    id: Result<Path<OrderId>, PathRejection>,
    body: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderResponse>, WorkOrdersError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let caller = resolve_caller(&state, identity).await?;
    let usecase = UpdateOrderUseCase {
        repo: state.order_repo(),
        locks: state.locks.clone(),
    };
    let order = usecase.execute(&caller, id, body.into()).await?;
    Ok(Json(order.into()))
}
