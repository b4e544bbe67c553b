use axum::{
    Json,
    extract::{
        Multipart, Query, State, multipart::MultipartRejection, rejection::QueryRejection,
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fieldops_auth_types::identity::IdentityHeaders;
use fieldops_domain::id::{AttachmentId, EntryId, OrderId};

use crate::domain::types::{Attachment, ProgressEntry};
use crate::error::WorkOrdersError;
use crate::handlers::form::FormData;
use crate::handlers::resolve_caller;
use crate::state::AppState;
use crate::usecase::progress::{
    CreateProgressEntryInput, CreateProgressEntryUseCase, ListProgressEntriesUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct AttachmentResponse {
    pub id: AttachmentId,
    pub photo: String,
}

impl From<Attachment> for AttachmentResponse {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id,
            photo: attachment.photo,
        }
    }
}

#[derive(Serialize)]
pub struct ProgressEntryResponse {
    pub id: EntryId,
    pub order: OrderId,
    pub content: String,
    pub photo: Option<String>,
    #[serde(serialize_with = "fieldops_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    pub attachments: Vec<AttachmentResponse>,
}

impl From<ProgressEntry> for ProgressEntryResponse {
    fn from(entry: ProgressEntry) -> Self {
        Self {
            id: entry.id,
            order: entry.order_id,
            content: entry.content,
            photo: entry.photo,
            created_at: entry.created_at,
            attachments: entry
                .attachments
                .into_iter()
                .map(AttachmentResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
pub struct CreatedProgressEntryResponse {
    #[serde(flatten)]
    pub entry: ProgressEntryResponse,
    /// File names of attachments that were not stored. The entry itself was.
    pub failed_attachments: Vec<String>,
}

// ── GET /progress-entries ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ProgressListQuery {
    pub order: Option<OrderId>,
}

pub async fn list_progress_entries(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    query: Result<Query<ProgressListQuery>, QueryRejection>,
) -> Result<Json<Vec<ProgressEntryResponse>>, WorkOrdersError> {
    let Query(query) = query?;
    let usecase = ListProgressEntriesUseCase {
        repo: state.progress_repo(),
    };
    let entries = usecase.execute(query.order).await?;
    Ok(Json(
        entries
            .into_iter()
            .map(ProgressEntryResponse::from)
            .collect(),
    ))
}

// ── POST /progress-entries ───────────────────────────────────────────────────

pub async fn create_progress_entry(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<CreatedProgressEntryResponse>), WorkOrdersError> {
    let caller = resolve_caller(&state, identity).await?;
    let mut form = FormData::read(multipart?).await?;
    let input = CreateProgressEntryInput {
        order_id: form.parse("order")?.ok_or(WorkOrdersError::MissingData)?,
        content: form.required("content")?.to_owned(),
        photo: form.take_file("photo"),
        attachments: form.take_files("attachments"),
    };
    let usecase = CreateProgressEntryUseCase {
        orders: state.order_repo(),
        repo: state.progress_repo(),
        photos: state.photo_store(),
        locks: state.locks.clone(),
    };
    let created = usecase.execute(&caller, input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedProgressEntryResponse {
            entry: created.entry.into(),
            failed_attachments: created.failed_attachments,
        }),
    ))
}
