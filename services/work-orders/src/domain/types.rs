use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use fieldops_domain::id::{AttachmentId, EntryId, OrderId, StatusId, UserId};
use fieldops_domain::role::Role;

/// Authenticated actor as loaded from the account and membership tables.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub is_superuser: bool,
    pub groups: Vec<String>,
}

/// Resolved identity of the caller of a request.
///
/// Gates only look at `user_id` and `role`; the rest is reported back to clients.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub username: String,
    pub email: String,
    pub user_id: UserId,
    pub display_name: String,
    pub role: Role,
}

/// Status catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    pub color: String,
    pub sort_order: i32,
}

/// Reference to a user with the name shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRef {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkOrder {
    pub id: OrderId,
    pub title: String,
    pub description: String,
    pub address: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub reference_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub client: UserRef,
    pub supervisor: Option<UserRef>,
    pub technician: Option<UserRef>,
    pub status: Option<Status>,
}

impl WorkOrder {
    pub fn status_name(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.name.as_str())
    }

    pub fn supervisor_id(&self) -> Option<UserId> {
        self.supervisor.as_ref().map(|u| u.id)
    }

    pub fn technician_id(&self) -> Option<UserId> {
        self.technician.as_ref().map(|u| u.id)
    }
}

/// Work order about to be inserted.
#[derive(Debug, Clone)]
pub struct NewWorkOrder {
    pub title: String,
    pub description: String,
    pub address: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub reference_photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub client_id: UserId,
    pub supervisor_id: Option<UserId>,
    pub technician_id: Option<UserId>,
    pub status_id: Option<StatusId>,
}

/// Partial update of a work order.
///
/// `None` leaves a field unchanged; for nullable fields `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct OrderChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub starts_at: Option<Option<DateTime<Utc>>>,
    pub ends_at: Option<Option<DateTime<Utc>>>,
    pub client_id: Option<UserId>,
    pub supervisor_id: Option<Option<UserId>>,
    pub technician_id: Option<Option<UserId>>,
    pub status_id: Option<Option<StatusId>>,
}

impl OrderChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.starts_at.is_none()
            && self.ends_at.is_none()
            && self.client_id.is_none()
            && self.supervisor_id.is_none()
            && self.technician_id.is_none()
            && self.status_id.is_none()
    }
}

/// Photo bound to a progress entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub id: AttachmentId,
    pub entry_id: EntryId,
    pub photo: String,
}

/// Progress log entry together with its attachments.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressEntry {
    pub id: EntryId,
    pub order_id: OrderId,
    pub content: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub attachments: Vec<Attachment>,
}

/// Progress entry about to be inserted.
#[derive(Debug, Clone)]
pub struct NewProgressEntry {
    pub order_id: OrderId,
    pub content: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Uploaded photo file, not yet stored.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Storage area of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoFolder {
    /// Reference photos of work orders.
    Orders,
    /// Photos of progress entries and their attachments.
    Progress,
}

impl PhotoFolder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orders => "orders",
            Self::Progress => "progress",
        }
    }
}

/// Payload handed to the report renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub order: WorkOrder,
    /// Oldest first.
    pub entries: Vec<ProgressEntry>,
    pub logo_path: String,
}

/// Rendered report ready for download.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Number of orders sharing one status label; `None` groups orders without status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusTally {
    pub status: Option<String>,
    pub orders: u64,
}

/// Order counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardCounts {
    pub total: u64,
    pub pending: u64,
    pub in_progress: u64,
    pub finalized: u64,
}

/// File name of the downloadable report of an order.
pub fn report_file_name(order_id: OrderId) -> String {
    format!("Reporte_Orden_{order_id}.pdf")
}
