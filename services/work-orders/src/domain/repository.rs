#![allow(async_fn_in_trait)]

use fieldops_domain::id::{EntryId, OrderId, UserId};
use fieldops_domain::pagination::{PageRequest, Sort};

use crate::domain::types::{
    Actor, Attachment, NewProgressEntry, NewWorkOrder, OrderChanges, PhotoFolder, PhotoUpload,
    ProgressEntry, ReportDocument, Status, StatusTally, WorkOrder,
};
use crate::error::WorkOrdersError;

/// Accounts and their group memberships.
pub trait ActorRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<Actor>, WorkOrdersError>;
}

/// Repository for work orders.
pub trait WorkOrderRepository: Send + Sync {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<WorkOrder>, WorkOrdersError>;

    /// Orders newest first.
    async fn list(&self, page: PageRequest) -> Result<Vec<WorkOrder>, WorkOrdersError>;

    async fn create(&self, order: &NewWorkOrder) -> Result<WorkOrder, WorkOrdersError>;

    /// Apply `changes` verbatim and return the updated order.
    async fn update(
        &self,
        id: OrderId,
        changes: &OrderChanges,
    ) -> Result<WorkOrder, WorkOrdersError>;

    /// Order counts grouped by status label, read in a single statement so
    /// every order lands in exactly one group.
    async fn count_by_status(&self) -> Result<Vec<StatusTally>, WorkOrdersError>;
}

/// Repository for progress entries and their attachments.
///
/// Entry and attachment writes are separate calls with no shared transaction.
pub trait ProgressRepository: Send + Sync {
    /// Insert an entry; the returned entry has no attachments yet.
    async fn create_entry(&self, entry: &NewProgressEntry)
    -> Result<ProgressEntry, WorkOrdersError>;

    async fn create_attachment(
        &self,
        entry_id: EntryId,
        photo: &str,
    ) -> Result<Attachment, WorkOrdersError>;

    /// Entries with their attachments, ordered by creation time (ties by id).
    async fn list(
        &self,
        order_id: Option<OrderId>,
        sort: Sort,
    ) -> Result<Vec<ProgressEntry>, WorkOrdersError>;
}

/// Read access to the status catalog.
pub trait StatusRepository: Send + Sync {
    /// Catalog entries by ascending sort order.
    async fn list(&self) -> Result<Vec<Status>, WorkOrdersError>;
}

/// Port for storing uploaded photos.
pub trait PhotoStore: Send + Sync {
    /// Persist `upload` and return the path to keep on the record.
    async fn save(
        &self,
        folder: PhotoFolder,
        upload: &PhotoUpload,
    ) -> Result<String, WorkOrdersError>;

    /// Delete a photo previously returned by `save`.
    async fn remove(&self, path: &str) -> Result<(), WorkOrdersError>;
}

/// Port for the external report renderer.
pub trait ReportRenderer: Send + Sync {
    /// Render `document` to PDF bytes. No retry is attempted.
    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, WorkOrdersError>;
}
