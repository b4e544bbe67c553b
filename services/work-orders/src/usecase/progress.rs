use chrono::Utc;

use fieldops_domain::id::OrderId;
use fieldops_domain::pagination::Sort;

use crate::domain::policy::gate_progress_entry;
use crate::domain::repository::{PhotoStore, ProgressRepository, WorkOrderRepository};
use crate::domain::types::{
    Attachment, Identity, NewProgressEntry, PhotoFolder, PhotoUpload, ProgressEntry,
};
use crate::error::WorkOrdersError;
use crate::lock::OrderLocks;
use crate::usecase::discard_photo;

// ── ListProgressEntries ──────────────────────────────────────────────────────

pub struct ListProgressEntriesUseCase<R: ProgressRepository> {
    pub repo: R,
}

impl<R: ProgressRepository> ListProgressEntriesUseCase<R> {
    /// Entries newest first, optionally restricted to one order.
    pub async fn execute(
        &self,
        order_id: Option<OrderId>,
    ) -> Result<Vec<ProgressEntry>, WorkOrdersError> {
        self.repo.list(order_id, Sort::Desc).await
    }
}

// ── CreateProgressEntry ──────────────────────────────────────────────────────

pub struct CreateProgressEntryInput {
    pub order_id: OrderId,
    pub content: String,
    pub photo: Option<PhotoUpload>,
    pub attachments: Vec<PhotoUpload>,
}

/// Entry as persisted, plus the file names of attachments that could not be stored.
#[derive(Debug)]
pub struct CreatedProgressEntry {
    pub entry: ProgressEntry,
    pub failed_attachments: Vec<String>,
}

pub struct CreateProgressEntryUseCase<O, R, P>
where
    O: WorkOrderRepository,
    R: ProgressRepository,
    P: PhotoStore,
{
    pub orders: O,
    pub repo: R,
    pub photos: P,
    pub locks: OrderLocks,
}

impl<O, R, P> CreateProgressEntryUseCase<O, R, P>
where
    O: WorkOrderRepository,
    R: ProgressRepository,
    P: PhotoStore,
{
    pub async fn execute(
        &self,
        caller: &Identity,
        input: CreateProgressEntryInput,
    ) -> Result<CreatedProgressEntry, WorkOrdersError> {
        if input.content.trim().is_empty() {
            return Err(WorkOrdersError::MissingData);
        }

        let _guard = self.locks.acquire(input.order_id).await;
        let order = self
            .orders
            .find_by_id(input.order_id)
            .await?
            .ok_or(WorkOrdersError::OrderNotFound)?;
        gate_progress_entry(&caller.role, order.status_name()).inspect_err(|denial| {
            tracing::info!(
                order_id = %order.id,
                user_id = %caller.user_id,
                role = caller.role.label(),
                status = order.status_name().unwrap_or("-"),
                %denial,
                "progress entry denied"
            );
        })?;

        let photo = match &input.photo {
            Some(upload) => Some(self.photos.save(PhotoFolder::Progress, upload).await?),
            None => None,
        };
        let created = self
            .repo
            .create_entry(&NewProgressEntry {
                order_id: order.id,
                content: input.content,
                photo: photo.clone(),
                created_at: Utc::now(),
            })
            .await;
        let mut entry = match created {
            Ok(entry) => entry,
            Err(e) => {
                if let Some(path) = &photo {
                    discard_photo(&self.photos, path).await;
                }
                return Err(e);
            }
        };

        // Attachments are written one by one after the entry. The first failure
        // ends the sequence; what was stored stays, the rest is reported.
        let mut failed_attachments = Vec::new();
        for (idx, upload) in input.attachments.iter().enumerate() {
            match self.store_attachment(&entry, upload).await {
                Ok(attachment) => entry.attachments.push(attachment),
                Err(e) => {
                    tracing::warn!(
                        entry_id = %entry.id,
                        file_name = %upload.file_name,
                        error = %e,
                        skipped = input.attachments.len() - idx - 1,
                        "attachment not stored"
                    );
                    failed_attachments.extend(
                        input.attachments[idx..].iter().map(|u| u.file_name.clone()),
                    );
                    break;
                }
            }
        }

        tracing::info!(
            entry_id = %entry.id,
            order_id = %order.id,
            attachments = entry.attachments.len(),
            failed = failed_attachments.len(),
            "progress entry created"
        );
        Ok(CreatedProgressEntry {
            entry,
            failed_attachments,
        })
    }

    async fn store_attachment(
        &self,
        entry: &ProgressEntry,
        upload: &PhotoUpload,
    ) -> Result<Attachment, WorkOrdersError> {
        let path = self.photos.save(PhotoFolder::Progress, upload).await?;
        let attached = self.repo.create_attachment(entry.id, &path).await;
        if attached.is_err() {
            discard_photo(&self.photos, &path).await;
        }
        attached
    }
}
