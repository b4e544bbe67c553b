use chrono::{DateTime, Utc};

use fieldops_domain::id::{OrderId, StatusId, UserId};
use fieldops_domain::pagination::PageRequest;

use crate::domain::policy::{gate_order_create, gate_order_update};
use crate::domain::repository::{PhotoStore, WorkOrderRepository};
use crate::domain::types::{
    Identity, NewWorkOrder, OrderChanges, PhotoFolder, PhotoUpload, WorkOrder,
};
use crate::error::WorkOrdersError;
use crate::lock::OrderLocks;
use crate::usecase::discard_photo;

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: WorkOrderRepository> {
    pub repo: R,
}

impl<R: WorkOrderRepository> GetOrderUseCase<R> {
    pub async fn execute(&self, id: OrderId) -> Result<WorkOrder, WorkOrdersError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(WorkOrdersError::OrderNotFound)
    }
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: WorkOrderRepository> {
    pub repo: R,
}

impl<R: WorkOrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        self.repo.list(page.clamped()).await
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub title: String,
    pub description: String,
    pub address: String,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub client_id: UserId,
    pub supervisor_id: Option<UserId>,
    pub technician_id: Option<UserId>,
    pub status_id: Option<StatusId>,
    pub reference_photo: Option<PhotoUpload>,
}

pub struct CreateOrderUseCase<R: WorkOrderRepository, P: PhotoStore> {
    pub repo: R,
    pub photos: P,
}

impl<R: WorkOrderRepository, P: PhotoStore> CreateOrderUseCase<R, P> {
    pub async fn execute(
        &self,
        caller: &Identity,
        input: CreateOrderInput,
    ) -> Result<WorkOrder, WorkOrdersError> {
        if input.title.trim().is_empty() {
            return Err(WorkOrdersError::MissingData);
        }
        let mut order = NewWorkOrder {
            title: input.title,
            description: input.description,
            address: input.address,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            reference_photo: None,
            created_at: Utc::now(),
            client_id: input.client_id,
            supervisor_id: input.supervisor_id,
            technician_id: input.technician_id,
            status_id: input.status_id,
        };
        gate_order_create(&caller.role, caller.user_id, &mut order).inspect_err(|denial| {
            tracing::info!(
                user_id = %caller.user_id,
                role = caller.role.label(),
                %denial,
                "order creation denied"
            );
        })?;

        if let Some(upload) = &input.reference_photo {
            order.reference_photo = Some(self.photos.save(PhotoFolder::Orders, upload).await?);
        }
        let created = match self.repo.create(&order).await {
            Ok(created) => created,
            Err(e) => {
                if let Some(path) = &order.reference_photo {
                    discard_photo(&self.photos, path).await;
                }
                return Err(e);
            }
        };
        tracing::info!(order_id = %created.id, user_id = %caller.user_id, "work order created");
        Ok(created)
    }
}

// ── UpdateOrder ──────────────────────────────────────────────────────────────

pub struct UpdateOrderUseCase<R: WorkOrderRepository> {
    pub repo: R,
    pub locks: OrderLocks,
}

impl<R: WorkOrderRepository> UpdateOrderUseCase<R> {
    pub async fn execute(
        &self,
        caller: &Identity,
        id: OrderId,
        changes: OrderChanges,
    ) -> Result<WorkOrder, WorkOrdersError> {
        if changes.is_empty() {
            return Err(WorkOrdersError::MissingData);
        }
        if changes.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(WorkOrdersError::MissingData);
        }

        let _guard = self.locks.acquire(id).await;
        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(WorkOrdersError::OrderNotFound)?;
        gate_order_update(&caller.role, caller.user_id, &current).inspect_err(|denial| {
            tracing::info!(
                order_id = %id,
                user_id = %caller.user_id,
                role = caller.role.label(),
                %denial,
                "order update denied"
            );
        })?;
        self.repo.update(id, &changes).await
    }
}
