use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, QuerySelect, SqlErr,
};

use fieldops_domain::id::{AttachmentId, EntryId, OrderId, StatusId, UserId};
use fieldops_domain::pagination::{PageRequest, Sort};
use fieldops_work_orders_schema::{
    groups, progress_attachments, progress_entries, statuses, user_groups, users, work_orders,
};

use crate::domain::repository::{
    ActorRepository, ProgressRepository, StatusRepository, WorkOrderRepository,
};
use crate::domain::types::{
    Actor, Attachment, NewProgressEntry, NewWorkOrder, OrderChanges, ProgressEntry, Status,
    StatusTally, UserRef, WorkOrder,
};
use crate::error::WorkOrdersError;

/// Map a failed write, turning foreign-key violations into `InvalidReference`.
fn write_error(err: DbErr, context: &'static str) -> WorkOrdersError {
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
        return WorkOrdersError::InvalidReference;
    }
    WorkOrdersError::Internal(anyhow::Error::new(err).context(context))
}

// ── Actor repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActorRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ActorRepository for DbActorRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<Actor>, WorkOrdersError> {
        let Some(user) = users::Entity::find_by_id(id.0)
            .one(&*self.db)
            .await
            .context("find actor by id")?
        else {
            return Ok(None);
        };
        let groups = groups::Entity::find()
            .inner_join(user_groups::Entity)
            .filter(user_groups::Column::UserId.eq(id.0))
            .order_by_asc(groups::Column::Name)
            .all(&*self.db)
            .await
            .context("list actor groups")?;
        Ok(Some(Actor {
            id: UserId(user.id),
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            is_superuser: user.is_superuser,
            groups: groups.into_iter().map(|g| g.name).collect(),
        }))
    }
}

// ── Work order repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbWorkOrderRepository {
    pub db: Arc<DatabaseConnection>,
}

impl DbWorkOrderRepository {
    /// Attach user names and status data to raw order rows.
    async fn hydrate(
        &self,
        models: Vec<work_orders::Model>,
    ) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let mut user_ids: Vec<i32> = models
            .iter()
            .flat_map(|m| [Some(m.client_id), m.supervisor_id, m.technician_id])
            .flatten()
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let names: HashMap<i32, String> = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&*self.db)
            .await
            .context("load order users")?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        let mut status_ids: Vec<i32> = models.iter().filter_map(|m| m.status_id).collect();
        status_ids.sort_unstable();
        status_ids.dedup();
        let statuses: HashMap<i32, Status> = if status_ids.is_empty() {
            HashMap::new()
        } else {
            statuses::Entity::find()
                .filter(statuses::Column::Id.is_in(status_ids))
                .all(&*self.db)
                .await
                .context("load order statuses")?
                .into_iter()
                .map(|s| (s.id, status_from_model(s)))
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|m| order_from_model(m, &names, &statuses))
            .collect())
    }

    async fn hydrate_one(&self, model: work_orders::Model) -> Result<WorkOrder, WorkOrdersError> {
        self.hydrate(vec![model])
            .await?
            .pop()
            .context("hydrated order missing")
            .map_err(WorkOrdersError::from)
    }
}

impl WorkOrderRepository for DbWorkOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<WorkOrder>, WorkOrdersError> {
        let model = work_orders::Entity::find_by_id(id.0)
            .one(&*self.db)
            .await
            .context("find work order by id")?;
        match model {
            Some(model) => Ok(Some(self.hydrate_one(model).await?)),
            None => Ok(None),
        }
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        let PageRequest { per_page, .. } = page.clamped();
        let models = work_orders::Entity::find()
            .order_by_desc(work_orders::Column::CreatedAt)
            .order_by_desc(work_orders::Column::Id)
            .offset(page.offset())
            .limit(u64::from(per_page))
            .all(&*self.db)
            .await
            .context("list work orders")?;
        self.hydrate(models).await
    }

    async fn create(&self, order: &NewWorkOrder) -> Result<WorkOrder, WorkOrdersError> {
        let model = work_orders::ActiveModel {
            title: Set(order.title.clone()),
            description: Set(order.description.clone()),
            address: Set(order.address.clone()),
            starts_at: Set(order.starts_at),
            ends_at: Set(order.ends_at),
            reference_photo: Set(order.reference_photo.clone()),
            created_at: Set(order.created_at),
            client_id: Set(order.client_id.0),
            supervisor_id: Set(order.supervisor_id.map(|id| id.0)),
            technician_id: Set(order.technician_id.map(|id| id.0)),
            status_id: Set(order.status_id.map(|id| id.0)),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| write_error(e, "create work order"))?;
        self.hydrate_one(model).await
    }

    async fn update(
        &self,
        id: OrderId,
        changes: &OrderChanges,
    ) -> Result<WorkOrder, WorkOrdersError> {
        let mut am = work_orders::ActiveModel {
            id: sea_orm::ActiveValue::Unchanged(id.0),
            ..Default::default()
        };
        if let Some(title) = &changes.title {
            am.title = Set(title.clone());
        }
        if let Some(description) = &changes.description {
            am.description = Set(description.clone());
        }
        if let Some(address) = &changes.address {
            am.address = Set(address.clone());
        }
        if let Some(starts_at) = changes.starts_at {
            am.starts_at = Set(starts_at);
        }
        if let Some(ends_at) = changes.ends_at {
            am.ends_at = Set(ends_at);
        }
        if let Some(client_id) = changes.client_id {
            am.client_id = Set(client_id.0);
        }
        if let Some(supervisor_id) = changes.supervisor_id {
            am.supervisor_id = Set(supervisor_id.map(|id| id.0));
        }
        if let Some(technician_id) = changes.technician_id {
            am.technician_id = Set(technician_id.map(|id| id.0));
        }
        if let Some(status_id) = changes.status_id {
            am.status_id = Set(status_id.map(|id| id.0));
        }
        let model = match am.update(&*self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(WorkOrdersError::OrderNotFound),
            Err(e) => return Err(write_error(e, "update work order")),
        };
        self.hydrate_one(model).await
    }

    async fn count_by_status(&self) -> Result<Vec<StatusTally>, WorkOrdersError> {
        let rows = work_orders::Entity::find()
            .select_only()
            .column_as(statuses::Column::Name, "status")
            .column_as(work_orders::Column::Id.count(), "orders")
            .left_join(statuses::Entity)
            .group_by(statuses::Column::Name)
            .into_model::<StatusCountRow>()
            .all(&*self.db)
            .await
            .context("count work orders by status")?;
        Ok(rows
            .into_iter()
            .map(|row| StatusTally {
                status: row.status,
                orders: u64::try_from(row.orders).unwrap_or_default(),
            })
            .collect())
    }
}

#[derive(FromQueryResult)]
struct StatusCountRow {
    status: Option<String>,
    orders: i64,
}

fn status_from_model(model: statuses::Model) -> Status {
    Status {
        id: StatusId(model.id),
        name: model.name,
        color: model.color,
        sort_order: model.sort_order,
    }
}

fn user_ref(id: i32, names: &HashMap<i32, String>) -> UserRef {
    UserRef {
        id: UserId(id),
        username: names.get(&id).cloned().unwrap_or_default(),
    }
}

fn order_from_model(
    model: work_orders::Model,
    names: &HashMap<i32, String>,
    statuses: &HashMap<i32, Status>,
) -> WorkOrder {
    WorkOrder {
        id: OrderId(model.id),
        title: model.title,
        description: model.description,
        address: model.address,
        starts_at: model.starts_at,
        ends_at: model.ends_at,
        reference_photo: model.reference_photo,
        created_at: model.created_at,
        client: user_ref(model.client_id, names),
        supervisor: model.supervisor_id.map(|id| user_ref(id, names)),
        technician: model.technician_id.map(|id| user_ref(id, names)),
        status: model.status_id.and_then(|id| statuses.get(&id).cloned()),
    }
}

// ── Progress repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProgressRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ProgressRepository for DbProgressRepository {
    async fn create_entry(
        &self,
        entry: &NewProgressEntry,
    ) -> Result<ProgressEntry, WorkOrdersError> {
        let model = progress_entries::ActiveModel {
            order_id: Set(entry.order_id.0),
            content: Set(entry.content.clone()),
            photo: Set(entry.photo.clone()),
            created_at: Set(entry.created_at),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| write_error(e, "create progress entry"))?;
        Ok(entry_from_model(model, Vec::new()))
    }

    async fn create_attachment(
        &self,
        entry_id: EntryId,
        photo: &str,
    ) -> Result<Attachment, WorkOrdersError> {
        let model = progress_attachments::ActiveModel {
            entry_id: Set(entry_id.0),
            photo: Set(photo.to_owned()),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(|e| write_error(e, "create progress attachment"))?;
        Ok(attachment_from_model(model))
    }

    async fn list(
        &self,
        order_id: Option<OrderId>,
        sort: Sort,
    ) -> Result<Vec<ProgressEntry>, WorkOrdersError> {
        let mut query = progress_entries::Entity::find();
        if let Some(order_id) = order_id {
            query = query.filter(progress_entries::Column::OrderId.eq(order_id.0));
        }
        query = match sort {
            Sort::Desc => query
                .order_by_desc(progress_entries::Column::CreatedAt)
                .order_by_desc(progress_entries::Column::Id),
            Sort::Asc => query
                .order_by_asc(progress_entries::Column::CreatedAt)
                .order_by_asc(progress_entries::Column::Id),
        };
        let models = query
            .all(&*self.db)
            .await
            .context("list progress entries")?;
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let entry_ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut attachments: HashMap<i32, Vec<Attachment>> = HashMap::new();
        for model in progress_attachments::Entity::find()
            .filter(progress_attachments::Column::EntryId.is_in(entry_ids))
            .order_by_asc(progress_attachments::Column::Id)
            .all(&*self.db)
            .await
            .context("list progress attachments")?
        {
            attachments
                .entry(model.entry_id)
                .or_default()
                .push(attachment_from_model(model));
        }

        Ok(models
            .into_iter()
            .map(|m| {
                let own = attachments.remove(&m.id).unwrap_or_default();
                entry_from_model(m, own)
            })
            .collect())
    }
}

fn entry_from_model(model: progress_entries::Model, attachments: Vec<Attachment>) -> ProgressEntry {
    ProgressEntry {
        id: EntryId(model.id),
        order_id: OrderId(model.order_id),
        content: model.content,
        photo: model.photo,
        created_at: model.created_at,
        attachments,
    }
}

fn attachment_from_model(model: progress_attachments::Model) -> Attachment {
    Attachment {
        id: AttachmentId(model.id),
        entry_id: EntryId(model.entry_id),
        photo: model.photo,
    }
}

// ── Status repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStatusRepository {
    pub db: Arc<DatabaseConnection>,
}

impl StatusRepository for DbStatusRepository {
    async fn list(&self) -> Result<Vec<Status>, WorkOrdersError> {
        let models = statuses::Entity::find()
            .order_by_asc(statuses::Column::SortOrder)
            .order_by_asc(statuses::Column::Id)
            .all(&*self.db)
            .await
            .context("list statuses")?;
        Ok(models.into_iter().map(status_from_model).collect())
    }
}
