use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use fieldops_domain::id::OrderId;
use fieldops_domain::pagination::PageRequest;
use fieldops_domain::role::Role;
use fieldops_domain::status::{FINALIZED, IN_PROGRESS, IN_REVIEW, PENDING};
use fieldops_work_orders::domain::policy::Denial;
use fieldops_work_orders::domain::repository::WorkOrderRepository;
use fieldops_work_orders::domain::types::{NewWorkOrder, OrderChanges, StatusTally, WorkOrder};
use fieldops_work_orders::error::WorkOrdersError;
use fieldops_work_orders::lock::OrderLocks;
use fieldops_work_orders::usecase::order::UpdateOrderUseCase;
use fieldops_work_orders::usecase::progress::{
    CreateProgressEntryInput, CreateProgressEntryUseCase, ListProgressEntriesUseCase,
};
use fieldops_work_orders::usecase::report::GenerateReportUseCase;

use crate::helpers::{
    ADMIN, InMemoryStore, JsonRenderer, MemoryPhotoStore, SUPERVISOR, TECHNICIAN, identity,
    seed_order, status_id, upload,
};

fn create_usecase(
    store: &InMemoryStore,
    locks: &OrderLocks,
) -> CreateProgressEntryUseCase<InMemoryStore, InMemoryStore, MemoryPhotoStore> {
    CreateProgressEntryUseCase {
        orders: store.clone(),
        repo: store.clone(),
        photos: MemoryPhotoStore::default(),
        locks: locks.clone(),
    }
}

fn entry(order_id: OrderId, content: &str) -> CreateProgressEntryInput {
    CreateProgressEntryInput {
        order_id,
        content: content.into(),
        photo: None,
        attachments: Vec::new(),
    }
}

#[tokio::test]
async fn should_reject_every_role_on_finalized_order() {
    let store = InMemoryStore::new();
    let id = seed_order(&store, Some(SUPERVISOR), Some(TECHNICIAN), Some(FINALIZED));
    let usecase = create_usecase(&store, &OrderLocks::new());

    for caller in [
        identity(ADMIN, Role::Administrator),
        identity(SUPERVISOR, Role::Supervisor),
        identity(TECHNICIAN, Role::Technician),
        identity(ADMIN, Role::User),
    ] {
        let result = usecase.execute(&caller, entry(id, "late note")).await;
        assert!(
            matches!(result, Err(WorkOrdersError::Forbidden(Denial::OrderFinalized))),
            "{:?} must be locked out, got {result:?}",
            caller.role
        );
    }
    assert!(store.entries_of(id).is_empty());
}

#[tokio::test]
async fn should_reject_technician_while_order_is_in_review() {
    let store = InMemoryStore::new();
    let id = seed_order(&store, None, Some(TECHNICIAN), Some(IN_REVIEW));
    let result = create_usecase(&store, &OrderLocks::new())
        .execute(&identity(TECHNICIAN, Role::Technician), entry(id, "note"))
        .await;
    assert!(matches!(
        result,
        Err(WorkOrdersError::Forbidden(Denial::TechnicianStatusLocked(ref s))) if s == IN_REVIEW
    ));
}

#[tokio::test]
async fn should_unlock_technician_once_order_moves_to_in_progress() {
    let store = InMemoryStore::new();
    let locks = OrderLocks::new();
    let id = seed_order(&store, Some(SUPERVISOR), Some(TECHNICIAN), Some(PENDING));
    let technician = identity(TECHNICIAN, Role::Technician);
    let create = create_usecase(&store, &locks);

    let denied = create.execute(&technician, entry(id, "Arrived on site")).await;
    assert!(matches!(
        denied,
        Err(WorkOrdersError::Forbidden(Denial::TechnicianStatusLocked(_)))
    ));

    UpdateOrderUseCase {
        repo: store.clone(),
        locks: locks.clone(),
    }
    .execute(
        &identity(SUPERVISOR, Role::Supervisor),
        id,
        OrderChanges {
            status_id: Some(Some(status_id(IN_PROGRESS))),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let first = create
        .execute(&technician, entry(id, "Arrived on site"))
        .await
        .unwrap();
    let second = create
        .execute(&technician, entry(id, "Valve replaced"))
        .await
        .unwrap();

    let listed = ListProgressEntriesUseCase {
        repo: store.clone(),
    }
    .execute(Some(id))
    .await
    .unwrap();
    let listed_ids: Vec<_> = listed.iter().map(|e| e.id).collect();
    assert_eq!(listed_ids, vec![second.entry.id, first.entry.id]);

    let report = GenerateReportUseCase {
        orders: store.clone(),
        progress: store.clone(),
        renderer: JsonRenderer,
        logo_path: "static/img/logo.png".into(),
    }
    .assemble(id)
    .await
    .unwrap();
    let report_ids: Vec<_> = report.entries.iter().map(|e| e.id).collect();
    assert_eq!(report_ids, vec![first.entry.id, second.entry.id]);
}

#[tokio::test]
async fn should_keep_entry_with_one_attachment_when_second_write_fails() {
    let store = InMemoryStore::new().failing_attachment_call(2);
    let id = seed_order(&store, None, Some(TECHNICIAN), Some(IN_PROGRESS));
    let input = CreateProgressEntryInput {
        order_id: id,
        content: "Photos of the repair".into(),
        photo: Some(upload("overview.png")),
        attachments: vec![upload("1.png"), upload("2.png"), upload("3.png")],
    };
    let usecase = create_usecase(&store, &OrderLocks::new());

    let created = usecase
        .execute(&identity(TECHNICIAN, Role::Technician), input)
        .await
        .unwrap();

    assert_eq!(created.entry.attachments.len(), 1);
    assert_eq!(created.entry.attachments[0].photo, "progress/1.png");
    assert_eq!(created.failed_attachments, vec!["2.png", "3.png"]);

    let stored = store.entries_of(id);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].attachments.len(), 1);
    assert_eq!(stored[0].photo.as_deref(), Some("progress/overview.png"));
    // The photo of the failed attachment is not left behind.
    assert_eq!(
        usecase.photos.stored(),
        vec!["progress/overview.png", "progress/1.png"]
    );
}

#[tokio::test]
async fn should_filter_list_by_order() {
    let store = InMemoryStore::new();
    let a = seed_order(&store, None, None, Some(IN_PROGRESS));
    let b = seed_order(&store, None, None, Some(IN_PROGRESS));
    let create = create_usecase(&store, &OrderLocks::new());
    let admin = identity(ADMIN, Role::Administrator);
    create.execute(&admin, entry(a, "on a")).await.unwrap();
    create.execute(&admin, entry(b, "on b")).await.unwrap();

    let list = ListProgressEntriesUseCase {
        repo: store.clone(),
    };
    let only_a = list.execute(Some(a)).await.unwrap();
    assert_eq!(only_a.len(), 1);
    assert_eq!(only_a[0].content, "on a");
    assert_eq!(list.execute(None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn should_serialize_concurrent_entries_on_same_order() {
    let store = InMemoryStore::new();
    let locks = OrderLocks::new();
    let id = seed_order(&store, None, None, Some(IN_PROGRESS));

    let mut handles = Vec::new();
    for i in 0..5 {
        let usecase = create_usecase(&store, &locks);
        handles.push(tokio::spawn(async move {
            usecase
                .execute(
                    &identity(ADMIN, Role::Administrator),
                    entry(id, &format!("note {i}")),
                )
                .await
                .map(|created| created.entry.id)
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(store.entries_of(id).len(), 5);
    assert!(locks.len() <= 1);
}

/// Order store whose `update` parks until released, so the updating request
/// keeps holding the order lock.
#[derive(Clone)]
struct PausingStore {
    inner: InMemoryStore,
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl WorkOrderRepository for PausingStore {
    async fn find_by_id(&self, id: OrderId) -> Result<Option<WorkOrder>, WorkOrdersError> {
        self.inner.find_by_id(id).await
    }
    async fn list(&self, page: PageRequest) -> Result<Vec<WorkOrder>, WorkOrdersError> {
        self.inner.list(page).await
    }
    async fn create(&self, order: &NewWorkOrder) -> Result<WorkOrder, WorkOrdersError> {
        self.inner.create(order).await
    }
    async fn update(
        &self,
        id: OrderId,
        changes: &OrderChanges,
    ) -> Result<WorkOrder, WorkOrdersError> {
        self.entered.notify_one();
        self.release.notified().await;
        self.inner.update(id, changes).await
    }
    async fn count_by_status(&self) -> Result<Vec<StatusTally>, WorkOrdersError> {
        self.inner.count_by_status().await
    }
}

#[tokio::test]
async fn should_reject_entry_queued_behind_finalizing_update() {
    let store = InMemoryStore::new();
    let locks = OrderLocks::new();
    let id = seed_order(&store, Some(SUPERVISOR), Some(TECHNICIAN), Some(IN_PROGRESS));
    let paused = PausingStore {
        inner: store.clone(),
        entered: Arc::new(Notify::new()),
        release: Arc::new(Notify::new()),
    };

    let update = UpdateOrderUseCase {
        repo: paused.clone(),
        locks: locks.clone(),
    };
    let finalize = tokio::spawn(async move {
        update
            .execute(
                &identity(SUPERVISOR, Role::Supervisor),
                id,
                OrderChanges {
                    status_id: Some(Some(status_id(FINALIZED))),
                    ..Default::default()
                },
            )
            .await
    });
    paused.entered.notified().await;

    let create = create_usecase(&store, &locks);
    let log = tokio::spawn(async move {
        create
            .execute(
                &identity(TECHNICIAN, Role::Technician),
                entry(id, "still working"),
            )
            .await
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!log.is_finished(), "entry must wait for the order lock");

    paused.release.notify_one();
    let order = finalize.await.unwrap().unwrap();
    assert_eq!(order.status_name(), Some(FINALIZED));

    let result = log.await.unwrap();
    assert!(
        matches!(result, Err(WorkOrdersError::Forbidden(Denial::OrderFinalized))),
        "got {result:?}"
    );
    assert!(store.entries_of(id).is_empty());
}
