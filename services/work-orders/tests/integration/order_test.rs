use fieldops_domain::pagination::PageRequest;
use fieldops_domain::role::Role;
use fieldops_domain::status::PENDING;
use fieldops_work_orders::domain::policy::Denial;
use fieldops_work_orders::domain::types::OrderChanges;
use fieldops_work_orders::error::WorkOrdersError;
use fieldops_work_orders::lock::OrderLocks;
use fieldops_work_orders::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, ListOrdersUseCase, UpdateOrderUseCase,
};

use crate::helpers::{
    ADMIN, CLIENT, InMemoryStore, MemoryPhotoStore, OTHER_TECHNICIAN, SUPERVISOR, TECHNICIAN,
    identity, seed_order, status_id, upload,
};

fn input() -> CreateOrderInput {
    CreateOrderInput {
        title: "Install heater".into(),
        description: "Second floor".into(),
        address: "Calle Falsa 123".into(),
        starts_at: None,
        ends_at: None,
        client_id: CLIENT,
        supervisor_id: None,
        technician_id: Some(TECHNICIAN),
        status_id: Some(status_id(PENDING)),
        reference_photo: None,
    }
}

// ── CreateOrderUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_order_with_names_and_status() {
    let store = InMemoryStore::new();
    let usecase = CreateOrderUseCase {
        repo: store.clone(),
        photos: MemoryPhotoStore::default(),
    };
    let mut with_photo = input();
    with_photo.reference_photo = Some(upload("front.png"));

    let order = usecase
        .execute(&identity(ADMIN, Role::Administrator), with_photo)
        .await
        .unwrap();

    assert_eq!(order.client.id, CLIENT);
    assert_eq!(order.technician_id(), Some(TECHNICIAN));
    assert_eq!(order.supervisor_id(), None);
    assert_eq!(order.status_name(), Some(PENDING));
    assert_eq!(order.reference_photo.as_deref(), Some("orders/front.png"));
    assert!(store.order(order.id).is_some());
}

#[tokio::test]
async fn should_override_supplied_supervisor_for_supervisor() {
    let store = InMemoryStore::new();
    let usecase = CreateOrderUseCase {
        repo: store.clone(),
        photos: MemoryPhotoStore::default(),
    };
    let mut supplied = input();
    supplied.supervisor_id = Some(ADMIN);

    let order = usecase
        .execute(&identity(SUPERVISOR, Role::Supervisor), supplied)
        .await
        .unwrap();

    assert_eq!(order.supervisor_id(), Some(SUPERVISOR));
}

#[tokio::test]
async fn should_never_let_technician_create_orders() {
    let store = InMemoryStore::new();
    let usecase = CreateOrderUseCase {
        repo: store.clone(),
        photos: MemoryPhotoStore::default(),
    };
    let result = usecase
        .execute(&identity(TECHNICIAN, Role::Technician), input())
        .await;
    assert!(
        matches!(
            result,
            Err(WorkOrdersError::Forbidden(Denial::TechnicianCannotCreate))
        ),
        "expected Forbidden, got {result:?}"
    );
    assert!(
        ListOrdersUseCase { repo: store }
            .execute(PageRequest::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn should_reject_unknown_client() {
    let usecase = CreateOrderUseCase {
        repo: InMemoryStore::new(),
        photos: MemoryPhotoStore::default(),
    };
    let mut unknown = input();
    unknown.client_id = fieldops_domain::id::UserId(404);
    let result = usecase
        .execute(&identity(ADMIN, Role::Administrator), unknown)
        .await;
    assert!(matches!(result, Err(WorkOrdersError::InvalidReference)));
}

#[tokio::test]
async fn should_discard_reference_photo_of_rejected_order() {
    let photos = MemoryPhotoStore::default();
    let usecase = CreateOrderUseCase {
        repo: InMemoryStore::new(),
        photos: photos.clone(),
    };
    let mut unknown = input();
    unknown.client_id = fieldops_domain::id::UserId(404);
    unknown.reference_photo = Some(upload("front.png"));

    let result = usecase
        .execute(&identity(ADMIN, Role::Administrator), unknown)
        .await;

    assert!(matches!(result, Err(WorkOrdersError::InvalidReference)));
    assert!(photos.stored().is_empty());
}

// ── ListOrdersUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_orders_newest_first_and_paged() {
    let store = InMemoryStore::new();
    let first = seed_order(&store, None, None, None);
    let second = seed_order(&store, None, None, None);
    let third = seed_order(&store, None, None, None);
    let usecase = ListOrdersUseCase { repo: store };

    let page = usecase
        .execute(PageRequest {
            per_page: 2,
            page: 1,
        })
        .await
        .unwrap();
    let ids: Vec<_> = page.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![third, second]);

    let rest = usecase
        .execute(PageRequest {
            per_page: 2,
            page: 2,
        })
        .await
        .unwrap();
    assert_eq!(rest.iter().map(|o| o.id).collect::<Vec<_>>(), vec![first]);
}

// ── UpdateOrderUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_let_only_the_assigned_technician_update() {
    let store = InMemoryStore::new();
    let id = seed_order(&store, Some(SUPERVISOR), Some(TECHNICIAN), Some(PENDING));
    let usecase = UpdateOrderUseCase {
        repo: store.clone(),
        locks: OrderLocks::new(),
    };
    let rename = || OrderChanges {
        title: Some("Install heater (urgent)".into()),
        ..Default::default()
    };

    let denied = usecase
        .execute(&identity(OTHER_TECHNICIAN, Role::Technician), id, rename())
        .await;
    assert!(matches!(
        denied,
        Err(WorkOrdersError::Forbidden(Denial::TechnicianNotAssigned))
    ));
    assert_eq!(store.order(id).unwrap().title, format!("Order {id}"));

    let updated = usecase
        .execute(&identity(TECHNICIAN, Role::Technician), id, rename())
        .await
        .unwrap();
    assert_eq!(updated.title, "Install heater (urgent)");
}

// Expected behavior, not a gap: with no technician assigned the technician
// check does not apply, so any technician can edit (and claim) the order.
#[tokio::test]
async fn should_let_any_technician_update_unassigned_order() {
    let store = InMemoryStore::new();
    let id = seed_order(&store, Some(SUPERVISOR), None, Some(PENDING));
    let usecase = UpdateOrderUseCase {
        repo: store.clone(),
        locks: OrderLocks::new(),
    };
    let claim = OrderChanges {
        technician_id: Some(Some(OTHER_TECHNICIAN)),
        ..Default::default()
    };

    let updated = usecase
        .execute(&identity(OTHER_TECHNICIAN, Role::Technician), id, claim)
        .await
        .unwrap();
    assert_eq!(updated.technician_id(), Some(OTHER_TECHNICIAN));
}

#[tokio::test]
async fn should_clear_nullable_fields_on_explicit_null() {
    let store = InMemoryStore::new();
    let id = seed_order(&store, Some(SUPERVISOR), Some(TECHNICIAN), Some(PENDING));
    let usecase = UpdateOrderUseCase {
        repo: store.clone(),
        locks: OrderLocks::new(),
    };
    let changes = OrderChanges {
        technician_id: Some(None),
        status_id: Some(None),
        ..Default::default()
    };
    let updated = usecase
        .execute(&identity(ADMIN, Role::Administrator), id, changes)
        .await
        .unwrap();
    assert_eq!(updated.technician_id(), None);
    assert_eq!(updated.status_name(), None);
    assert_eq!(updated.supervisor_id(), Some(SUPERVISOR));
}
