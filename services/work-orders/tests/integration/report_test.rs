use fieldops_domain::id::OrderId;
use fieldops_domain::role::Role;
use fieldops_domain::status::IN_PROGRESS;
use fieldops_work_orders::error::WorkOrdersError;
use fieldops_work_orders::lock::OrderLocks;
use fieldops_work_orders::usecase::dashboard::DashboardUseCase;
use fieldops_work_orders::usecase::progress::{CreateProgressEntryInput, CreateProgressEntryUseCase};
use fieldops_work_orders::usecase::report::GenerateReportUseCase;

use crate::helpers::{
    ADMIN, InMemoryStore, JsonRenderer, MemoryPhotoStore, identity, seed_order,
};

fn report_usecase(
    store: &InMemoryStore,
) -> GenerateReportUseCase<InMemoryStore, InMemoryStore, JsonRenderer> {
    GenerateReportUseCase {
        orders: store.clone(),
        progress: store.clone(),
        renderer: JsonRenderer,
        logo_path: "static/img/logo.png".into(),
    }
}

#[tokio::test]
async fn should_render_order_with_chronological_log() {
    let store = InMemoryStore::new();
    let id = seed_order(&store, None, None, Some(IN_PROGRESS));
    let create = CreateProgressEntryUseCase {
        orders: store.clone(),
        repo: store.clone(),
        photos: MemoryPhotoStore::default(),
        locks: OrderLocks::new(),
    };
    for content in ["first", "second", "third"] {
        create
            .execute(
                &identity(ADMIN, Role::Administrator),
                CreateProgressEntryInput {
                    order_id: id,
                    content: content.into(),
                    photo: None,
                    attachments: vec![],
                },
            )
            .await
            .unwrap();
    }

    let report = report_usecase(&store).execute(id).await.unwrap();

    assert_eq!(report.file_name, format!("Reporte_Orden_{id}.pdf"));
    let document: serde_json::Value = serde_json::from_slice(&report.bytes).unwrap();
    let contents: Vec<&str> = document["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
    assert_eq!(document["logo_path"], "static/img/logo.png");
    assert_eq!(document["order"]["status"]["name"], IN_PROGRESS);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_order() {
    let result = report_usecase(&InMemoryStore::new())
        .execute(OrderId(12))
        .await;
    assert!(matches!(result, Err(WorkOrdersError::OrderNotFound)));
}

#[tokio::test]
async fn should_sum_dashboard_buckets_below_total_with_unknown_statuses() {
    let store = InMemoryStore::new();
    seed_order(&store, None, None, Some("Pendiente"));
    seed_order(&store, None, None, Some("En Progreso"));
    seed_order(&store, None, None, Some("Finalizado"));
    seed_order(&store, None, None, Some("En Revisión"));
    seed_order(&store, None, None, None);

    let counts = DashboardUseCase { repo: store }.execute().await.unwrap();

    assert_eq!(counts.total, 5);
    assert_eq!((counts.pending, counts.in_progress, counts.finalized), (1, 1, 1));
    assert!(counts.pending + counts.in_progress + counts.finalized < counts.total);
}

#[tokio::test]
async fn should_sum_dashboard_buckets_to_total_with_known_statuses() {
    let store = InMemoryStore::new();
    seed_order(&store, None, None, Some("Pendiente"));
    seed_order(&store, None, None, Some("Pendiente"));
    seed_order(&store, None, None, Some("Finalizado"));

    let counts = DashboardUseCase { repo: store }.execute().await.unwrap();

    assert_eq!(
        counts.pending + counts.in_progress + counts.finalized,
        counts.total
    );
}
