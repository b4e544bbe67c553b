use std::path::PathBuf;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbActorRepository, DbProgressRepository, DbStatusRepository, DbWorkOrderRepository,
};
use crate::infra::photo::LocalPhotoStore;
use crate::infra::renderer::HttpReportRenderer;
use crate::lock::OrderLocks;

/// Shared application state passed to every handler via axum `State`.
///
/// The connection sits behind an `Arc` so the state stays `Clone` with any
/// sea-orm backend, the mock one included.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub locks: OrderLocks,
    pub media_root: PathBuf,
    pub http: reqwest::Client,
    pub renderer_url: String,
    pub logo_path: String,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn actor_repo(&self) -> DbActorRepository {
        DbActorRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn order_repo(&self) -> DbWorkOrderRepository {
        DbWorkOrderRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn progress_repo(&self) -> DbProgressRepository {
        DbProgressRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn status_repo(&self) -> DbStatusRepository {
        DbStatusRepository {
            db: Arc::clone(&self.db),
        }
    }

    pub fn photo_store(&self) -> LocalPhotoStore {
        LocalPhotoStore {
            root: self.media_root.clone(),
        }
    }

    pub fn renderer(&self) -> HttpReportRenderer {
        HttpReportRenderer {
            client: self.http.clone(),
            url: self.renderer_url.clone(),
        }
    }
}
