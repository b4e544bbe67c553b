pub mod dashboard;
pub mod identity;
pub mod order;
pub mod progress;
pub mod report;
pub mod status;

use crate::domain::repository::PhotoStore;

/// Drop a stored photo whose record could not be written. Failures are only logged.
pub(crate) async fn discard_photo<P: PhotoStore>(photos: &P, path: &str) {
    if let Err(e) = photos.remove(path).await {
        tracing::warn!(path, error = %e, "orphaned photo not removed");
    }
}
