use crate::domain::repository::StatusRepository;
use crate::domain::types::Status;
use crate::error::WorkOrdersError;

// ── ListStatuses ─────────────────────────────────────────────────────────────

pub struct ListStatusesUseCase<R: StatusRepository> {
    pub repo: R,
}

impl<R: StatusRepository> ListStatusesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Status>, WorkOrdersError> {
        self.repo.list().await
    }
}
