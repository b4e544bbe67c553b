use fieldops_domain::status::{FINALIZED, IN_PROGRESS, PENDING};

use crate::domain::repository::WorkOrderRepository;
use crate::domain::types::{DashboardCounts, StatusTally};
use crate::error::WorkOrdersError;

// ── Dashboard ────────────────────────────────────────────────────────────────

pub struct DashboardUseCase<R: WorkOrderRepository> {
    pub repo: R,
}

impl<R: WorkOrderRepository> DashboardUseCase<R> {
    /// Counts by exact status label. Orders in any other status, or none,
    /// only count toward `total`.
    ///
    /// Every counter comes from one grouped read, so the buckets never add up
    /// to more than `total` even while orders are being written.
    pub async fn execute(&self) -> Result<DashboardCounts, WorkOrdersError> {
        let tallies = self.repo.count_by_status().await?;
        Ok(tally(&tallies))
    }
}

fn tally(tallies: &[StatusTally]) -> DashboardCounts {
    let mut counts = DashboardCounts::default();
    for t in tallies {
        counts.total += t.orders;
        match t.status.as_deref() {
            Some(PENDING) => counts.pending += t.orders,
            Some(IN_PROGRESS) => counts.in_progress += t.orders,
            Some(FINALIZED) => counts.finalized += t.orders,
            _ => {}
        }
    }
    counts
}
