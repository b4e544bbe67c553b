use fieldops_domain::id::OrderId;
use fieldops_domain::pagination::Sort;

use crate::domain::repository::{ProgressRepository, ReportRenderer, WorkOrderRepository};
use crate::domain::types::{RenderedReport, ReportDocument, report_file_name};
use crate::error::WorkOrdersError;

// ── GenerateReport ───────────────────────────────────────────────────────────

pub struct GenerateReportUseCase<O, R, Rd>
where
    O: WorkOrderRepository,
    R: ProgressRepository,
    Rd: ReportRenderer,
{
    pub orders: O,
    pub progress: R,
    pub renderer: Rd,
    pub logo_path: String,
}

impl<O, R, Rd> GenerateReportUseCase<O, R, Rd>
where
    O: WorkOrderRepository,
    R: ProgressRepository,
    Rd: ReportRenderer,
{
    /// Gather the order and its full progress log, oldest entry first.
    pub async fn assemble(&self, id: OrderId) -> Result<ReportDocument, WorkOrdersError> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or(WorkOrdersError::OrderNotFound)?;
        let entries = self.progress.list(Some(id), Sort::Asc).await?;
        Ok(ReportDocument {
            order,
            entries,
            logo_path: self.logo_path.clone(),
        })
    }

    pub async fn execute(&self, id: OrderId) -> Result<RenderedReport, WorkOrdersError> {
        let document = self.assemble(id).await?;
        let bytes = self.renderer.render(&document).await?;
        tracing::info!(order_id = %id, entries = document.entries.len(), size = bytes.len(), "report rendered");
        Ok(RenderedReport {
            file_name: report_file_name(id),
            bytes,
        })
    }
}
