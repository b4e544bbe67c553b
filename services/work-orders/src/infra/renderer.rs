use reqwest::Client;

use crate::domain::repository::ReportRenderer;
use crate::domain::types::ReportDocument;
use crate::error::WorkOrdersError;

/// Report renderer reached over HTTP: the document is POSTed as JSON and the
/// response body is the PDF.
#[derive(Clone)]
pub struct HttpReportRenderer {
    pub client: Client,
    pub url: String,
}

impl ReportRenderer for HttpReportRenderer {
    async fn render(&self, document: &ReportDocument) -> Result<Vec<u8>, WorkOrdersError> {
        let order_id = document.order.id;
        let resp = self
            .client
            .post(&self.url)
            .json(document)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, %order_id, "renderer unreachable");
                WorkOrdersError::RenderingFailure
            })?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().await.unwrap_or_default();
            tracing::error!(%status, %order_id, detail = %detail, "renderer rejected report");
            return Err(WorkOrdersError::RenderingFailure);
        }

        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!(error = %e, %order_id, "renderer response truncated");
            WorkOrdersError::RenderingFailure
        })?;
        Ok(bytes.to_vec())
    }
}
