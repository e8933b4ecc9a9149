use crate::formatter::{DeleteContentRange, DocRequest, Range};
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// The document service the orchestrator publishes through. Batch apply is
/// atomic at the service boundary; this layer does not retry.
#[async_trait]
pub trait DocPublisher: Send + Sync {
    /// Remove existing content, preserving the trailing terminator.
    async fn clear(&self) -> Result<()>;

    /// Apply the ordered request list in one batch.
    async fn apply(&self, requests: &[DocRequest]) -> Result<()>;
}

/// Google-Docs-style REST client: read the document to find its extent,
/// delete the body range, and post batch updates with a bearer token.
pub struct DocsClient {
    http: reqwest::Client,
    base_url: String,
    doc_id: String,
    token: String,
}

#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [DocRequest],
}

impl DocsClient {
    pub fn new(doc_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "https://docs.googleapis.com/v1".to_string(),
            doc_id: doc_id.into(),
            token: token.into(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// End index of the document body, from the last structural element.
    async fn end_index(&self) -> Result<usize> {
        let url = format!("{}/documents/{}", self.base_url, self.doc_id);
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AgentError::Publish(format!("document read failed: {}", e)))?;

        let doc: Value = response.json().await?;
        let end = doc["body"]["content"]
            .as_array()
            .and_then(|content| content.last())
            .and_then(|element| element["endIndex"].as_u64())
            .unwrap_or(1);
        Ok(end as usize)
    }

    async fn batch_update(&self, requests: &[DocRequest]) -> Result<()> {
        let url = format!("{}/documents/{}:batchUpdate", self.base_url, self.doc_id);
        self.http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&BatchUpdateBody { requests })
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AgentError::Publish(format!("batch update failed: {}", e)))?;
        Ok(())
    }
}

#[async_trait]
impl DocPublisher for DocsClient {
    async fn clear(&self) -> Result<()> {
        info!("Clearing existing document content");
        let end_index = self.end_index().await?;

        // An empty body is just the terminator; nothing to delete. The
        // delete stops one short of the end to keep the final newline.
        if end_index <= 2 {
            info!("Document is already empty");
            return Ok(());
        }

        let delete = DocRequest::DeleteContentRange(DeleteContentRange {
            range: Range { start_index: 1, end_index: end_index - 1 },
        });
        self.batch_update(std::slice::from_ref(&delete)).await?;
        info!("Document cleared");
        Ok(())
    }

    async fn apply(&self, requests: &[DocRequest]) -> Result<()> {
        if requests.is_empty() {
            warn!("No requests to apply");
            return Ok(());
        }
        info!("Writing document ({} requests)", requests.len());
        self.batch_update(requests).await?;
        info!("Document updated");
        Ok(())
    }
}
