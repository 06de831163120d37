//! Task Endpoint Commands
//!
//! POSTs the form to the task endpoint with reqwest (fetch on wasm32).

use async_trait::async_trait;
use task_form::{decode_response_body, FormConfig, TaskClient, TaskError, TaskRequest};

pub struct HttpTaskClient {
    client: reqwest::Client,
    /// Resolved once; a failure is reported on every submit
    endpoint: Result<String, TaskError>,
}

impl HttpTaskClient {
    pub fn new(config: &FormConfig) -> Self {
        let endpoint = page_origin().map(|origin| config.endpoint_url(&origin));
        match &endpoint {
            Ok(url) => log::debug!("[TASK] Endpoint: {}", url),
            Err(e) => log::error!("[TASK] {}", e),
        }
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

fn page_origin() -> Result<String, TaskError> {
    let window = web_sys::window().ok_or_else(|| TaskError::Endpoint("no window".to_string()))?;
    window
        .location()
        .origin()
        .map_err(|e| TaskError::Endpoint(format!("{:?}", e)))
}

#[async_trait(?Send)]
impl TaskClient for HttpTaskClient {
    async fn generate(&self, request: &TaskRequest) -> Result<String, TaskError> {
        let endpoint = self.endpoint.as_ref().map_err(Clone::clone)?;

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TaskError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("[TASK] {} returned {}", endpoint, status);
            return Err(TaskError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TaskError::Body(e.to_string()))?;
        Ok(decode_response_body(&body))
    }
}
