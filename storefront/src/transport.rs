//! Blocking HTTP transport backed by ureq.

use catalog_core::{CatalogError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;

/// Executes core requests over the network.
///
/// ureq's status-as-error behaviour is turned off so 4xx/5xx responses come
/// back as data and the core client decides what they mean. Only failures to
/// get any response become `CatalogError::Transport`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, CatalogError> {
        let mut builder = match req.method {
            HttpMethod::Get => self.agent.get(&req.path),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let mut response = builder
            .call()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        debug!(status, path = %req.path, "request complete");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
