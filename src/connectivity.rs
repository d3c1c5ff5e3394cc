//! Diagnostic reachability check run once before the inference call.

use crate::app_error::AppError;
use crate::llm::api::build_http_client;
use reqwest::Client;
use serde_json::Value;
use std::future::Future;
use std::pin::Pin;

pub const DEFAULT_PROBE_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

pub trait ConnectivityProbe: Send + Sync {
    fn target(&self) -> &str;
    fn check<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Value, AppError>> + Send + 'a>>;
}

pub struct HttpProbe {
    client: Client,
    url: String,
}

impl HttpProbe {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: build_http_client(),
            url: url.into(),
        }
    }

    async fn fetch_json(&self) -> Result<Value, AppError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::ConnectivityProbeFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::ConnectivityProbeFailed(format!(
                "HTTP {status} from {}",
                self.url
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| AppError::ConnectivityProbeFailed(e.to_string()))
    }
}

impl ConnectivityProbe for HttpProbe {
    fn target(&self) -> &str {
        &self.url
    }

    fn check<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Value, AppError>> + Send + 'a>> {
        Box::pin(self.fetch_json())
    }
}
