use crate::app_error::AppError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL_NAME: &str = "gemini-2.0-flash";

pub(crate) fn build_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(15))
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .build()
        .unwrap_or_else(|_| Client::new())
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model_name: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model_name: &str, api_base_url: &str) -> Self {
        let endpoint = format!(
            "{}/models/{model_name}:generateContent",
            api_base_url.trim_end_matches('/')
        );
        Self {
            client: build_http_client(),
            api_key,
            model_name: model_name.to_string(),
            endpoint,
        }
    }

    // Single attempt.
    async fn query_once(&self, request_body: &Value) -> Result<Value, AppError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header(CONTENT_TYPE, "application/json")
            .json(request_body)
            .send()
            .await
            .map_err(|e| {
                AppError::InferenceTransport(censor_api_key(&e.to_string(), &self.api_key))
            })?;

        handle_response_to_json(resp, &self.api_key).await
    }
}

pub trait LlmApi: Send + Sync {
    fn model_name(&self) -> &str;
    /// Request URL with the key masked, safe to log.
    fn display_url(&self) -> String;
    fn build_request_body(&self, prompt: &str) -> Value;
    fn query<'a>(
        &'a self,
        request_body: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, AppError>> + Send + 'a>>;
    fn extract_text_from_response(&self, response: &Value) -> Option<String>;
}

impl LlmApi for GeminiClient {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn display_url(&self) -> String {
        format!(
            "{}?key={}",
            self.endpoint,
            censor_api_key(&self.api_key, &self.api_key)
        )
    }

    fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        })
    }

    fn query<'a>(
        &'a self,
        request_body: &'a Value,
    ) -> Pin<Box<dyn Future<Output = Result<Value, AppError>> + Send + 'a>> {
        Box::pin(self.query_once(request_body))
    }

    fn extract_text_from_response(&self, response: &Value) -> Option<String> {
        extract_text_from_gemini_response(response)
    }
}

pub fn censor_api_key(text: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        return text.to_string();
    }
    let censored_key = if api_key.chars().count() > 8 {
        let tail: String = api_key.chars().skip(api_key.chars().count() - 4).collect();
        format!("...{tail}")
    } else {
        "...".to_string()
    };
    text.replace(api_key, &censored_key)
}

async fn handle_response_to_json(
    resp: reqwest::Response,
    api_key: &str,
) -> Result<Value, AppError> {
    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| AppError::InferenceTransport(censor_api_key(&e.to_string(), api_key)))?;

    if !status.is_success() {
        return Err(AppError::InferenceTransport(format!(
            "HTTP {status} with body:\n{}",
            censor_api_key(&text, api_key)
        )));
    }

    serde_json::from_str::<Value>(&text).map_err(|e| {
        AppError::InferenceMalformed(format!(
            "Invalid JSON in success response: {e}; raw body:\n{}",
            censor_api_key(&text, api_key)
        ))
    })
}

/// Reads `candidates[0].content.parts[0].text`. Missing fields or empty text
/// yield `None`.
pub fn extract_text_from_gemini_response(response: &Value) -> Option<String> {
    response
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?
        .first()?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
