pub mod api;


use crate::app_error::AppError;
use crate::logger::Logger;
use api::LlmApi;
use serde_json::json;
use std::time::Instant;

pub const NO_VALID_RESPONSE: &str = "Gemini did not return a valid response.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceReply {
    Text(String),
    /// The body decoded but held no generated text where it should be.
    NoValidResponse,
}

/// Sends one prompt and records the exchange under `log_prefix`. Transport,
/// status and JSON failures are errors; a well-formed body without text is
/// [`InferenceReply::NoValidResponse`].
pub async fn query(
    api_client: &dyn LlmApi,
    prompt: &str,
    logger: &Logger,
    log_prefix: &str,
) -> Result<InferenceReply, AppError> {
    logger.log_text(&format!("{log_prefix}-query.txt"), prompt)?;

    let request_body = api_client.build_request_body(prompt);
    let log_body = json!({
        "url": api_client.display_url(),
        "body": &request_body,
    });
    logger.log_json(&format!("{log_prefix}-query.json"), &log_body)?;

    let start_time = Instant::now();
    let response_result = api_client.query(&request_body).await;
    let duration = start_time.elapsed();

    tracing::info!(
        model = api_client.model_name(),
        elapsed_secs = duration.as_secs_f64(),
        "LLM call finished"
    );

    let response_json = match response_result {
        Ok(json) => json,
        Err(e) => {
            let error_json =
                json!({ "error": e.to_string(), "totalResponseTime": duration.as_millis() });
            logger.log_json(&format!("{log_prefix}-response.json"), &error_json)?;
            logger.log_text(&format!("{log_prefix}-response.txt"), &format!("ERROR\n{e}"))?;
            return Err(e);
        }
    };

    let mut logged_response = response_json.clone();
    if let Some(obj) = logged_response.as_object_mut() {
        obj.insert("totalResponseTime".to_string(), json!(duration.as_millis()));
    } else {
        logged_response = json!({
            "response_payload": logged_response,
            "totalResponseTime": duration.as_millis(),
        });
    }
    logger.log_json(&format!("{log_prefix}-response.json"), &logged_response)?;

    match api_client.extract_text_from_response(&response_json) {
        Some(text) => {
            logger.log_text(&format!("{log_prefix}-response.txt"), &text)?;
            Ok(InferenceReply::Text(text))
        }
        None => {
            tracing::warn!(response = %response_json, "Gemini API response was unexpected");
            logger.log_text(
                &format!("{log_prefix}-response.txt"),
                &format!("ERROR\n{NO_VALID_RESPONSE}"),
            )?;
            Ok(InferenceReply::NoValidResponse)
        }
    }
}
