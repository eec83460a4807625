/// Film-metadata tool collaborator
///
/// Speaks the hosted MCP-style tool-invocation protocol: a `tools/call`
/// request for `get_films`, answered with either a `result` payload or an
/// `error` object. Non-2xx statuses and `error` bodies are hard failures
/// surfaced to the caller.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};

const TOOL_NAME: &str = "get_films";

#[derive(Debug, Deserialize)]
struct ToolCallReply {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ToolCallError>,
}

#[derive(Debug, Deserialize)]
struct ToolCallError {
    message: String,
}

#[derive(Clone)]
pub struct FilmToolClient {
    http_client: HttpClient,
    api_url: String,
    api_key: String,
}

impl FilmToolClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            api_key,
        }
    }

    /// Invokes the `get_films` tool for the given film name or description.
    ///
    /// Missing input is a contract violation fatal to this request only.
    pub async fn get_films(&self, name: &str) -> AppResult<Value> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Tool input 'name' is required".to_string(),
            ));
        }

        let body = json!({
            "method": "tools/call",
            "params": {
                "name": TOOL_NAME,
                "arguments": { "name": name }
            }
        });

        let mut request = self.http_client.post(&self.api_url).json(&body);
        if !self.api_key.is_empty() {
            request = request.query(&[("api_key", self.api_key.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Film tool request failed with status {}",
                response.status()
            )));
        }

        let reply: ToolCallReply = response.json().await?;

        if let Some(error) = reply.error {
            return Err(AppError::ExternalApi(format!(
                "Film tool error: {}",
                error.message
            )));
        }

        reply.result.ok_or_else(|| {
            AppError::ExternalApi("Film tool reply carried neither result nor error".to_string())
        })
    }
}
