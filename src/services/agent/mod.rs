//! Conversational film agent.
//!
//! The hosted agent is an opaque collaborator; this module pins down the
//! three calls the system actually makes — invoke with a query, call the
//! film-metadata tool, read the reply — behind the `FilmAgent` trait and a
//! thin adapter that binds a model identifier, a fixed instruction string,
//! and the tool client.

use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};

mod film_tool;

pub use film_tool::FilmToolClient;

const AGENT_NAME: &str = "Film Agent";

const AGENT_INSTRUCTIONS: &str = r#"You are a film recommendation expert.

Your job is to help users discover movies based on their interests, moods, preferred genres, or favorite actors/directors.

When a user provides a description like "I want something romantic and funny" or "I loved Inception", you should suggest relevant movies with a brief explanation.

Your responses should be clear, informative, and tailored to what the user is looking for.

Avoid listing too many films; focus on the top 1-3 that best match the request."#;

/// Conversational agent collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait FilmAgent: Send + Sync {
    /// Forwards a free-text query and returns the agent's reply text
    async fn ask(&self, query: &str) -> AppResult<String>;
}

/// Declarative binding of the agent: a name, a model identifier, and its
/// fixed instruction string
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub name: String,
    pub model: String,
    pub instructions: String,
}

impl AgentConfig {
    /// The film agent binding with its standing instructions
    pub fn film_agent(model: String) -> Self {
        Self {
            name: AGENT_NAME.to_string(),
            model,
            instructions: AGENT_INSTRUCTIONS.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AgentReply {
    content: String,
}

/// Adapter wiring the agent binding to the language-model endpoint and the
/// film-metadata tool
#[derive(Clone)]
pub struct FilmAgentAdapter {
    http_client: HttpClient,
    llm_api_url: String,
    config: AgentConfig,
    tools: FilmToolClient,
}

impl FilmAgentAdapter {
    pub fn new(config: AgentConfig, llm_api_url: String, tools: FilmToolClient) -> Self {
        Self {
            http_client: HttpClient::new(),
            llm_api_url,
            config,
            tools,
        }
    }
}

#[async_trait::async_trait]
impl FilmAgent for FilmAgentAdapter {
    async fn ask(&self, query: &str) -> AppResult<String> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput("Query is required".to_string()));
        }

        // Tool call first; its failure is a hard failure for this request
        let films = self.tools.get_films(query).await?;

        tracing::debug!(agent = %self.config.name, query = %query, "Invoking film agent");

        let body = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": self.config.instructions },
                { "role": "system", "content": format!("Film data from get_films: {}", films) },
                { "role": "user", "content": query }
            ]
        });

        let response = self
            .http_client
            .post(&self.llm_api_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Agent model returned status {}: {}",
                status, body
            )));
        }

        let reply: AgentReply = response.json().await?;
        Ok(reply.content)
    }
}
