/// Language-model recommendation collaborator
///
/// POSTs a fixed system instruction plus the user's query and extracts the
/// recommendation array embedded in the free-text reply.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    services::parser,
    services::providers::{RecommendationOutcome, RecommendationSource},
};

const SYSTEM_INSTRUCTIONS: &str = r#"You are a movie recommendation expert. Based on user requests, recommend movies with the following JSON format:
[
  {
    "title": "Movie Title",
    "genre": "Genre",
    "year": year,
    "rating": rating,
    "description": "Brief compelling description",
    "director": "Director Name",
    "reason": "Why this matches the user's request"
  }
]

Recommend 3-5 movies that best match the user's request. Mix popular and lesser-known gems. Be specific and accurate with movie details."#;

#[derive(Debug, Deserialize)]
struct LlmReply {
    content: String,
}

#[derive(Clone)]
pub struct LlmRecommender {
    http_client: HttpClient,
    api_url: String,
}

impl LlmRecommender {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl RecommendationSource for LlmRecommender {
    async fn recommend(&self, query: &str) -> AppResult<RecommendationOutcome> {
        let body = json!({
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTIONS },
                { "role": "user", "content": format!("I want movie recommendations for: {}", query) }
            ]
        });

        let response = self
            .http_client
            .post(&self.api_url)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "LLM API returned status {}: {}",
                status, body
            )));
        }

        let reply: LlmReply = response.json().await?;

        match parser::parse_recommendations(&reply.content) {
            Some(recommendations) => {
                tracing::info!(
                    query = %query,
                    recommendations = recommendations.len(),
                    "Recommendation lookup completed"
                );
                Ok(RecommendationOutcome::Parsed(recommendations))
            }
            None => {
                tracing::info!(query = %query, "No parseable recommendation array in reply");
                Ok(RecommendationOutcome::Unparseable)
            }
        }
    }
}
