use std::sync::Arc;

use movieflix::api::{create_router, AppState};
use movieflix::config::Config;
use movieflix::services::agent::{AgentConfig, FilmAgentAdapter, FilmToolClient};
use movieflix::services::posters;
use movieflix::services::providers::{LlmRecommender, PosterClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movieflix=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let recommender = Arc::new(LlmRecommender::new(config.llm_api_url.clone()));
    let poster_client = Arc::new(PosterClient::new(config.image_api_url.clone()));
    let tools = FilmToolClient::new(config.film_mcp_url.clone(), config.film_mcp_api_key.clone());
    let agent = Arc::new(FilmAgentAdapter::new(
        AgentConfig::film_agent(config.agent_model.clone()),
        config.llm_api_url.clone(),
        tools,
    ));

    let state = AppState::new(recommender, poster_client, agent);

    // Enrich the seed catalog with posters in the background
    tokio::spawn(posters::refresh_posters(state.clone()));

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
