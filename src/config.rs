use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Image generation endpoint for movie posters
    #[serde(default = "default_image_api_url")]
    pub image_api_url: String,

    /// Language-model endpoint for recommendation lookups
    #[serde(default = "default_llm_api_url")]
    pub llm_api_url: String,

    /// Film-metadata MCP endpoint for the agent's tool calls
    #[serde(default = "default_film_mcp_url")]
    pub film_mcp_url: String,

    /// API key appended to film MCP requests
    #[serde(default)]
    pub film_mcp_api_key: String,

    /// Model identifier bound into the film agent
    #[serde(default = "default_agent_model")]
    pub agent_model: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_image_api_url() -> String {
    "https://api.a0.dev/assets/image".to_string()
}

fn default_llm_api_url() -> String {
    "https://api.a0.dev/ai/llm".to_string()
}

fn default_film_mcp_url() -> String {
    "https://server.smithery.ai/@zehranurugurr/film_mcp1/mcp".to_string()
}

fn default_agent_model() -> String {
    "gpt-4o".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
