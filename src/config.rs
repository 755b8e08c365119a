use serde::Deserialize;

/// Where recipe records are looked up
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    /// In-memory catalog (built-in samples or `recipe_catalog_path`)
    Catalog,
    /// Remote recipe API at `recipe_api_url`
    Http,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Recipe lookup backend
    #[serde(default = "default_recipe_source")]
    pub recipe_source: RecipeSource,

    /// JSON file holding an array of recipes for the catalog backend
    pub recipe_catalog_path: Option<String>,

    /// Recipe API base URL (required for the http backend)
    pub recipe_api_url: Option<String>,

    /// Recipe API key, sent as `X-Api-Key`
    pub recipe_api_key: Option<String>,

    /// Redis connection URL; enables recipe caching when set
    pub redis_url: Option<String>,

    /// Timeout for outbound recipe API requests
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_recipe_source() -> RecipeSource {
    RecipeSource::Catalog
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate().map_err(|e| anyhow::anyhow!(e))?;
        Ok(config)
    }

    /// Rejects settings that cannot produce a working recipe backend
    pub fn validate(&self) -> Result<(), String> {
        if self.recipe_source == RecipeSource::Http
            && self
                .recipe_api_url
                .as_deref()
                .map_or(true, |url| url.trim().is_empty())
        {
            return Err("RECIPE_API_URL is required when RECIPE_SOURCE=http".to_string());
        }

        if self.request_timeout_secs == 0 {
            return Err("REQUEST_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
