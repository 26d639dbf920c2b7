use std::env;

const DEFAULT_API_URL: &str = "https://api.github.com/graphql";
const DEFAULT_REFRESH_SECS: u64 = 6 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub github_api_url: String,
    pub github_token: String,
    pub github_username: String,
    /// Stats proxy base URL for the page fetch; empty keeps the placeholder.
    pub stats_url: String,
    pub refresh_secs: u64,
    pub cache_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8080),
            github_api_url: env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            github_token: env::var("GITHUB_TOKEN").unwrap_or_default(),
            github_username: env::var("GITHUB_USERNAME").unwrap_or_default(),
            stats_url: env::var("STATS_URL").unwrap_or_default(),
            refresh_secs: env::var("REFRESH_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_REFRESH_SECS),
            cache_enabled: env::var("CACHE_ENABLED")
                .map(|value| !matches!(value.as_str(), "0" | "false" | "off"))
                .unwrap_or(true),
        }
    }
}
