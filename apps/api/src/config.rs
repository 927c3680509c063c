use anyhow::{Context, Result};

/// How many casts to pull per analysis when CAST_FETCH_LIMIT is unset.
const DEFAULT_CAST_FETCH_LIMIT: u32 = 300;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub neynar_api_key: String,
    /// Optional: absence degrades the Gemini client instead of crashing.
    pub gemini_api_key: Option<String>,
    pub cast_fetch_limit: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            neynar_api_key: require_env("NEYNAR_API_KEY")?,
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
            cast_fetch_limit: match std::env::var("CAST_FETCH_LIMIT") {
                Ok(v) => v
                    .parse::<u32>()
                    .context("CAST_FETCH_LIMIT must be a positive integer")?,
                Err(_) => DEFAULT_CAST_FETCH_LIMIT,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
impl Config {
    /// Fixed config for tests — no environment reads.
    pub fn for_tests() -> Self {
        Config {
            neynar_api_key: "test-neynar-key".to_string(),
            gemini_api_key: None,
            cast_fetch_limit: DEFAULT_CAST_FETCH_LIMIT,
            port: 0,
            rust_log: "info".to_string(),
        }
    }
}
