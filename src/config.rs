use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Resolved inputs for one search run
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub keyword: String,
    pub api_base: String,
}

impl Config {
    /// Validate the credential first, then the positional arguments.
    pub fn resolve(api_key: Option<String>, keywords: Vec<String>) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::ApiKeyMissing)?;

        let [keyword]: [String; 1] = keywords.try_into().map_err(|_| Error::Usage)?;

        Ok(Self {
            api_key,
            keyword,
            api_base: api_base(),
        })
    }
}

/// Get the config directory (~/.config/yt-search/)
pub fn config_dir() -> Option<PathBuf> {
    std::env::var("YT_SEARCH_CONFIG_DIR")
        .map(PathBuf::from)
        .ok()
        .or_else(|| dirs::config_dir().map(|d| d.join("yt-search")))
}

/// Get the .env file path
pub fn env_file_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(".env"))
}

/// Load environment variables from the config directory's .env file
pub fn load_env() {
    match env_file_path() {
        Some(env_path) if env_path.exists() => {
            let _ = dotenvy::from_path(&env_path);
        }
        _ => {
            // Try current directory as fallback
            let _ = dotenvy::dotenv();
        }
    }
}

/// Get the YouTube Data API key
pub fn youtube_api_key() -> Option<String> {
    std::env::var("YOUTUBE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty())
}

pub fn api_base() -> String {
    std::env::var("YOUTUBE_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_key_and_single_keyword() {
        let config = Config::resolve(Some("AIzaTest".into()), args(&["rust"])).unwrap();
        assert_eq!(config.api_key, "AIzaTest");
        assert_eq!(config.keyword, "rust");
    }

    #[test]
    fn missing_key_is_reported_before_usage() {
        assert!(matches!(
            Config::resolve(None, args(&[])),
            Err(Error::ApiKeyMissing)
        ));
        assert!(matches!(
            Config::resolve(Some("   ".into()), args(&["rust"])),
            Err(Error::ApiKeyMissing)
        ));
    }

    #[test]
    fn wrong_argument_count_is_usage_error() {
        assert!(matches!(
            Config::resolve(Some("k".into()), args(&[])),
            Err(Error::Usage)
        ));
        assert!(matches!(
            Config::resolve(Some("k".into()), args(&["rust", "lang"])),
            Err(Error::Usage)
        ));
    }
}
