//! Client configuration loader for PopChoice.
//!
//! Reads `config.toml` from the data directory (`~/.popchoice/` by default)
//! and deserializes it into [`ClientConfig`]. Falls back to defaults when the
//! file is missing or malformed. The environment and the command line can
//! then override the base URL.

use std::path::{Path, PathBuf};

use popchoice_types::config::ClientConfig;
use popchoice_types::error::ConfigError;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "POPCHOICE_DATA_DIR";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "POPCHOICE_API_URL";

/// Minimum request timeout in seconds.
const MIN_TIMEOUT_SECS: u64 = 1;

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `POPCHOICE_DATA_DIR` environment variable
/// 2. `~/.popchoice`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".popchoice");
    }

    PathBuf::from(".popchoice")
}

/// Load client configuration from `{data_dir}/config.toml`.
///
/// - Missing file: [`ClientConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_client_config(data_dir: &Path) -> ClientConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ClientConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ClientConfig::default();
        }
    };

    match toml::from_str::<ClientConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ClientConfig::default()
        }
    }
}

/// Apply overrides on top of the file configuration.
///
/// Priority for the base URL: command-line flag, then `POPCHOICE_API_URL`,
/// then the file, then the default. The result is validated and normalized;
/// a timeout floor of one second is enforced.
pub fn resolve_client_config(
    file_config: ClientConfig,
    env_url: Option<String>,
    flag_url: Option<String>,
) -> Result<ClientConfig, ConfigError> {
    let raw_url = flag_url
        .or(env_url)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(file_config.base_url);

    Ok(ClientConfig {
        base_url: resolve_base_url(&raw_url)?,
        timeout_secs: file_config.timeout_secs.max(MIN_TIMEOUT_SECS),
    })
}

/// Validate an http(s) base URL and strip trailing slashes.
///
/// Endpoint paths are appended to the result, so a query string or fragment
/// is rejected.
pub fn resolve_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".to_string()));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_client_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_client_config(tmp.path()).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[tokio::test]
    async fn load_client_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
base_url = "https://movies.example.com/api"
timeout_secs = 10
"#,
        )
        .await
        .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config.base_url, "https://movies.example.com/api");
        assert_eq!(config.timeout_secs, 10);
    }

    #[tokio::test]
    async fn load_client_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "base_url = [not toml")
            .await
            .unwrap();

        let config = load_client_config(tmp.path()).await;
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn resolve_client_config_flag_beats_env_beats_file() {
        let file = ClientConfig {
            base_url: "http://file.local/api".to_string(),
            timeout_secs: 30,
        };

        let config = resolve_client_config(
            file.clone(),
            Some("http://env.local/api".to_string()),
            Some("http://flag.local/api".to_string()),
        )
        .unwrap();
        assert_eq!(config.base_url, "http://flag.local/api");

        let config =
            resolve_client_config(file.clone(), Some("http://env.local/api".to_string()), None)
                .unwrap();
        assert_eq!(config.base_url, "http://env.local/api");

        let config = resolve_client_config(file, None, None).unwrap();
        assert_eq!(config.base_url, "http://file.local/api");
    }

    #[test]
    fn resolve_client_config_defaults_when_unset() {
        let config = resolve_client_config(ClientConfig::default(), None, None).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn resolve_client_config_ignores_blank_env() {
        let config =
            resolve_client_config(ClientConfig::default(), Some("  ".to_string()), None).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn resolve_client_config_enforces_minimum_timeout() {
        let file = ClientConfig {
            timeout_secs: 0,
            ..ClientConfig::default()
        };
        let config = resolve_client_config(file, None, None).unwrap();
        assert_eq!(config.timeout_secs, MIN_TIMEOUT_SECS);
    }

    #[test]
    fn resolve_base_url_strips_trailing_slashes() {
        assert_eq!(
            resolve_base_url("http://localhost:8000/api//").unwrap(),
            "http://localhost:8000/api"
        );
    }

    #[test]
    fn resolve_base_url_rejects_bad_input() {
        assert!(resolve_base_url("localhost:8000").is_err());
        assert!(resolve_base_url("ftp://example.com/api").is_err());
        assert!(resolve_base_url("").is_err());
    }

    #[test]
    fn resolve_base_url_rejects_query_and_fragment() {
        for url in ["http://h/api?k=v", "http://h/api#top", "http://h/api?"] {
            let err = resolve_base_url(url).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidBaseUrl { url: ref bad, .. } if bad == url),
                "{url} should be rejected, got {err}"
            );
        }
    }
}
