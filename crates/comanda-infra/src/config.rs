//! Configuration and data directory resolution.
//!
//! Reads `config.toml` from the data directory (`~/.comanda/` by
//! default) and deserializes it into [`AppConfig`]. Falls back to
//! defaults when the file is missing or malformed; a bad config file
//! should never keep the restaurant from opening.

use std::path::{Path, PathBuf};

use comanda_types::config::AppConfig;

/// Resolve the data directory: `COMANDA_DATA_DIR` env var, falling back
/// to `~/.comanda`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("COMANDA_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".comanda")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - Missing file: returns [`AppConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_app_config(data_dir: &Path) -> AppConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config.toml at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_app_config(tmp.path()).await;
        assert_eq!(config.model, "deepseek-chat");
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
model = "deepseek-reasoner"
temperature = 0.3
menu_path = "/srv/menu.txt"
gallery_columns = 4
"#,
        )
        .await
        .unwrap();

        let config = load_app_config(tmp.path()).await;
        assert_eq!(config.model, "deepseek-reasoner");
        assert_eq!(config.menu_path, "/srv/menu.txt");
        assert_eq!(config.gallery_columns, 4);
        // Unset fields keep their defaults.
        assert_eq!(config.max_tokens, 1024);
    }

    #[tokio::test]
    async fn invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_app_config(tmp.path()).await;
        assert_eq!(config.model, "deepseek-chat");
    }
}
