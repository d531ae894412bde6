//! Application configuration for Comanda.
//!
//! Deserialized from `config.toml` in the data directory. Every field has
//! a default so a missing or partial file still yields a working setup.

use serde::{Deserialize, Serialize};

/// Default remote model identifier (DeepSeek's chat model).
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Global configuration loaded from `{data_dir}/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote model identifier.
    pub model: String,
    /// Sampling temperature passed to the completion API.
    pub temperature: f64,
    /// Per-reply output token cap.
    pub max_tokens: u32,
    /// Path to the plain-text menu file, relative to the working
    /// directory unless absolute.
    pub menu_path: String,
    /// Directory that image references in the menu resolve against.
    pub image_dir: String,
    /// Column count for gallery rendering.
    pub gallery_columns: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
            menu_path: "menu.txt".to_string(),
            image_dir: ".".to_string(),
            gallery_columns: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.model, "deepseek-chat");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.gallery_columns, 3);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("model = \"deepseek-reasoner\"").unwrap();
        assert_eq!(config.model, "deepseek-reasoner");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.menu_path, "menu.txt");
    }
}
