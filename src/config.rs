use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Directory holding the whole-value JSON blobs (one file per key).
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("./data")
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// Base URL of the Gemini API. Overridable for testing against a stub.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Model used for keyword research (fast, high-volume).
    #[serde(default = "default_model_fast")]
    pub model_fast: String,
    /// Model used for content analysis and strategy (deeper reasoning).
    #[serde(default = "default_model_smart")]
    pub model_smart: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model_fast: default_model_fast(),
            model_smart: default_model_smart(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}
fn default_model_fast() -> String {
    "gemini-2.0-flash-001".to_string()
}
fn default_model_smart() -> String {
    "gemini-2.5-pro".to_string()
}
fn default_timeout_secs() -> u64 {
    120
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3001".to_string()
}

impl Config {
    /// All-defaults configuration, used when no config file is present.
    pub fn minimal() -> Self {
        Self {
            store: StoreConfig::default(),
            generation: GenerationConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.generation.timeout_secs == 0 {
        anyhow::bail!("generation.timeout_secs must be > 0");
    }

    if config.generation.model_fast.is_empty() || config.generation.model_smart.is_empty() {
        anyhow::bail!("generation.model_fast and generation.model_smart must not be empty");
    }

    if config.generation.api_base.is_empty() {
        anyhow::bail!("generation.api_base must not be empty");
    }

    if config.server.bind.is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn minimal_config_has_sane_defaults() {
        let cfg = Config::minimal();
        assert_eq!(cfg.server.bind, "127.0.0.1:3001");
        assert!(cfg.generation.api_base.starts_with("https://"));
        assert!(cfg.generation.timeout_secs > 0);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind = \"0.0.0.0:8080\"\n\n[store]\npath = \"/tmp/seo\"\n"
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0:8080");
        assert_eq!(cfg.store.path, PathBuf::from("/tmp/seo"));
        assert_eq!(cfg.generation.model_fast, "gemini-2.0-flash-001");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generation]\ntimeout_secs = 0\n").unwrap();
        assert!(load_config(file.path()).is_err());
    }
}
