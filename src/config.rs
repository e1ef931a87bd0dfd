use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub topics: TopicsConfig,
    #[serde(default)]
    pub open: OpenConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TopicsConfig {
    /// Index shipped alongside the binary; tried first.
    #[serde(default)]
    pub bundled: Option<PathBuf>,
    /// Tried when the bundled index is absent or unreadable.
    #[serde(default)]
    pub fallback: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OpenConfig {
    /// Program used to open links instead of the platform launcher.
    #[serde(default)]
    pub command: Option<String>,
}

impl Config {
    /// Configuration used when no config file exists.
    pub fn minimal() -> Self {
        Self::default()
    }

    /// Topic sources in lookup order.
    pub fn topic_sources(&self) -> Vec<PathBuf> {
        let mut sources = Vec::new();
        if let Some(ref bundled) = self.topics.bundled {
            sources.push(bundled.clone());
        }
        match self.topics.fallback {
            Some(ref fallback) => sources.push(fallback.clone()),
            None => {
                if let Some(path) = default_fallback() {
                    sources.push(path);
                }
            }
        }
        sources
    }
}

/// `$HOME/Insight/Insight.json`
fn default_fallback() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join("Insight").join("Insight.json"))
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if let Some(ref cmd) = config.open.command {
        if cmd.trim().is_empty() {
            anyhow::bail!("open.command must not be empty");
        }
    }

    Ok(config)
}

/// Load the config at `path`, or fall back to [`Config::minimal`] when the
/// file does not exist. A file that exists but does not parse is an error.
pub fn load_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        Ok(Config::minimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("spot.toml");
        fs::write(
            &path,
            r#"[topics]
bundled = "/opt/spot/Insight.json"
fallback = "/tmp/Insight.json"

[open]
command = "firefox"
"#,
        )
        .unwrap();

        let cfg = load_config(&path).unwrap();
        assert_eq!(
            cfg.topic_sources(),
            vec![
                PathBuf::from("/opt/spot/Insight.json"),
                PathBuf::from("/tmp/Insight.json")
            ]
        );
        assert_eq!(cfg.open.command.as_deref(), Some("firefox"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("spot.toml");
        fs::write(&path, "").unwrap();

        let cfg = load_config(&path).unwrap();
        assert!(cfg.topics.bundled.is_none());
        assert!(cfg.open.command.is_none());
    }

    #[test]
    fn test_empty_open_command_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("spot.toml");
        fs::write(&path, "[open]\ncommand = \"  \"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("open.command"));
    }

    #[test]
    fn test_missing_file_is_minimal() {
        let tmp = TempDir::new().unwrap();
        let cfg = load_or_minimal(&tmp.path().join("absent.toml")).unwrap();
        assert!(cfg.topics.bundled.is_none());
    }
}
