use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::SelectionMask;

fn default_components() -> Vec<String> {
    vec!["all".to_string()]
}

fn default_pretty() -> bool {
    true
}

/// Global configuration loaded from `~/.config/uriparse/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriparseConfig {
    /// Components selected when the CLI is given no explicit mask
    /// (names as accepted by `--only`, e.g. `["protocol", "host"]`).
    #[serde(default = "default_components")]
    pub default_components: Vec<String>,
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for UriparseConfig {
    fn default() -> Self {
        Self {
            default_components: default_components(),
            pretty: default_pretty(),
        }
    }
}

impl UriparseConfig {
    /// Mask built from `default_components`. Unknown names are an error.
    pub fn default_mask(&self) -> Result<SelectionMask> {
        self.default_components
            .join(",")
            .parse::<SelectionMask>()
            .context("invalid default_components in config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uriparse")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UriparseConfig> {
    load_from(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_from(path: &Path) -> Result<UriparseConfig> {
    if !path.exists() {
        let default_cfg = UriparseConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UriparseConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    cfg.default_mask()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = UriparseConfig::default();
        assert_eq!(cfg.default_components, ["all"]);
        assert!(cfg.pretty);
        assert_eq!(cfg.default_mask().unwrap(), SelectionMask::ALL);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UriparseConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UriparseConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_components = ["protocol", "host", "path"]
            pretty = false
        "#;
        let cfg: UriparseConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.pretty);
        assert_eq!(
            cfg.default_mask().unwrap(),
            SelectionMask::PROTOCOL | SelectionMask::HOST | SelectionMask::PATH
        );
    }

    #[test]
    fn config_toml_missing_fields_use_defaults() {
        let cfg: UriparseConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, UriparseConfig::default());
    }

    #[test]
    fn load_from_creates_default_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg, UriparseConfig::default());
        assert!(path.exists());
        assert_eq!(load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn load_from_rejects_unknown_component() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_components = [\"host\", \"scheme\"]\n").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("scheme"));
    }
}
