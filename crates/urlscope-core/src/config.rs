use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Init-time overrides, read once when a scope is built.
///
/// These correspond to the page-level host and template globals the hosting
/// site may define: `host` short-circuits the ambient host (and collapses the
/// site/full URLs to exactly its value), `template` supplies a template path
/// prefix that is otherwise empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overrides {
    /// Host override; also becomes `site_url` and `full_url` verbatim.
    #[serde(default)]
    pub host: Option<String>,
    /// Template path prefix (for sites that use template folders).
    #[serde(default)]
    pub template: Option<String>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlscope")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load overrides from disk, creating a default (empty) file if none exists.
pub fn load_or_init() -> Result<Overrides> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Overrides::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: Overrides = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let cfg = Overrides::default();
        assert!(cfg.host.is_none());
        assert!(cfg.template.is_none());
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = Overrides {
            host: Some("https://cdn.example.net".to_string()),
            template: Some("/themes/classic".to_string()),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Overrides = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let cfg: Overrides = toml::from_str("").unwrap();
        assert_eq!(cfg, Overrides::default());

        let cfg: Overrides = toml::from_str("host = \"example.org\"").unwrap();
        assert_eq!(cfg.host.as_deref(), Some("example.org"));
        assert!(cfg.template.is_none());
    }
}
