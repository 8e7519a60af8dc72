use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub catalog: CatalogEntry,
}

/// Remote location of the catalog database.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub owner: String,
    pub repo: String,
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_path() -> String {
    "sql.db".into()
}

/// Config file path: `~/.config/appcat/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("appcat").join("config.toml"))
}

/// Load the configuration, failing with guidance when it is missing or
/// malformed. There is no built-in default remote to fall back to.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = config_path().context("could not determine config directory")?;

    let contents = std::fs::read_to_string(&path).with_context(|| {
        format!(
            "no catalog configured; create {} with:\n\n\
             [catalog]\n\
             owner = \"<github-owner>\"\n\
             repo = \"<repository>\"\n\
             path = \"sql.db\"",
            path.display()
        )
    })?;

    toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_entry_from_toml() {
        let toml_str = r#"
[catalog]
owner = "acme"
repo = "data"
path = "db/sql.db"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.owner, "acme");
        assert_eq!(config.catalog.repo, "data");
        assert_eq!(config.catalog.path, "db/sql.db");
    }

    #[test]
    fn path_defaults_to_sql_db() {
        let toml_str = r#"
[catalog]
owner = "acme"
repo = "data"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.catalog.path, "sql.db");
    }

    #[test]
    fn missing_owner_is_rejected() {
        let toml_str = r#"
[catalog]
repo = "data"
"#;
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }
}
