use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Database filename used when neither the flag nor the config names one.
pub const DEFAULT_DATABASE_FILE: &str = "expenses.db";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpendlogConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("spendlog.toml")
}

/// Load the optional config file. A missing file is not an error.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<SpendlogConfig>> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SpendlogConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_database_key() {
        let config: SpendlogConfig = toml::from_str("database = \"ledger.db\"").unwrap();
        assert_eq!(config.database.as_deref(), Some("ledger.db"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: SpendlogConfig = toml::from_str("").unwrap();
        assert_eq!(config.database, None);
    }

    #[test]
    fn test_missing_config_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spendlog.toml");
        assert!(load_config(Some(&path)).unwrap().is_none());
    }
}
