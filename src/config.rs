//! Store configuration, read from a TOML file.

use crate::{
    error::{KanbanError, Result},
    ids::IdStrategy,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for a persisted board store
///
/// # Examples
///
/// ```
/// use kanboard_core::{config::StoreConfig, ids::IdStrategy};
///
/// let config: StoreConfig = toml::from_str("id_strategy = \"timestamp\"").unwrap();
/// assert_eq!(config.id_strategy, IdStrategy::Timestamp);
/// assert_eq!(config.namespace, "kanbanBoards");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the stored documents
    pub data_dir: PathBuf,

    /// Fixed key the board tree is stored under
    pub namespace: String,

    /// Identifier source for new boards, lists and cards
    pub id_strategy: IdStrategy,

    /// Pretty-print stored documents
    pub pretty: bool,
}

impl StoreConfig {
    pub const DEFAULT_DATA_DIR: &'static str = ".kanboard";
    pub const DEFAULT_NAMESPACE: &'static str = "kanbanBoards";

    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents).map_err(|e| {
            KanbanError::ConfigError(format!("failed to parse '{}': {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.namespace.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "namespace must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            namespace: Self::DEFAULT_NAMESPACE.to_string(),
            id_strategy: IdStrategy::default(),
            pretty: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = StoreConfig::load(temp_dir.path().join("kanboard.toml")).unwrap();

        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.id_strategy, IdStrategy::Uuid);
        assert!(config.pretty);
    }

    #[test]
    fn test_load_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kanboard.toml");
        std::fs::write(
            &path,
            "data_dir = \"/var/lib/boards\"\nnamespace = \"team\"\nid_strategy = \"sequential\"\npretty = false\n",
        )
        .unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/boards"));
        assert_eq!(config.namespace, "team");
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(!config.pretty);
    }

    #[test]
    fn test_invalid_strategy_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kanboard.toml");
        std::fs::write(&path, "id_strategy = \"dice\"\n").unwrap();

        let err = StoreConfig::load(&path).unwrap_err();
        assert!(matches!(err, KanbanError::ConfigError(_)));
    }

    #[test]
    fn test_blank_namespace_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kanboard.toml");
        std::fs::write(&path, "namespace = \"  \"\n").unwrap();

        assert!(StoreConfig::load(&path).is_err());
    }
}
