use crate::{
    config::StoreConfig,
    domain::Board,
    error::Result,
    storage::{decode, encode, Storage},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-based storage: one JSON document per namespace key
pub struct FileStorage {
    root_path: PathBuf,
    namespace: String,
    pretty: bool,
}

impl FileStorage {
    /// Creates a FileStorage rooted at `data_dir`, using the default namespace
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_dir.as_ref().to_path_buf(),
            namespace: StoreConfig::DEFAULT_NAMESPACE.to_string(),
            pretty: true,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self {
            root_path: config.data_dir.clone(),
            namespace: config.namespace.clone(),
            pretty: config.pretty,
        }
    }

    fn document_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json", self.namespace))
    }

    fn staging_file(&self) -> PathBuf {
        self.root_path.join(format!("{}.json.tmp", self.namespace))
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> Result<Option<Vec<Board>>> {
        let document_file = self.document_file();

        if !document_file.exists() {
            tracing::debug!(path = %document_file.display(), "no stored board document");
            return Ok(None);
        }

        let contents = fs::read_to_string(&document_file).await?;
        Ok(Some(decode(&contents)?))
    }

    async fn save(&self, boards: &[Board]) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = encode(boards, self.pretty)?;
        let staging = self.staging_file();

        // Rename over the old document so readers never see a partial write
        fs::write(&staging, json).await?;
        fs::rename(&staging, self.document_file()).await?;

        Ok(())
    }
}
