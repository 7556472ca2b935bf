use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError, locale::ports::LocalePersistencePort,
};

/// Locale preference stored as a bare tag in a single file, the fixed
/// storage key of this deployment.
#[derive(Debug, Clone)]
pub struct FileLocalePersistence {
    path: PathBuf,
}

impl FileLocalePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LocalePersistencePort for FileLocalePersistence {
    async fn load(&self) -> Result<Option<String>, CoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(tag) => Ok(Some(tag)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                error!("Failed to read locale preference: {}", e);
                Err(CoreError::PersistenceFailed)
            }
        }
    }

    async fn save(&self, tag: String) -> Result<(), CoreError> {
        tokio::fs::write(&self.path, tag).await.map_err(|e| {
            error!("Failed to persist locale preference: {}", e);
            CoreError::PersistenceFailed
        })
    }
}
