use crate::core::{MeetOptions, OptionsStore};
use crate::domain::ports::StoredOptions;
use crate::utils::error::{MeetsError, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// 將設定紀錄存成 TOML 檔
#[derive(Debug, Clone)]
pub struct FileOptionsStore {
    path: PathBuf,
}

impl FileOptionsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OptionsStore for FileOptionsStore {
    async fn load(&self) -> Result<Option<StoredOptions>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stored = toml::from_str(&content).map_err(|e| MeetsError::ConfigError {
            message: format!(
                "Failed to parse options file {}: {}",
                self.path.display(),
                e
            ),
        })?;
        Ok(Some(stored))
    }

    async fn save(&self, options: &MeetOptions) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = toml::to_string(&StoredOptions::from(*options)).map_err(|e| {
            MeetsError::ConfigError {
                message: format!("Failed to serialize options: {}", e),
            }
        })?;
        tokio::fs::write(&self.path, content).await?;
        tracing::debug!("Options saved to {}", self.path.display());
        Ok(())
    }
}

/// 記憶體內的設定紀錄，給測試與自行持久化的主機使用
#[derive(Debug, Clone, Default)]
pub struct MemoryOptionsStore {
    stored: Arc<Mutex<Option<StoredOptions>>>,
    saves: Arc<Mutex<usize>>,
}

impl MemoryOptionsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored(stored: StoredOptions) -> Self {
        Self {
            stored: Arc::new(Mutex::new(Some(stored))),
            saves: Arc::new(Mutex::new(0)),
        }
    }

    pub fn snapshot(&self) -> Option<StoredOptions> {
        self.stored.lock().ok().and_then(|stored| *stored)
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().map(|saves| *saves).unwrap_or(0)
    }
}

impl OptionsStore for MemoryOptionsStore {
    async fn load(&self) -> Result<Option<StoredOptions>> {
        Ok(self.snapshot())
    }

    async fn save(&self, options: &MeetOptions) -> Result<()> {
        let mut stored = self.stored.lock().map_err(|_| MeetsError::ConfigError {
            message: "options store lock poisoned".to_string(),
        })?;
        *stored = Some(StoredOptions::from(*options));
        if let Ok(mut saves) = self.saves.lock() {
            *saves += 1;
        }
        Ok(())
    }
}
