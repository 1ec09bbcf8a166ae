use crate::domain::ports::Storage;
use crate::utils::error::{Result, ScaffoldError};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage with every path resolved against `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::create_dir_all(&full_path).map_err(|source| ScaffoldError::CreateInputDir {
            path: full_path,
            source,
        })
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        let write_err = |source| ScaffoldError::WriteSource {
            path: full_path.clone(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        fs::write(&full_path, data).map_err(write_err)
    }
}
