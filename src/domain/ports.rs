use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    /// Recursively creates `path`. Succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Creates or truncates the file at `path` and writes `data` into it.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}
