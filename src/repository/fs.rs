use super::Repository;
use crate::error::{DolistError, Result};
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed repository: the whole collection lives in one JSON file as an
/// array, so insertion order survives reload.
pub struct FileRepository {
    path: PathBuf,
}

impl FileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// User-wide default location for the items file
    /// (e.g. `~/.local/share/dolist/items.json` on Linux).
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "dolist").ok_or_else(|| {
            DolistError::Repository("No home directory available".to_string())
        })?;
        Ok(dirs.data_dir().join("items.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(DolistError::Io)?;
            }
        }
        Ok(())
    }
}

impl Repository for FileRepository {
    fn load_items(&self) -> Result<Vec<Item>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(DolistError::Io)?;
        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(DolistError::Serialization)?;
        Ok(items)
    }

    fn save_items(&mut self, items: &[Item]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content =
            serde_json::to_string_pretty(items).map_err(DolistError::Serialization)?;
        fs::write(&self.path, content).map_err(DolistError::Io)?;
        Ok(())
    }
}
