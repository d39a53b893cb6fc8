use super::CatalogStore;
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// JSON file holding the whole catalog.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, source: std::io::Error) -> ShelfError {
        ShelfError::StorageUnavailable {
            path: self.path.clone(),
            source,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("catalog");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

/// Pretty JSON with four-space indentation; non-ASCII text is written as-is.
fn encode(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    catalog.serialize(&mut ser)?;
    Ok(buf)
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "catalog file not found, starting empty");
                return Ok(Catalog::new());
            }
            Err(e) => return Err(self.unavailable(e)),
        };

        if content.trim().is_empty() {
            debug!(path = %self.path.display(), "catalog file is empty");
            return Ok(Catalog::new());
        }

        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| ShelfError::StorageCorrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        debug!(path = %self.path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        let content = encode(catalog)?;

        // Atomic replace: write next to the target, then rename over it
        let tmp = self.tmp_path();
        fs::write(&tmp, content).map_err(|e| self.unavailable(e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(self.unavailable(e));
        }

        debug!(path = %self.path.display(), records = catalog.len(), "catalog saved");
        Ok(())
    }
}
