use crate::core::{CatalogSource, CityCatalog};
use crate::utils::error::{Result, TourError};
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the catalog from a JSON file holding an object of city id -> city.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_error(&self, message: impl ToString) -> TourError {
        TourError::CatalogLoadError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl CatalogSource for JsonFileCatalog {
    fn load(&self) -> Result<CityCatalog> {
        tracing::debug!("Reading city catalog from {}", self.path.display());
        let data = fs::read(&self.path).map_err(|e| self.load_error(e))?;
        let catalog: CityCatalog =
            serde_json::from_slice(&data).map_err(|e| self.load_error(e))?;
        Ok(catalog)
    }
}
