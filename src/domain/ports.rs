use crate::core::path::LatitudeMode;
use crate::core::report::OutputFormat;
use crate::domain::model::CityCatalog;
use crate::utils::error::Result;

/// Where the city catalog comes from.
pub trait CatalogSource {
    fn load(&self) -> Result<CityCatalog>;
}

/// An already loaded catalog is its own source.
impl CatalogSource for CityCatalog {
    fn load(&self) -> Result<CityCatalog> {
        Ok(self.clone())
    }
}

pub trait ConfigProvider {
    fn catalog_path(&self) -> &str;
    fn latitude_mode(&self) -> LatitudeMode;
    fn output_format(&self) -> OutputFormat;
    fn monitoring_enabled(&self) -> bool;
}
