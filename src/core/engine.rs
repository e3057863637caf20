use crate::core::index::ContinentIndex;
use crate::core::path::{find_path, LatitudeMode, PathBuilder};
use crate::core::report::TraversalReport;
use crate::domain::model::CityCatalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// Holds the loaded catalog and its continent index for the whole run.
pub struct TourEngine {
    catalog: CityCatalog,
    index: ContinentIndex,
}

impl TourEngine {
    pub fn new(catalog: CityCatalog) -> Self {
        let index = ContinentIndex::build(&catalog);
        tracing::info!(
            "Loaded {} cities in {} continents",
            catalog.len(),
            index.len()
        );
        Self { catalog, index }
    }

    pub fn from_source<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        let catalog = source.load().inspect_err(|e| {
            tracing::error!("❌ Catalog load failed: {}", e);
        })?;
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &CityCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &ContinentIndex {
        &self.index
    }

    pub fn tour(&self, start_id: &str, mode: LatitudeMode) -> Result<TraversalReport<'_>> {
        let builder = PathBuilder::new(&self.index).with_latitude_mode(mode);
        let path = find_path(&self.catalog, &builder, start_id)?;
        Ok(TraversalReport::new(path, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{City, Location};
    use crate::utils::error::TourError;

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn load(&self) -> Result<CityCatalog> {
            Err(TourError::CatalogLoadError {
                path: "memory".to_string(),
                message: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_engine_from_in_memory_catalog() {
        let catalog: CityCatalog = vec![City::new(
            "SYD",
            "Sydney",
            "oceania",
            Location::new(-33.87, 151.21),
        )]
        .into_iter()
        .collect();

        let engine = TourEngine::from_source(&catalog).unwrap();
        assert_eq!(engine.catalog().len(), 1);
        assert_eq!(engine.index().len(), 1);

        // asia is missing, so the first step fails
        assert!(matches!(
            engine.tour("SYD", LatitudeMode::Raw),
            Err(TourError::MissingContinentDataError { .. })
        ));
    }

    #[test]
    fn test_engine_propagates_load_failure() {
        assert!(matches!(
            TourEngine::from_source(&FailingSource),
            Err(TourError::CatalogLoadError { .. })
        ));
    }
}
