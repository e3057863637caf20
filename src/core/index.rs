use crate::domain::model::{City, CityCatalog, ContinentBounds};
use crate::utils::error::{Result, TourError};
use std::collections::{BTreeMap, HashMap};

/// Cities of one continent, keyed and ordered by city id.
pub type ContinentCities = BTreeMap<String, City>;

/// Cities grouped by continent plus each continent's latitude bounds.
/// Built once from the catalog and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct ContinentIndex {
    continent_cities: HashMap<String, ContinentCities>,
    continent_bounds: HashMap<String, ContinentBounds>,
}

impl ContinentIndex {
    pub fn build(catalog: &CityCatalog) -> Self {
        let mut continent_cities: HashMap<String, ContinentCities> = HashMap::new();
        for city in catalog.cities() {
            continent_cities
                .entry(city.cont_id.clone())
                .or_default()
                .insert(city.id.clone(), city.clone());
        }

        let continent_bounds = continent_cities
            .iter()
            .map(|(continent, cities)| {
                let bounds = cities.values().fold(
                    ContinentBounds {
                        min_lat: f64::INFINITY,
                        max_lat: f64::NEG_INFINITY,
                    },
                    |acc, city| ContinentBounds {
                        min_lat: acc.min_lat.min(city.location.lat),
                        max_lat: acc.max_lat.max(city.location.lat),
                    },
                );
                (continent.clone(), bounds)
            })
            .collect();

        tracing::debug!(
            "Indexed {} cities across {} continents",
            catalog.len(),
            continent_cities.len()
        );

        Self {
            continent_cities,
            continent_bounds,
        }
    }

    pub fn cities(&self, continent: &str) -> Option<&ContinentCities> {
        self.continent_cities.get(continent)
    }

    pub fn bounds(&self, continent: &str) -> Option<ContinentBounds> {
        self.continent_bounds.get(continent).copied()
    }

    /// Bounds and cities together, or `MissingContinentDataError`.
    pub fn require(&self, continent: &str) -> Result<(ContinentBounds, &ContinentCities)> {
        match (self.bounds(continent), self.cities(continent)) {
            (Some(bounds), Some(cities)) if !cities.is_empty() => Ok((bounds, cities)),
            _ => Err(TourError::MissingContinentDataError {
                continent: continent.to_string(),
            }),
        }
    }

    pub fn continents(&self) -> impl Iterator<Item = &str> {
        self.continent_cities.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.continent_cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.continent_cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Location;

    fn city(id: &str, continent: &str, lat: f64) -> City {
        City::new(id, id, continent, Location::new(lat, 0.0))
    }

    #[test]
    fn test_groups_cities_and_computes_bounds() {
        let catalog: CityCatalog = vec![
            city("SYD", "oceania", -33.8),
            city("AKL", "oceania", -36.8),
            city("POM", "oceania", -9.4),
            city("TYO", "asia", 35.6),
        ]
        .into_iter()
        .collect();

        let index = ContinentIndex::build(&catalog);

        assert_eq!(index.len(), 2);
        assert_eq!(index.cities("oceania").map(|c| c.len()), Some(3));
        let bounds = index.bounds("oceania").unwrap();
        assert_eq!(bounds.min_lat, -36.8);
        assert_eq!(bounds.max_lat, -9.4);
    }

    #[test]
    fn test_single_city_continent_has_degenerate_bounds() {
        let catalog: CityCatalog = vec![city("TYO", "asia", 35.6)].into_iter().collect();
        let index = ContinentIndex::build(&catalog);
        let bounds = index.bounds("asia").unwrap();
        assert_eq!(bounds.min_lat, bounds.max_lat);
    }

    #[test]
    fn test_missing_continent_is_an_error() {
        let catalog: CityCatalog = vec![city("TYO", "asia", 35.6)].into_iter().collect();
        let index = ContinentIndex::build(&catalog);

        assert!(index.bounds("africa").is_none());
        match index.require("africa") {
            Err(TourError::MissingContinentDataError { continent }) => {
                assert_eq!(continent, "africa")
            }
            other => panic!("expected missing continent error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let index = ContinentIndex::build(&CityCatalog::default());
        assert!(index.is_empty());
        assert_eq!(index.continents().count(), 0);
    }
}
