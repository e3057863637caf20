use crate::core::geo::{haversine_km, truncated_latitude_gap};
use crate::core::index::ContinentIndex;
use crate::domain::model::{City, CityCatalog, CONTINENT_SEQUENCE};
use crate::utils::error::{Result, TourError};
use serde::{Deserialize, Serialize};

/// Which latitude the nearest-city heuristic compares candidates against.
///
/// `Raw` compares against the previous city's latitude as is. The latitude
/// clamped into the target continent's bounds is still computed and traced,
/// but ignored. `Clamped` selects against that clamped value instead. For
/// finite latitudes both modes pick the same city; a NaN latitude is where
/// they part ways.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LatitudeMode {
    #[default]
    Raw,
    Clamped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance_km: f64,
}

/// Cities visited by one tour, in order, starting and ending on the start city.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalPath<'a> {
    pub stops: Vec<&'a City>,
    pub legs: Vec<Leg>,
    pub total_distance_km: f64,
}

impl<'a> TraversalPath<'a> {
    fn starting_at(start: &'a City) -> Self {
        Self {
            stops: vec![start],
            legs: Vec::with_capacity(CONTINENT_SEQUENCE.len()),
            total_distance_km: 0.0,
        }
    }

    fn push(&mut self, city: &'a City) {
        // stops is never empty: it is seeded with the start city
        let previous = self.stops[self.stops.len() - 1];
        let distance_km = haversine_km(previous.location, city.location);
        tracing::debug!(
            "Leg {} -> {}: {:.3} km",
            previous.id,
            city.id,
            distance_km
        );
        self.legs.push(Leg {
            from: previous.id.clone(),
            to: city.id.clone(),
            distance_km,
        });
        self.total_distance_km += distance_km;
        self.stops.push(city);
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

pub struct PathBuilder<'a> {
    index: &'a ContinentIndex,
    mode: LatitudeMode,
}

impl<'a> PathBuilder<'a> {
    pub fn new(index: &'a ContinentIndex) -> Self {
        Self {
            index,
            mode: LatitudeMode::default(),
        }
    }

    pub fn with_latitude_mode(mut self, mode: LatitudeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn latitude_mode(&self) -> LatitudeMode {
        self.mode
    }

    /// Picks the city of `continent` whose whole-degree latitude is closest
    /// to `latitude`. Among equally close cities the lowest id wins.
    pub fn nearest_city(&self, latitude: f64, continent: &str) -> Result<&'a City> {
        let (bounds, cities) = self.index.require(continent)?;

        let required_latitude = bounds.required_latitude(latitude);
        tracing::trace!(
            "{}: latitude {} clamps to {} within [{}, {}]",
            continent,
            latitude,
            required_latitude,
            bounds.min_lat,
            bounds.max_lat
        );

        let target = match self.mode {
            LatitudeMode::Raw => latitude,
            LatitudeMode::Clamped => required_latitude,
        };

        cities
            .values()
            .min_by_key(|city| truncated_latitude_gap(city.location.lat, target))
            .ok_or_else(|| TourError::MissingContinentDataError {
                continent: continent.to_string(),
            })
    }

    /// Walks the continent sequence from `start`'s continent, one city per
    /// continent, and closes the loop back at `start`.
    pub fn build(&self, start: &'a City) -> Result<TraversalPath<'a>> {
        let start_index = CONTINENT_SEQUENCE
            .iter()
            .position(|c| *c == start.cont_id)
            .ok_or_else(|| TourError::ContinentNotInSequenceError {
                city: start.id.clone(),
                continent: start.cont_id.clone(),
            })?;

        tracing::info!("Starting tour at {}", start);

        let n = CONTINENT_SEQUENCE.len();
        let mut path = TraversalPath::starting_at(start);
        for step in 1..n {
            let continent = CONTINENT_SEQUENCE[(start_index + step) % n];
            let previous = path.stops[path.stops.len() - 1];
            let next = self.nearest_city(previous.location.lat, continent)?;
            tracing::debug!("Step {}: {} -> {}", step, continent, next.id);
            path.push(next);
        }
        path.push(start);

        tracing::info!(
            "Tour finished: {} stops, {:.3} km",
            path.len(),
            path.total_distance_km
        );
        Ok(path)
    }
}

/// Looks up `start_id` (case-insensitive) and builds its tour.
pub fn find_path<'a>(
    catalog: &'a CityCatalog,
    builder: &PathBuilder<'a>,
    start_id: &str,
) -> Result<TraversalPath<'a>> {
    let start = catalog
        .find(start_id)
        .ok_or_else(|| TourError::UnknownCityError {
            id: start_id.trim().to_uppercase(),
        })?;
    builder.build(start)
}
