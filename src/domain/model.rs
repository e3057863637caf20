use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Continents visited by a tour, in visiting order. The tour wraps around
/// this list until it is back on the start city's continent.
pub const CONTINENT_SEQUENCE: [&str; 6] = [
    "oceania",
    "asia",
    "africa",
    "south-america",
    "north-america",
    "europe",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A catalog city. Only `id`, `name`, `cont_id` and `location` drive the
/// tour; the other fields are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    pub cont_id: String,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub airports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reg_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub con: Option<i64>,
}

impl City {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cont_id: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cont_id: cont_id.into(),
            location,
            country_name: None,
            iata: None,
            rank: None,
            country_id: None,
            dest: None,
            airports: Vec::new(),
            images: Vec::new(),
            popularity: None,
            reg_id: None,
            sub_id: None,
            ter_id: None,
            con: None,
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.id, self.name, self.cont_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContinentBounds {
    pub min_lat: f64,
    pub max_lat: f64,
}

impl ContinentBounds {
    /// Pulls `lat` into `[min_lat, max_lat]`.
    pub fn required_latitude(&self, lat: f64) -> f64 {
        if lat < self.min_lat {
            self.min_lat
        } else if lat <= self.max_lat {
            lat
        } else {
            self.max_lat
        }
    }
}

/// All cities keyed by their catalog id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityCatalog {
    cities: HashMap<String, City>,
}

impl CityCatalog {
    pub fn new(cities: HashMap<String, City>) -> Self {
        Self { cities }
    }

    /// Case-insensitive lookup: the id is trimmed and upper-cased first.
    pub fn find(&self, id: &str) -> Option<&City> {
        self.cities.get(&id.trim().to_uppercase())
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl FromIterator<City> for CityCatalog {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        Self {
            cities: iter.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }
}
