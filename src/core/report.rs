use crate::core::path::{LatitudeMode, Leg, TraversalPath};
use crate::domain::model::City;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A finished tour, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub latitude_mode: LatitudeMode,
    pub stops: Vec<&'a City>,
    pub legs: Vec<Leg>,
    pub total_distance_km: f64,
}

impl<'a> TraversalReport<'a> {
    pub fn new(path: TraversalPath<'a>, latitude_mode: LatitudeMode) -> Self {
        Self {
            generated_at: Utc::now(),
            latitude_mode,
            stops: path.stops,
            legs: path.legs,
            total_distance_km: path.total_distance_km,
        }
    }

    /// `id (name, continent)` per stop, joined by ` -> `.
    pub fn path_line(&self) -> String {
        self.stops
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    pub fn distance_line(&self) -> String {
        format!("Distance travelled: {:.6} KMS", self.total_distance_km)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl fmt::Display for TraversalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.path_line())?;
        write!(f, "{}", self.distance_line())
    }
}
