pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::JsonFileCatalog, toml_config::TomlConfig};

pub use core::{
    engine::TourEngine,
    index::ContinentIndex,
    path::{find_path, LatitudeMode, PathBuilder, TraversalPath},
    report::{OutputFormat, TraversalReport},
};
pub use domain::model::{City, CityCatalog, ContinentBounds, Location, CONTINENT_SEQUENCE};
pub use utils::error::{Result, TourError};
