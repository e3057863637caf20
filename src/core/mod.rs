pub mod engine;
pub mod geo;
pub mod index;
pub mod path;
pub mod report;

pub use crate::domain::model::{City, CityCatalog, ContinentBounds, Location};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
