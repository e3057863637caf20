pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::path::LatitudeMode;
#[cfg(feature = "cli")]
use crate::core::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_PATH: &str = "/tmp/escape/cities.json";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "continent-tour")]
#[command(about = "Tours one city per continent and reports the distance travelled")]
pub struct CliConfig {
    /// City catalog JSON file [default: /tmp/escape/cities.json]
    #[arg(long)]
    pub catalog: Option<String>,

    /// Starting city id; read from stdin when omitted
    #[arg(long)]
    pub city: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Select against the latitude clamped into each continent's bounds
    #[arg(long)]
    pub clamp_latitude: bool,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log time and memory per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Fills in whatever the command line left unset from a TOML file.
    /// Flags given on the command line win.
    pub fn merge_file(&mut self, file: &toml_config::TomlConfig) {
        if self.catalog.is_none() {
            self.catalog = file.catalog_path().map(str::to_string);
        }
        if !self.clamp_latitude {
            self.clamp_latitude = file.latitude_mode() == LatitudeMode::Clamped;
        }
        if self.format.is_none() {
            self.format = Some(file.output_format());
        }
        self.monitor |= file.monitoring_enabled();
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_path(&self) -> &str {
        self.catalog.as_deref().unwrap_or(DEFAULT_CATALOG_PATH)
    }

    fn latitude_mode(&self) -> LatitudeMode {
        if self.clamp_latitude {
            LatitudeMode::Clamped
        } else {
            LatitudeMode::Raw
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog", self.catalog_path())?;
        if let Some(city) = &self.city {
            validate_non_empty_string("city", city)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
