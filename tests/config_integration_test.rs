#![cfg(feature = "cli")]

use clap::Parser;
use continent_tour::core::ConfigProvider;
use continent_tour::utils::validation::Validate;
use continent_tour::{CliConfig, JsonFileCatalog, LatitudeMode, OutputFormat, TomlConfig, TourEngine};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const CATALOG: &str = r#"{
  "PER": {"id": "PER", "name": "Perth", "contId": "oceania", "location": {"lat": -31.95, "lon": 115.86}},
  "BKK": {"id": "BKK", "name": "Bangkok", "contId": "asia", "location": {"lat": 13.76, "lon": 100.50}},
  "ACC": {"id": "ACC", "name": "Accra", "contId": "africa", "location": {"lat": 5.60, "lon": -0.19}},
  "SCL": {"id": "SCL", "name": "Santiago", "contId": "south-america", "location": {"lat": -33.45, "lon": -70.67}},
  "YVR": {"id": "YVR", "name": "Vancouver", "contId": "north-america", "location": {"lat": 49.28, "lon": -123.12}},
  "DUB": {"id": "DUB", "name": "Dublin", "contId": "europe", "location": {"lat": 53.35, "lon": -6.26}}
}"#;

#[test]
fn test_toml_file_drives_a_tour() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("cities.json");
    std::fs::write(&catalog_path, CATALOG).unwrap();

    let mut toml_file = NamedTempFile::new().unwrap();
    write!(
        toml_file,
        "[catalog]\npath = \"{}\"\n\n[traversal]\nlatitude_mode = \"clamped\"\n\n[output]\nformat = \"json\"\n",
        catalog_path.display()
    )
    .unwrap();

    let file = TomlConfig::from_file(toml_file.path()).unwrap();
    assert!(file.validate().is_ok());

    let mut config = CliConfig::parse_from(["continent-tour", "--city", "bkk"]);
    config.merge_file(&file);
    assert!(config.validate().is_ok());
    assert_eq!(config.latitude_mode(), LatitudeMode::Clamped);
    assert_eq!(config.output_format(), OutputFormat::Json);

    let engine = TourEngine::from_source(&JsonFileCatalog::new(config.catalog_path())).unwrap();
    let report = engine
        .tour(config.city.as_deref().unwrap(), config.latitude_mode())
        .unwrap();
    let rendered = report.render(config.output_format()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(json["latitude_mode"], "clamped");
    let stops: Vec<&str> = json["stops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(stops, vec!["BKK", "ACC", "SCL", "YVR", "DUB", "PER", "BKK"]);
}

#[test]
fn test_missing_catalog_file_from_cli() {
    let config = CliConfig::parse_from(["continent-tour", "--catalog", "/no/such/cities.json"]);
    assert!(config.validate().is_ok());
    assert!(TourEngine::from_source(&JsonFileCatalog::new(config.catalog_path())).is_err());
}
