use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Failed to load city catalog from '{path}': {message}")]
    CatalogLoadError { path: String, message: String },

    #[error("Unknown city: {id}")]
    UnknownCityError { id: String },

    #[error("No city data for continent: {continent}")]
    MissingContinentDataError { continent: String },

    #[error("Continent '{continent}' of city {city} is not part of the tour sequence")]
    ContinentNotInSequenceError { city: String, continent: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Catalog,
    Lookup,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TourError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::IoError(_) => ErrorCategory::Io,
            TourError::SerializationError(_) | TourError::CatalogLoadError { .. } => {
                ErrorCategory::Catalog
            }
            TourError::UnknownCityError { .. }
            | TourError::MissingContinentDataError { .. }
            | TourError::ContinentNotInSequenceError { .. } => ErrorCategory::Lookup,
            TourError::ConfigError { .. }
            | TourError::ConfigValidationError { .. }
            | TourError::MissingConfigError { .. }
            | TourError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Catalog => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            // the catalog is fine, a different start city may work
            ErrorCategory::Lookup => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("Could not read input: {}", e),
            TourError::SerializationError(e) => format!("City data is not valid JSON: {}", e),
            TourError::CatalogLoadError { path, .. } => {
                format!("Could not load the city catalog at {}", path)
            }
            TourError::UnknownCityError { id } => format!("No city with id '{}' exists", id),
            TourError::MissingContinentDataError { continent } => {
                format!("The catalog has no cities in {}", continent)
            }
            TourError::ContinentNotInSequenceError { city, continent } => format!(
                "{} is in {}, which the tour does not visit",
                city, continent
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TourError::IoError(_) => "Check that the input is readable",
            TourError::SerializationError(_) | TourError::CatalogLoadError { .. } => {
                "Check the catalog path and that the file holds a JSON object of cities"
            }
            TourError::UnknownCityError { .. } => "Use a city id present in the catalog",
            TourError::MissingContinentDataError { .. } => {
                "Add at least one city for every continent of the tour"
            }
            TourError::ContinentNotInSequenceError { .. } => {
                "Start from a city in oceania, asia, africa, south-america, north-america or europe"
            }
            _ => "Review the command line flags and configuration file",
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_are_medium() {
        let err = TourError::UnknownCityError {
            id: "XYZ".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Lookup);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("XYZ"));
    }

    #[test]
    fn test_catalog_errors_are_critical() {
        let err = TourError::CatalogLoadError {
            path: "/nope.json".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(
            err.to_string(),
            "Failed to load city catalog from '/nope.json': not found"
        );
    }
}
