use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub google_maps_api_key: String,
    pub environment: String,
    pub enable_logging: bool,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
            map_config: MapConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 20.5937,
            default_center_lng: 78.9629,
            default_zoom: 8.0,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    /// (baked in by build.rs from .env).
    pub fn from_env() -> Self {
        Self {
            google_maps_api_key: option_env!("GOOGLE_MAPS_API_KEY")
                .unwrap_or("").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("20.5937").parse().unwrap_or(20.5937),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("78.9629").parse().unwrap_or(78.9629),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("8.0").parse().unwrap_or(8.0),
            },
        }
    }

    /// Checks whether console logging is enabled
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Gets the Google Maps credential
    pub fn maps_api_key(&self) -> &str {
        &self.google_maps_api_key
    }
}

/// Slice of the configuration the page shell hands to the planner component.
/// The planner never reads the environment itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub maps_api_key: String,
    pub map: MapConfig,
}

impl From<&AppConfig> for PlannerConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            maps_api_key: config.maps_api_key().to_string(),
            map: config.map_config.clone(),
        }
    }
}

// Global static configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
