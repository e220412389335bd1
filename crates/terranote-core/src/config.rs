//! Configuration for the terranote annotation core.
//!
//! Supports loading from YAML files, environment variable overrides
//! (`TERRANOTE__` prefix), and validation of all settings. The initial
//! camera and terrain values default to the Colorado high country the map
//! opens on.

use crate::error::{ConfigError, Result};
use crate::types::{LngLat, Viewport};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::Level;

/// Main application configuration.
///
/// # Examples
///
/// ```
/// use terranote_core::config::AppConfig;
///
/// let config = AppConfig::default();
/// config.validate().unwrap();
/// assert_eq!(config.search.fly_zoom, 12.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Application-wide settings
    #[serde(default)]
    pub app: ApplicationConfig,

    /// Map engine settings
    #[serde(default)]
    pub map: MapConfig,

    /// Search-to-navigation settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Annotation focus settings
    #[serde(default)]
    pub focus: FocusConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::load_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&contents)
    }

    /// Loads configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| {
            ConfigError::InvalidFormat {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Loads configuration from a file with environment variable overrides
    /// (`TERRANOTE__` prefix, `__` separator).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or merged.
    pub fn from_config_builder<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config = config::Config::builder()
            .add_source(config::File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix("TERRANOTE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::load_failed(path.display().to_string(), e.to_string()))?;

        config.try_deserialize().map_err(|e| {
            ConfigError::InvalidFormat {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Loads configuration from environment variables alone, falling back to
    /// defaults for everything not set.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("TERRANOTE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::load_failed("environment", e.to_string()))?;

        config.try_deserialize().map_err(|e| {
            ConfigError::InvalidFormat {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Validates the configuration.
    ///
    /// Checks numeric ranges, the initial camera position, and the log
    /// level. The map credential is deliberately NOT checked here; it is
    /// resolved at engine bootstrap, the one place its absence is fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        if !self.map.initial.center().in_range() {
            return Err(ConfigError::invalid_value(
                "map.initial",
                "center is outside the valid longitude/latitude range",
            )
            .into());
        }

        if self.map.initial.zoom < 0.0 {
            return Err(ConfigError::invalid_value("map.initial.zoom", "must be non-negative").into());
        }

        if self.search.fly_zoom < 0.0 {
            return Err(ConfigError::invalid_value("search.fly_zoom", "must be non-negative").into());
        }

        if self.focus.padding < 0.0 {
            return Err(ConfigError::invalid_value("focus.padding", "must be non-negative").into());
        }

        if self.focus.min_span <= 0.0 {
            return Err(ConfigError::invalid_value("focus.min_span", "must be positive").into());
        }

        self.logging.parse_level()?;

        Ok(())
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_app_name() -> String {
    "terranote".to_string()
}

fn default_environment() -> String {
    "production".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            environment: default_environment(),
        }
    }
}

/// Map engine settings: style, credential, opening camera, terrain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Style document URL for the engine
    #[serde(default = "default_style_url")]
    pub style_url: String,

    /// Provider access token; absence is fatal at engine bootstrap
    pub access_token: Option<String>,

    /// Camera position the map opens on
    #[serde(default)]
    pub initial: CameraDefaults,

    /// Terrain/DEM settings
    #[serde(default)]
    pub terrain: TerrainConfig,
}

fn default_style_url() -> String {
    "mapbox://styles/mapbox-map-design/ckhqrf2tz0dt119ny6azh975y".to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            style_url: default_style_url(),
            access_token: None,
            initial: CameraDefaults::default(),
            terrain: TerrainConfig::default(),
        }
    }
}

impl MapConfig {
    /// Returns the configured access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if no token is configured
    /// or it is empty.
    pub fn credential(&self) -> Result<&str> {
        match self.access_token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::MissingCredential.into()),
        }
    }
}

/// Opening camera position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraDefaults {
    /// Longitude in decimal degrees
    #[serde(default = "default_initial_lng")]
    pub lng: f64,

    /// Latitude in decimal degrees
    #[serde(default = "default_initial_lat")]
    pub lat: f64,

    /// Zoom level
    #[serde(default = "default_initial_zoom")]
    pub zoom: f64,

    /// Camera pitch in degrees
    #[serde(default = "default_initial_pitch")]
    pub pitch: f64,

    /// Camera bearing in degrees
    #[serde(default = "default_initial_bearing")]
    pub bearing: f64,
}

fn default_initial_lng() -> f64 {
    -106.4798
}

fn default_initial_lat() -> f64 {
    39.468
}

fn default_initial_zoom() -> f64 {
    13.0
}

fn default_initial_pitch() -> f64 {
    70.0
}

fn default_initial_bearing() -> f64 {
    180.0
}

impl Default for CameraDefaults {
    fn default() -> Self {
        Self {
            lng: default_initial_lng(),
            lat: default_initial_lat(),
            zoom: default_initial_zoom(),
            pitch: default_initial_pitch(),
            bearing: default_initial_bearing(),
        }
    }
}

impl CameraDefaults {
    /// Returns the configured center as a coordinate pair.
    pub fn center(&self) -> LngLat {
        LngLat::new(self.lng, self.lat)
    }

    /// Returns the configured position as a viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.center(), self.zoom)
    }
}

/// Terrain/DEM settings for the 3D relief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// DEM tile size in pixels
    #[serde(default = "default_dem_tile_size")]
    pub dem_tile_size: u32,

    /// Maximum DEM zoom level
    #[serde(default = "default_dem_max_zoom")]
    pub dem_max_zoom: u32,

    /// Vertical exaggeration factor
    #[serde(default = "default_exaggeration")]
    pub exaggeration: f64,
}

fn default_dem_tile_size() -> u32 {
    512
}

fn default_dem_max_zoom() -> u32 {
    14
}

fn default_exaggeration() -> f64 {
    1.5
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            dem_tile_size: default_dem_tile_size(),
            dem_max_zoom: default_dem_max_zoom(),
            exaggeration: default_exaggeration(),
        }
    }
}

/// Search-to-navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Zoom level a resolved search flies to
    #[serde(default = "default_fly_zoom")]
    pub fly_zoom: f64,

    /// Whether the fly animation may be skipped for reduced-motion users
    #[serde(default = "default_true")]
    pub skippable_motion: bool,
}

fn default_fly_zoom() -> f64 {
    12.0
}

fn default_true() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fly_zoom: default_fly_zoom(),
            skippable_motion: default_true(),
        }
    }
}

/// Annotation focus settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Visual padding around the fitted bounds, in pixel-equivalent units
    #[serde(default = "default_focus_padding")]
    pub padding: f64,

    /// Minimum bounding-box span in degrees; the fallback extent for
    /// zero-area regions
    #[serde(default = "default_min_span")]
    pub min_span: f64,
}

fn default_focus_padding() -> f64 {
    10.0
}

fn default_min_span() -> f64 {
    0.001
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            padding: default_focus_padding(),
            min_span: default_min_span(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "text" or "json"
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> LogFormat {
    LogFormat::Text
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Parses the log level string to a tracing Level.
    pub fn parse_level(&self) -> Result<Level> {
        self.level
            .parse()
            .map_err(|_| {
                ConfigError::invalid_value(
                    "logging.level",
                    format!("Invalid log level: {}", self.level),
                )
                .into()
            })
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format
    Text,
    /// JSON format for structured logging
    Json,
}
