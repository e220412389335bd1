//! Startup document for the black-box map engine.
//!
//! The engine renders tiles and terrain on its own; all it needs from this
//! side is the style, the provider credential, and the opening camera and
//! terrain settings. Building the document is the one startup step that can
//! fail: without a credential the map cannot render at all.

use serde::{Deserialize, Serialize};
use terranote_core::config::{AppConfig, CameraDefaults, TerrainConfig};
use terranote_core::error::{Result, TerranoteError};
use terranote_core::types::Viewport;

/// Everything the embedder hands the map engine at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineBootstrap {
    /// Provider access token
    pub access_token: String,
    /// Style document URL
    pub style_url: String,
    /// Opening camera position
    pub camera: CameraDefaults,
    /// Terrain/DEM settings
    pub terrain: TerrainConfig,
}

impl EngineBootstrap {
    /// Builds the bootstrap document from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`terranote_core::error::ConfigError::MissingCredential`]
    /// when no access token is configured. This is the fatal startup error:
    /// callers are expected to abort, not recover.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let access_token = config.map.credential()?.to_string();

        Ok(Self {
            access_token,
            style_url: config.map.style_url.clone(),
            camera: config.map.initial.clone(),
            terrain: config.map.terrain.clone(),
        })
    }

    /// Returns the opening camera position as a viewport.
    pub fn initial_viewport(&self) -> Viewport {
        self.camera.viewport()
    }

    /// Serializes the document for the engine side.
    ///
    /// # Errors
    ///
    /// Returns an internal error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TerranoteError::Internal(format!("bootstrap serialization: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use terranote_core::error::{ConfigError, TerranoteError};

    #[test]
    fn test_missing_credential_is_fatal() {
        let config = AppConfig::default();
        let result = EngineBootstrap::from_config(&config);
        assert!(matches!(
            result,
            Err(TerranoteError::Config(ConfigError::MissingCredential))
        ));
    }

    #[test]
    fn test_bootstrap_carries_map_settings() {
        let mut config = AppConfig::default();
        config.map.access_token = Some("pk.test-token".to_string());

        let bootstrap = EngineBootstrap::from_config(&config).unwrap();
        assert_eq!(bootstrap.access_token, "pk.test-token");
        assert_eq!(bootstrap.style_url, config.map.style_url);
        assert_eq!(bootstrap.terrain.exaggeration, 1.5);

        let viewport = bootstrap.initial_viewport();
        assert_eq!(viewport.zoom, 13.0);
        assert_eq!(viewport.center.lng, -106.4798);
    }

    #[test]
    fn test_bootstrap_serializes_for_the_engine() {
        let mut config = AppConfig::default();
        config.map.access_token = Some("pk.test-token".to_string());

        let json = EngineBootstrap::from_config(&config)
            .unwrap()
            .to_json()
            .unwrap();
        assert!(json.contains("style_url"));
        assert!(json.contains("exaggeration"));
    }
}
