//! # Unified Configuration System
//!
//! Typed configuration for the engine loop, the camera and the collision
//! response. Every struct has sensible defaults so a missing file or a
//! partial file still yields a usable configuration.
//!
//! ## Configuration Categories
//!
//! - **Engine Config**: log level, real-time speed, fixed tick length
//! - **Camera Config**: movement speed, look sensitivities, projection
//! - **Collision Config**: collision response toggles and diagnostics

use serde::{Deserialize, Serialize};

pub use crate::config::{Config, ConfigError};

/// # Engine Configuration
///
/// Core loop behavior: logging and how frame deltas are produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine
    pub log_level: String,
    /// Real-time speed multiplier applied to measured frame deltas
    pub rt_speed: f64,
    /// Fixed tick length in seconds; `None` uses measured wall-clock deltas
    pub fixed_delta: Option<f64>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            rt_speed: 1.0,
            fixed_delta: None,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Use a fixed tick length instead of measured deltas
    pub fn with_fixed_delta(mut self, delta: f64) -> Self {
        self.fixed_delta = Some(delta);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rt_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "rt_speed must be positive, got {}",
                self.rt_speed
            )));
        }
        if let Some(delta) = self.fixed_delta {
            if delta < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "fixed_delta cannot be negative, got {delta}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Camera Configuration
///
/// Movement and look parameters for the free-fly camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Movement speed in units per second
    pub speed: f32,
    /// Mouse look sensitivity
    pub look_sensitivity: f32,
    /// Pan sensitivity
    pub pan_sensitivity: f32,
    /// Global mouse sensitivity multiplier
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Initial yaw in degrees; 270 looks down -z
    pub yaw: f32,
    /// Initial pitch in degrees
    pub pitch: f32,
}

impl CameraConfig {
    /// Create a new camera configuration
    pub fn new() -> Self {
        Self {
            speed: 3.0,
            look_sensitivity: 0.4,
            pan_sensitivity: 0.015,
            mouse_sensitivity: 1.0,
            fov: 45.0,
            near: 0.1,
            far: 1000.0,
            yaw: 270.0,
            pitch: 0.0,
        }
    }

    /// Set movement speed
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Set the initial orientation in degrees
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "camera speed must be positive, got {}",
                self.speed
            )));
        }
        if !(self.near > 0.0) || self.near >= self.far {
            return Err(ConfigError::Invalid(format!(
                "camera clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Collision Configuration
///
/// Toggles for the collision response. The collision radius itself is the
/// fixed `ELLIPSOID_SPACE` constant and is not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Run the collision response; when false entities move freely
    pub enabled: bool,
    /// Run the gravity step after the collision step
    pub apply_gravity: bool,
    /// Log every tick's classification at debug level
    pub diagnostics: bool,
}

impl CollisionConfig {
    /// Create a new collision configuration
    pub fn new() -> Self {
        Self {
            enabled: true,
            apply_gravity: true,
            diagnostics: cfg!(debug_assertions),
        }
    }

    /// Enable or disable the collision response
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Enable or disable per-tick diagnostics
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Engine core configuration
    pub engine: EngineConfig,
    /// Camera configuration
    pub camera: CameraConfig,
    /// Collision configuration
    pub collision: CollisionConfig,
}

impl ApplicationConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.camera.validate()?;
        Ok(())
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("slide_engine_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults_match_engine_globals() {
        let config = ApplicationConfig::default();
        assert_eq!(config.camera.speed, 3.0);
        assert_eq!(config.camera.look_sensitivity, 0.4);
        assert_eq!(config.camera.fov, 45.0);
        assert_eq!(config.engine.rt_speed, 1.0);
        assert!(config.collision.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ApplicationConfig::default();
        config.camera.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.camera.near = 10.0;
        config.camera.far = 1.0;
        assert!(config.validate().is_err());

        let mut config = ApplicationConfig::default();
        config.engine.rt_speed = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let path = temp_path("roundtrip.toml");
        let mut config = ApplicationConfig::default();
        config.camera = config.camera.with_speed(5.5).with_orientation(270.0, 10.0);
        config.collision = config.collision.with_diagnostics(false);

        config.save_to_file(&path).unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.camera.speed, 5.5);
        assert_eq!(loaded.camera.yaw, 270.0);
        assert!(!loaded.collision.diagnostics);
    }

    #[test]
    fn test_ron_partial_file_uses_defaults() {
        let path = temp_path("partial.ron");
        std::fs::write(&path, "(collision: (enabled: false))").unwrap();
        let loaded = ApplicationConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(!loaded.collision.enabled);
        assert_eq!(loaded.camera.speed, 3.0);
    }

    #[test]
    fn test_unsupported_extension() {
        let result = ApplicationConfig::load_from_file(temp_path("config.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
