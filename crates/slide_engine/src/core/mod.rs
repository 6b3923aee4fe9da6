//! # Core Engine Module
//!
//! Shared configuration for the engine loop, camera and collision response.

pub mod config;

pub use config::{
    ApplicationConfig,
    CameraConfig,
    CollisionConfig,
    Config,
    ConfigError,
    EngineConfig,
};
