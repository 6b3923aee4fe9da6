//! # Slide Engine
//!
//! Collision detection and slide response for first-person movement through
//! static triangle geometry.
//!
//! ## Features
//!
//! - **Point vs. triangle collision**: walls, edges and a fixed collision buffer
//! - **Slide response**: blocked movement is redirected along the obstacle
//! - **Scene model**: mesh actors, a yaw/pitch camera and levels
//! - **Configuration**: TOML or RON files with sensible defaults
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use slide_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::default();
//!     let (positions, indices) = quad(Vec3::new(0.0, 0.0, -5.0), Vec3::x() * 5.0, Vec3::y() * 5.0);
//!
//!     let mut level = Level::new("demo");
//!     level.add_actor(MeshActor::new("wall", positions, indices)?);
//!     level.rebuild_collision();
//!
//!     let physics = PhysicsSystem::new(config.collision.clone());
//!     let mut camera = Camera::new(Vec3::zeros(), 16.0 / 9.0, &config.camera);
//!     camera.set_direction(Some(CameraDirection::Front));
//!     camera.update_interpolation(&physics, 1.0 / 60.0, level.world());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod core;
pub mod foundation;
pub mod physics;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        core::config::{ApplicationConfig, CameraConfig, CollisionConfig, Config, ConfigError, EngineConfig},
        foundation::{
            math::{Mat4, Transform, Vec3},
            time::{Stopwatch, TimeStep},
        },
        physics::{
            collision::{GeometryError, Triangle, TriangleHandle, VertexData},
            Contact, MoveRequest, MoveResult, PhysicsSystem, ResponseState,
        },
        scene::{quad, Actor, ActorFlags, ActorKey, Camera, CameraDirection, CollisionType, Level, MeshActor, Movable, PanMode},
    };
}
