//! Physics module for collision detection and response
//!
//! Provides point-versus-triangle collision against a static world snapshot,
//! slide response along walls and edges, and the movement integrator.

pub mod collision;
pub mod interpolate;
pub mod response;

#[cfg(test)]
mod tests;

pub use collision::{Triangle, TriangleHandle, VertexData};
pub use interpolate::{linestep, smoothstep};
pub use response::{
    check_collision,
    check_gravity,
    check_world_collision,
    Contact,
    MoveRequest,
    MoveResult,
    ResponseState,
};

use crate::core::config::CollisionConfig;
use crate::foundation::math::Vec3;
use crate::scene::Movable;

/// Per-tick driver applying collision response to movable entities
#[derive(Debug, Clone, Default)]
pub struct PhysicsSystem {
    config: CollisionConfig,
}

impl PhysicsSystem {
    /// Create a physics system with the given collision settings
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    /// Active collision settings
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Replace the collision settings
    pub fn set_config(&mut self, config: CollisionConfig) {
        self.config = config;
    }

    /// Move one entity for one tick
    ///
    /// Returns `None` when the entity has no heading this tick and was left
    /// untouched. With collisions disabled the entity moves with the plain
    /// integrator and the result reports no contact.
    pub fn move_entity<M: Movable + ?Sized>(
        &self,
        entity: &mut M,
        delta: f64,
        world: &VertexData,
    ) -> Option<MoveResult> {
        let look_vector = entity.look_vector()?;
        let request = MoveRequest {
            position: entity.position(),
            velocity: entity.velocity(),
            look_vector,
            speed: entity.speed(),
            delta,
        };

        let result = if !self.config.enabled {
            let (new_position, new_velocity) =
                linestep(request.position, request.look_vector, request.speed, delta);
            MoveResult {
                new_position,
                new_velocity,
                new_speed: request.speed,
                collided: false,
                state: ResponseState::Free,
                slide: Vec3::zeros(),
            }
        } else if self.config.apply_gravity {
            check_world_collision(&request, world)
        } else {
            check_collision(&request, world)
        };

        if self.config.diagnostics {
            log::debug!(
                "Tick {:.4}s: {:?} -> {:?} ({:?}, speed {:.3})",
                delta,
                request.position,
                result.new_position,
                result.state,
                result.new_speed
            );
        }
        if result.is_stuck() {
            log::warn!("Entity stuck at {:?} against {:?}", request.position, result.contact());
        }

        entity.apply_move(&result);
        Some(result)
    }
}
