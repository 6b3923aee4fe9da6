//! Shared actor state and the movement capability

use bitflags::bitflags;

use crate::foundation::math::{Transform, Vec3};
use crate::physics::collision::Triangle;
use crate::physics::response::MoveResult;

bitflags! {
    /// Actor state flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ActorFlags: u32 {
        /// Takes part in the level at all
        const ACTIVE = 1 << 0;
        /// Contributes triangles to the world snapshot
        const COLLIDABLE = 1 << 1;
        /// Moved by the physics driver when it has a heading
        const MOVABLE = 1 << 2;
        /// Selected in an editor
        const SELECTED = 1 << 3;
    }
}

impl Default for ActorFlags {
    fn default() -> Self {
        Self::ACTIVE | Self::COLLIDABLE
    }
}

/// Something the physics driver can move for one tick
pub trait Movable {
    /// Current position
    fn position(&self) -> Vec3;

    /// Velocity from the previous tick
    fn velocity(&self) -> Vec3;

    /// Base speed in units per second
    fn speed(&self) -> f32;

    /// Direction to move this tick, `None` to stay put
    fn look_vector(&self) -> Option<Vec3>;

    /// Take the position and velocity of a finished move
    ///
    /// The reduced slide speed is not kept; next tick starts from the base
    /// speed again.
    fn apply_move(&mut self, result: &MoveResult);
}

/// State every placed object shares
#[derive(Debug, Clone)]
pub struct Actor {
    /// Display name
    pub name: String,
    /// State flags
    pub flags: ActorFlags,
    /// Placement in the world
    pub transform: Transform,
    collision: Vec<Triangle>,
}

impl Actor {
    /// Create an active, collidable actor at the origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: ActorFlags::default(),
            transform: Transform::default(),
            collision: Vec::new(),
        }
    }

    /// Builder-style transform
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Builder-style flags
    pub fn with_flags(mut self, flags: ActorFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Turn a flag on or off
    pub fn set_flag(&mut self, flag: ActorFlags, on: bool) {
        self.flags.set(flag, on);
    }

    /// True when the actor should contribute triangles to the world
    pub fn is_solid(&self) -> bool {
        self.flags.contains(ActorFlags::ACTIVE | ActorFlags::COLLIDABLE)
    }

    /// World-space collision triangles
    pub fn triangles(&self) -> &[Triangle] {
        &self.collision
    }

    /// Replace the collision triangles
    pub fn set_triangles(&mut self, triangles: Vec<Triangle>) {
        self.collision = triangles;
    }
}
