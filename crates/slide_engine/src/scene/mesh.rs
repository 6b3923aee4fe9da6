//! Mesh actors and their collision geometry

use crate::foundation::math::{Transform, Vec3};
use crate::physics::collision::{GeometryError, VertexData};
use crate::physics::response::MoveResult;
use super::actor::{Actor, ActorFlags, Movable};

/// How a mesh turns into collision triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionType {
    /// Box-like meshes; produces no triangles
    Cubic,
    /// One collision triangle per rendered triangle
    #[default]
    PerVertex,
}

/// A placed mesh: indexed geometry plus actor state
#[derive(Debug, Clone)]
pub struct MeshActor {
    /// Shared actor state
    pub actor: Actor,
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    collision_type: CollisionType,
    velocity: Vec3,
    speed: f32,
    heading: Option<Vec3>,
}

impl MeshActor {
    /// Create a per-vertex collidable mesh actor from local-space geometry
    pub fn new(
        name: impl Into<String>,
        positions: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Result<Self, GeometryError> {
        let mut mesh = Self {
            actor: Actor::new(name),
            positions,
            indices,
            collision_type: CollisionType::PerVertex,
            velocity: Vec3::zeros(),
            speed: 0.0,
            heading: None,
        };
        mesh.rebuild_triangles()?;
        Ok(mesh)
    }

    /// Place the actor and rebuild its world-space triangles
    pub fn with_transform(mut self, transform: Transform) -> Result<Self, GeometryError> {
        self.set_transform(transform)?;
        Ok(self)
    }

    /// Builder-style flags
    pub fn with_flags(mut self, flags: ActorFlags) -> Self {
        self.actor.flags = flags;
        self
    }

    /// Current collision type
    pub fn collision_type(&self) -> CollisionType {
        self.collision_type
    }

    /// Switch collision type and rebuild the actor's triangles
    pub fn set_collision_type(&mut self, collision_type: CollisionType) -> Result<(), GeometryError> {
        self.collision_type = collision_type;
        self.rebuild_triangles()
    }

    /// Move the actor and rebuild its world-space triangles
    pub fn set_transform(&mut self, transform: Transform) -> Result<(), GeometryError> {
        self.actor.transform = transform;
        self.rebuild_triangles()
    }

    /// Set the movement speed in units per second
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Set or clear the direction the actor moves in
    pub fn set_heading(&mut self, heading: Option<Vec3>) {
        self.heading = heading;
    }

    /// Local-space vertex positions
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Index buffer
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn rebuild_triangles(&mut self) -> Result<(), GeometryError> {
        let triangles = match self.collision_type {
            CollisionType::Cubic => Vec::new(),
            CollisionType::PerVertex => {
                let transform = &self.actor.transform;
                let world: Vec<Vec3> = self
                    .positions
                    .iter()
                    .map(|&p| transform.transform_point(p))
                    .collect();
                VertexData::from_indexed(&world, &self.indices)?
                    .triangles()
                    .to_vec()
            }
        };

        log::trace!(
            "Rebuilt {} collision triangle(s) for '{}'",
            triangles.len(),
            self.actor.name
        );
        self.actor.set_triangles(triangles);
        Ok(())
    }
}

impl Movable for MeshActor {
    fn position(&self) -> Vec3 {
        self.actor.transform.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn look_vector(&self) -> Option<Vec3> {
        if self.actor.flags.contains(ActorFlags::ACTIVE | ActorFlags::MOVABLE) {
            self.heading
        } else {
            None
        }
    }

    /// Moves the actor; its triangles keep the old placement until the next
    /// [`MeshActor::set_transform`] or collision type change
    fn apply_move(&mut self, result: &MoveResult) {
        self.actor.transform.position = result.new_position;
        self.velocity = result.new_velocity;
    }
}

/// Quad centered on `center` spanning `±half_u` and `±half_v`
///
/// The two triangles are wound so their normal is `half_u x half_v`. Handy
/// for level blockouts.
pub fn quad(center: Vec3, half_u: Vec3, half_v: Vec3) -> (Vec<Vec3>, Vec<u32>) {
    let positions = vec![
        center - half_u - half_v,
        center + half_u - half_v,
        center + half_u + half_v,
        center - half_u + half_v,
    ];
    (positions, vec![0, 1, 2, 0, 2, 3])
}
