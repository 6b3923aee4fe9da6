//! Scene objects: actors, meshes, the camera and levels
//!
//! Entities are composed rather than layered: [`Actor`] carries the shared
//! state and anything the physics driver can push around implements
//! [`Movable`].

pub mod actor;
pub mod camera;
pub mod level;
pub mod mesh;

pub use actor::{Actor, ActorFlags, Movable};
pub use camera::{Camera, CameraDirection, PanMode};
pub use level::{ActorKey, Level};
pub use mesh::{quad, CollisionType, MeshActor};
