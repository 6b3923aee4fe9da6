//! Ellipsoid/triangle collision detection
//!
//! Narrow-phase tests of a moving point, padded by a fixed ellipsoid radius,
//! against static world triangles and their edges.
//!
//! # Module Organization
//!
//! - [`primitives`] - Triangles and edges with precomputed origin, normal and edge frames
//! - [`intersect`] - Ray/plane, ray/triangle, point/triangle and point/edge tests
//! - [`slide`] - Slide velocity along a blocking plane or edge
//! - [`mesh`] - The per-level triangle snapshot ([`VertexData`])
//!
//! There is no broad phase: callers scan every triangle of the snapshot.

pub mod primitives;
pub mod intersect;
pub mod slide;
pub mod mesh;

// Re-export commonly used types
pub use primitives::{Edge, Tbn, Triangle, ELLIPSOID_SPACE, TANGENT_LIMIT};
pub use intersect::{
    barycentric_coord,
    intersect_point_edge,
    intersect_point_triangle,
    intersect_ray_plane,
    intersect_ray_triangle,
    near_collision,
    point_in_edge_param,
    tangent_collision,
    NO_INTERSECTION,
};
pub use slide::{calc_edge_slide_velocity, calc_plane_slide_velocity, nearest_point_to_edge};
pub use mesh::{GeometryError, TriangleHandle, VertexData};
