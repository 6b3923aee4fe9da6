//! Collision primitives: triangles and their edges
//!
//! Both carry their derived data (origin, normal, edge frames) precomputed at
//! construction, since the world snapshot is built once per level and tested
//! every tick.

use crate::foundation::math::{utils, Vec3};

/// Collision buffer radius of every moving entity
///
/// A single hardcoded radius: a point counts as touching a surface or edge
/// when it is within this distance of it.
pub const ELLIPSOID_SPACE: f32 = 1.0;

/// Largest |normal.y| of a triangle that still blocks horizontal movement
pub const TANGENT_LIMIT: f32 = 0.5;

/// Tangent / bitangent / normal frame of an edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tbn {
    /// Unit direction from the first to the second endpoint
    pub tangent: Vec3,
    /// `tangent x normal`, lies in the triangle plane perpendicular to the edge
    pub bitangent: Vec3,
    /// Normal of the owning triangle
    pub normal: Vec3,
}

/// One edge of a collision triangle
///
/// Edges are never shared: two triangles meeting at the same segment each own
/// an `Edge` with their own frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Midpoint of the edge
    pub origin: Vec3,
    /// Endpoints in winding order
    pub points: [Vec3; 2],
    /// Raw edge vector `points[1] - points[0]`
    pub edge: Vec3,
    /// Edge frame; the normal is the owning triangle's normal
    pub tbn: Tbn,
}

impl Edge {
    /// Build an edge from two endpoints and the owning triangle's normal
    pub fn new(a: Vec3, b: Vec3, normal: Vec3) -> Self {
        let edge = b - a;
        let tangent = edge.normalize();

        Self {
            origin: (a + b) * 0.5,
            points: [a, b],
            edge,
            tbn: Tbn {
                tangent,
                bitangent: tangent.cross(&normal),
                normal,
            },
        }
    }

    /// Length of the edge
    pub fn length(&self) -> f32 {
        self.edge.magnitude()
    }
}

/// A world triangle with its derived collision data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices in winding order
    pub points: [Vec3; 3],
    /// Centroid
    pub origin: Vec3,
    /// Unit normal `normalize((v1 - v0) x (v2 - v0))`, NaN when degenerate
    pub normal: Vec3,
    /// Edges ab, bc, ca
    pub edges: [Edge; 3],
}

impl Triangle {
    /// Build a triangle and derive its origin, normal and edges
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let points = [a, b, c];
        let normal = utils::calc_normal(&points);

        Self {
            points,
            origin: utils::average_triangle(&points),
            normal,
            edges: [
                Edge::new(a, b, normal),
                Edge::new(b, c, normal),
                Edge::new(c, a, normal),
            ],
        }
    }

    /// True when the triangle has zero area and therefore no usable normal
    pub fn is_degenerate(&self) -> bool {
        !self.normal.iter().all(|c| c.is_finite())
    }
}
