//! End-to-end collision response scenarios

mod response_scenarios;

use crate::foundation::math::Vec3;
use crate::physics::collision::{Triangle, VertexData};

/// Wall in the z = 0 plane facing +z, spanning x, y in [-5, 5]
pub(super) fn wall() -> Triangle {
    Triangle::new(
        Vec3::new(-5.0, -5.0, 0.0),
        Vec3::new(5.0, -5.0, 0.0),
        Vec3::new(0.0, 5.0, 0.0),
    )
}

/// Wall in the x = 0 plane facing +x; meets [`wall`] along the y axis
pub(super) fn side_wall() -> Triangle {
    Triangle::new(
        Vec3::new(0.0, -5.0, 10.0),
        Vec3::new(0.0, -5.0, -5.0),
        Vec3::new(0.0, 5.0, 2.5),
    )
}

/// Floor facing +y whose first edge runs along the x axis from 0 to 4
pub(super) fn floor_with_edge() -> Triangle {
    Triangle::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(4.0, 0.0, 0.0),
        Vec3::new(0.0, 0.0, -4.0),
    )
}

/// Small wall facing +z at depth `z`, covering the point (2, 0.6)
pub(super) fn small_wall(z: f32) -> Triangle {
    Triangle::new(
        Vec3::new(-1.0, -1.0, z),
        Vec3::new(5.0, -1.0, z),
        Vec3::new(2.0, 3.0, z),
    )
}

/// Triangle far away from everything the scenarios touch
pub(super) fn far_triangle() -> Triangle {
    Triangle::new(
        Vec3::new(100.0, 0.0, 0.0),
        Vec3::new(101.0, 0.0, 0.0),
        Vec3::new(100.0, 1.0, 0.0),
    )
}

pub(super) fn world(triangles: &[Triangle]) -> VertexData {
    VertexData::from(triangles.to_vec())
}
