//! Intersection tests between a moving point and world triangles/edges
//!
//! All tests are infallible. Degenerate input (NaN normals, rays parallel to
//! a plane) is not rejected; NaN comparisons fall through as "no hit" and a
//! parallel ray yields an infinite distance.

use crate::foundation::math::Vec3;
use super::primitives::{Edge, Triangle, ELLIPSOID_SPACE, TANGENT_LIMIT};

/// Returned by [`intersect_ray_plane`] when the plane is behind the ray
pub const NO_INTERSECTION: f32 = -1.0;

/// True if the triangle is steep enough to block movement (a wall)
///
/// Floors and ceilings, with |normal.y| above the limit, are excluded. Note
/// the comparison is on the signed y component, so any downward-facing
/// triangle also counts as a wall.
pub fn tangent_collision(triangle: &Triangle) -> bool {
    triangle.normal.y <= TANGENT_LIMIT.abs()
}

/// Cheap reject: true if any of the three vertices is strictly closer than
/// `radius` to `point`
///
/// This looks at vertices only. A large triangle whose interior passes near
/// `point` while all three corners are far away is not reported.
pub fn near_collision(radius: f32, point: Vec3, v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let a = (v0 - point).magnitude();
    let b = (v1 - point).magnitude();
    let c = (v2 - point).magnitude();

    a < radius || b < radius || c < radius
}

/// Unnormalized sign test of `point_origin` against a triangle, looking along
/// `point_direction`
///
/// Each component is `dot(direction, (v[i] - p) x (v[j] - p))` for the vertex
/// pairs (0,1), (1,2), (2,0). These are not area-normalized barycentric
/// weights; only the signs matter. The point is contained when all three are
/// strictly negative.
pub fn barycentric_coord(
    point_origin: Vec3,
    point_direction: Vec3,
    triangle_vertices: &[Vec3; 3],
) -> Vec3 {
    let v0 = triangle_vertices[0] - point_origin;
    let v1 = triangle_vertices[1] - point_origin;
    let v2 = triangle_vertices[2] - point_origin;

    Vec3::new(
        v0.cross(&v1).dot(&point_direction),
        v1.cross(&v2).dot(&point_direction),
        v2.cross(&v0).dot(&point_direction),
    )
}

/// Strict containment on a [`barycentric_coord`] result: a zero component
/// (point exactly on an edge line) is outside
pub fn is_contained(coord: &Vec3) -> bool {
    coord.iter().all(|&c| c < 0.0)
}

/// Distance along `ray_direction` from `ray_origin` to the plane
///
/// Returns [`NO_INTERSECTION`] when the distance is negative (plane behind the
/// ray). A ray parallel to the plane divides by zero: `+inf` passes through
/// as a valid hit far away, `-inf` folds into the sentinel, and a ray lying
/// in the plane gives NaN.
pub fn intersect_ray_plane(ray_origin: Vec3, ray_direction: Vec3, plane_origin: Vec3, plane_normal: Vec3) -> f32 {
    let plane_dot = plane_normal.dot(&(plane_origin - ray_origin));
    let point_dot = ray_direction.dot(&plane_normal);
    let dist = plane_dot / point_dot;

    if dist < 0.0 {
        return NO_INTERSECTION;
    }

    dist
}

/// True if the ray hits the triangle's plane in front of its origin and the
/// sign test along the ray puts it inside the triangle
pub fn intersect_ray_triangle(ray_origin: Vec3, ray_direction: Vec3, triangle: &Triangle) -> bool {
    if intersect_ray_plane(ray_origin, ray_direction, triangle.origin, triangle.normal) == NO_INTERSECTION {
        return false;
    }

    let coord = barycentric_coord(ray_origin, ray_direction, &triangle.points);
    is_contained(&coord)
}

/// True if the triangle blocks a point: the point is in front of the surface,
/// projects inside it along the inverse normal, and is no further than
/// [`ELLIPSOID_SPACE`] from its plane
pub fn intersect_point_triangle(point_origin: Vec3, triangle: &Triangle) -> bool {
    let inverse_normal = -triangle.normal;

    if !intersect_ray_triangle(point_origin, inverse_normal, triangle) {
        return false;
    }

    intersect_ray_plane(point_origin, inverse_normal, triangle.origin, triangle.normal) <= ELLIPSOID_SPACE
}

/// True if the point projects onto the span of the edge
///
/// Compares `dot(point - p0, e)` against `|e|^2` rather than a projected
/// length; both sides carry one extra factor of the edge length.
pub fn point_in_edge_param(point_origin: Vec3, edge: &Edge) -> bool {
    let ab = edge.points[1] - edge.points[0];
    let ab_len = ab.magnitude();
    let inner_product = (point_origin - edge.points[0]).dot(&ab);

    inner_product >= 0.0 && inner_product <= ab_len * ab_len
}

/// True if a point moving along `point_velocity` touches the edge
///
/// The edge is treated as a thin wall whose plane passes through the edge
/// midpoint with the bitangent as normal. The point must be heading into
/// that plane, project onto the edge span, and be within
/// [`ELLIPSOID_SPACE`] of the edge line.
pub fn intersect_point_edge(point_origin: Vec3, point_velocity: Vec3, edge: &Edge) -> bool {
    if intersect_ray_plane(point_origin, point_velocity, edge.origin, edge.tbn.bitangent) == NO_INTERSECTION {
        return false;
    }

    if !point_in_edge_param(point_origin, edge) {
        return false;
    }

    let alignment = edge.tbn.tangent.cross(&(point_origin - edge.points[0]));
    alignment.magnitude() <= ELLIPSOID_SPACE
}
