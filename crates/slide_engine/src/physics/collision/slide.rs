//! Slide resolution against a blocking plane or edge
//!
//! Both variants project the point one step along its look direction, measure
//! how far that destination sinks into the obstacle's [`ELLIPSOID_SPACE`]
//! buffer, push it back out along the obstacle normal and return the unit
//! direction from the point to the corrected destination. A zero vector means
//! the look direction runs straight into the obstacle and no slide exists.

use crate::foundation::math::Vec3;
use super::primitives::{Edge, ELLIPSOID_SPACE};

/// Step length used to project the destination: the magnitude of the
/// normalized velocity, i.e. one unit. A zero velocity (an entity starting
/// from rest) also steps one unit rather than producing NaN.
fn step_length(point_velocity: &Vec3) -> f32 {
    point_velocity
        .try_normalize(0.0)
        .map_or(1.0, |direction| direction.magnitude())
}

fn resolve_slide(point_origin: Vec3, destination: Vec3, anchor: Vec3, normal: Vec3) -> Vec3 {
    let dest_angle = normal
        .dot(&((anchor + ELLIPSOID_SPACE * normal) - destination))
        .clamp(0.0, 1.0);

    if dest_angle >= 1.0 {
        return Vec3::zeros();
    }

    let new_destination = destination + dest_angle * normal;
    (new_destination - point_origin).normalize()
}

/// New unit velocity along a blocking plane, or zero when fully blocked
pub fn calc_plane_slide_velocity(
    point_origin: Vec3,
    point_direction: Vec3,
    point_velocity: Vec3,
    plane_origin: Vec3,
    plane_normal: Vec3,
) -> Vec3 {
    let destination = point_origin + step_length(&point_velocity) * point_direction;
    resolve_slide(point_origin, destination, plane_origin, plane_normal)
}

/// Closest point to `point_origin` on the edge segment
///
/// Projects onto the edge tangent and clamps to `[0, edge length]`.
pub fn nearest_point_to_edge(point_origin: Vec3, edge: &Edge) -> Vec3 {
    let edge_len = (edge.points[1] - edge.points[0]).magnitude();
    let ap_dot = edge
        .tbn
        .tangent
        .dot(&(point_origin - edge.points[0]))
        .clamp(0.0, edge_len);

    edge.points[0] + edge.tbn.tangent * ap_dot
}

/// New unit velocity along a blocking edge, or zero when fully blocked
///
/// The obstacle normal is the direction from the nearest point on the edge to
/// the point; a point lying exactly on the edge line has no such direction
/// and produces NaN.
pub fn calc_edge_slide_velocity(
    point_origin: Vec3,
    point_direction: Vec3,
    point_velocity: Vec3,
    edge: &Edge,
) -> Vec3 {
    let destination = point_origin + step_length(&point_velocity) * point_direction;

    let nearest = nearest_point_to_edge(point_origin, edge);
    let edge_normal = (point_origin - nearest).normalize();

    resolve_slide(point_origin, destination, nearest, edge_normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn up() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    #[test]
    fn test_plane_slide_head_on_is_stuck() {
        let slide = calc_plane_slide_velocity(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, -3.0, 0.0),
            Vec3::zeros(),
            up(),
        );
        assert_eq!(slide, Vec3::zeros());
    }

    #[test]
    fn test_plane_slide_head_on_from_rest_is_stuck() {
        let slide = calc_plane_slide_velocity(
            Vec3::new(0.0, 0.5, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::zeros(),
            Vec3::zeros(),
            up(),
        );
        assert_eq!(slide, Vec3::zeros());
    }

    #[test]
    fn test_plane_slide_parallel_keeps_direction() {
        let look = Vec3::new(1.0, 0.0, 0.0);
        let slide = calc_plane_slide_velocity(Vec3::new(0.0, 1.0, 0.0), look, look * 2.0, Vec3::zeros(), up());
        assert_relative_eq!(slide, look, epsilon = 1e-6);
    }

    #[test]
    fn test_plane_slide_oblique_removes_normal_component() {
        let look = Vec3::new(1.0, -1.0, 0.0).normalize();
        let slide = calc_plane_slide_velocity(Vec3::new(0.0, 1.0, 0.0), look, look, Vec3::zeros(), up());

        assert_relative_eq!(slide, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-6);
        assert_relative_eq!(slide.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_plane_slide_partial_penetration() {
        // Point at the buffer boundary, looking slightly down: pushed back up
        // only by how far the destination sank in
        let look = Vec3::new(3.0, -0.5, 0.0).normalize();
        let slide = calc_plane_slide_velocity(Vec3::new(0.0, 1.0, 0.0), look, look, Vec3::zeros(), up());

        assert!(slide.y.abs() < 1e-6);
        assert!(slide.x > 0.0);
    }

    #[test]
    fn test_nearest_point_to_edge_clamps() {
        let edge = Edge::new(Vec3::zeros(), Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));

        assert_relative_eq!(nearest_point_to_edge(Vec3::new(2.0, -1.0, 0.0), &edge), Vec3::new(2.0, 0.0, 0.0));
        assert_relative_eq!(nearest_point_to_edge(Vec3::new(-3.0, -1.0, 0.0), &edge), Vec3::zeros());
        assert_relative_eq!(nearest_point_to_edge(Vec3::new(9.0, 2.0, 0.0), &edge), Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_edge_slide() {
        let edge = Edge::new(Vec3::zeros(), Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let point = Vec3::new(2.0, -1.0, 0.0);

        let head_on = calc_edge_slide_velocity(point, up(), up(), &edge);
        assert_eq!(head_on, Vec3::zeros());

        let along = Vec3::new(1.0, 0.0, 0.0);
        let slide = calc_edge_slide_velocity(point, along, along, &edge);
        assert_relative_eq!(slide, along, epsilon = 1e-6);
    }

    #[test]
    fn test_edge_slide_on_edge_line_is_nan() {
        let edge = Edge::new(Vec3::zeros(), Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let slide = calc_edge_slide_velocity(Vec3::new(2.0, 0.0, 0.0), up(), up(), &edge);
        assert!(slide.x.is_nan());
    }
}
