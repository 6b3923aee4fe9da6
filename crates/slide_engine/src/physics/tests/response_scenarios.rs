use approx::assert_relative_eq;

use super::{far_triangle, floor_with_edge, side_wall, small_wall, wall, world};
use crate::foundation::math::Vec3;
use crate::physics::collision::{Triangle, TriangleHandle};
use crate::physics::response::{check_collision, check_world_collision, Contact, MoveRequest, ResponseState};

fn request(position: Vec3, look_vector: Vec3, speed: f32, delta: f64) -> MoveRequest {
    MoveRequest {
        position,
        velocity: Vec3::zeros(),
        look_vector,
        speed,
        delta,
    }
}

#[test]
fn test_single_tick_toward_wall_stays_outside() {
    let world = world(&[wall()]);
    let result = check_world_collision(&request(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0), 2.0, 1.0), &world);

    assert!(result.new_position.z >= 1.0);
    assert_relative_eq!(result.new_position, Vec3::new(0.0, 0.0, 3.0));
}

#[test]
fn test_walking_into_wall_stops_at_buffer() {
    let world = world(&[wall()]);
    let mut position = Vec3::new(0.0, 0.0, 5.0);
    let mut velocity = Vec3::zeros();
    let look = Vec3::new(0.0, 0.0, -1.0);

    let mut stuck_ticks = 0;
    for _ in 0..10 {
        let req = MoveRequest {
            position,
            velocity,
            look_vector: look,
            speed: 8.0,
            delta: 0.125,
        };
        let result = check_world_collision(&req, &world);

        assert!(result.new_position.z >= 1.0, "penetrated to {:?}", result.new_position);
        if result.is_stuck() {
            stuck_ticks += 1;
            assert_eq!(result.contact(), Some(Contact::Polygon(TriangleHandle(0))));
        }

        position = result.new_position;
        velocity = result.new_velocity;
    }

    assert_eq!(position, Vec3::new(0.0, 0.0, 1.0));
    // Four free ticks to reach the buffer, stuck from then on
    assert_eq!(stuck_ticks, 6);
}

#[test]
fn test_oblique_approach_slides_along_wall() {
    let world = world(&[wall()]);
    let look = Vec3::new(1.0, 0.0, -1.0).normalize();
    let result = check_collision(&request(Vec3::new(0.0, 0.0, 1.0), look, 8.0, 0.125), &world);

    assert_eq!(result.state, ResponseState::Sliding(Contact::Polygon(TriangleHandle(0))));
    assert!(result.collided);
    assert_relative_eq!(result.slide, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-5);

    // Speed scaled by |look . slide| = cos(45 deg)
    assert_relative_eq!(result.new_speed, 8.0 * std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-4);
    assert_relative_eq!(result.new_velocity.z, 0.0, epsilon = 1e-5);
    assert_relative_eq!(result.new_position.z, 1.0, epsilon = 1e-5);
    assert_relative_eq!(result.new_position.x, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-4);
}

#[test]
fn test_edge_contact_on_first_triangle() {
    let world = world(&[floor_with_edge()]);
    let result = check_collision(
        &request(Vec3::new(2.0, 0.6, 0.3), Vec3::new(0.0, 0.0, -1.0), 4.0, 0.25),
        &world,
    );

    assert_eq!(
        result.state,
        ResponseState::Sliding(Contact::Edge { triangle: TriangleHandle(0), edge: 0 })
    );
    // Pushed up and over the edge
    assert!(result.slide.y > 0.0);
    assert_relative_eq!(result.slide.magnitude(), 1.0, epsilon = 1e-5);
}

#[test]
fn test_edges_of_later_triangles_are_ignored() {
    // Same edge as above, but the floor is no longer the first triangle: the
    // edge pass only looks at triangle 0
    let world = world(&[far_triangle(), floor_with_edge()]);
    let result = check_collision(
        &request(Vec3::new(2.0, 0.6, 0.3), Vec3::new(0.0, 0.0, -1.0), 4.0, 0.25),
        &world,
    );

    assert_eq!(result.state, ResponseState::Near);
    assert!(!result.collided);
    assert_relative_eq!(result.new_position, Vec3::new(2.0, 0.6, -0.7), epsilon = 1e-6);
}

#[test]
fn test_edge_contact_overrides_polygon() {
    // The wall blocks the point, then the floor's edge replaces that contact
    let world = world(&[floor_with_edge(), small_wall(-0.5)]);
    let result = check_collision(
        &request(Vec3::new(2.0, 0.6, 0.3), Vec3::new(0.0, 0.0, -1.0), 4.0, 0.25),
        &world,
    );

    assert_eq!(
        result.contact(),
        Some(Contact::Edge { triangle: TriangleHandle(0), edge: 0 })
    );
}

#[test]
fn test_last_blocking_polygon_wins() {
    let world = world(&[small_wall(-0.3), small_wall(-0.6)]);
    let result = check_collision(
        &request(Vec3::new(2.0, 0.6, 0.3), Vec3::new(0.0, 0.0, -1.0), 4.0, 0.25),
        &world,
    );

    assert_eq!(result.state, ResponseState::Stuck(Contact::Polygon(TriangleHandle(1))));
    assert_eq!(result.new_position, Vec3::new(2.0, 0.6, 0.3));
}

#[test]
fn test_floor_never_blocks_through_polygon_path() {
    // Standing on a floor, looking straight down at it
    let world = world(&[Triangle::new(
        Vec3::new(-10.0, 0.0, -10.0),
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::new(10.0, 0.0, -10.0),
    )]);
    let result = check_collision(
        &request(Vec3::new(0.0, 0.5, 0.0), Vec3::new(0.0, -1.0, 0.0), 12.0, 0.25),
        &world,
    );

    assert_eq!(result.state, ResponseState::Near);
    assert_relative_eq!(result.new_position, Vec3::new(0.0, -2.5, 0.0), epsilon = 1e-6);
}

#[test]
fn test_corner_resolves_against_one_wall_only() {
    // Inside the buffer of both walls of a corner. Only the last blocking
    // polygon is resolved, so the slide along it runs straight through the
    // side wall.
    let world = world(&[side_wall(), wall()]);
    let look = Vec3::new(-1.0, 0.0, -1.0).normalize();
    let result = check_collision(&request(Vec3::new(0.5, 0.0, 0.9), look, 12.0, 0.2), &world);

    assert_eq!(result.state, ResponseState::Sliding(Contact::Polygon(TriangleHandle(1))));
    assert_relative_eq!(result.slide, Vec3::new(-0.7071068, 0.0, 0.1).normalize(), epsilon = 1e-5);
    assert_relative_eq!(result.new_speed, 12.0 * 0.601_12, epsilon = 1e-3);
    assert!(result.new_position.x < -0.5, "expected to pass x = 0, got {:?}", result.new_position);
}
