//! Collision response: classify contacts for one tick and slide
//!
//! Each tick a moving point is tested against every triangle of the world
//! snapshot. The scan goes:
//!
//! 1. For every triangle whose vertices are within `speed` of the point, mark
//!    the tick as *near*. If the triangle is a wall and blocks the point,
//!    record a polygon contact. Later triangles overwrite earlier ones.
//! 2. When near, test the three edges of the **first** triangle of the
//!    snapshot (not of the blocking polygon). An edge hit overwrites any
//!    polygon contact; again the last edge wins.
//! 3. The contact picks the slide function. A zero slide vector leaves the
//!    point stuck for this tick; otherwise the slide vector becomes the look
//!    vector and the speed is scaled by `|look . slide|`.
//! 4. Unless stuck, the point is moved with [`linestep`].
//!
//! Nothing here fails. Degenerate geometry degrades to "no contact" or NaN.

use crate::foundation::math::{utils, Vec3};
use super::collision::{
    calc_edge_slide_velocity,
    calc_plane_slide_velocity,
    intersect_point_edge,
    intersect_point_triangle,
    near_collision,
    tangent_collision,
    Edge,
    Triangle,
    TriangleHandle,
    VertexData,
};
use super::interpolate::linestep;

/// Geometry feature a point collided with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Face of a wall triangle
    Polygon(TriangleHandle),
    /// Edge `edge` (0 = ab, 1 = bc, 2 = ca) of a triangle
    Edge {
        /// Owning triangle
        triangle: TriangleHandle,
        /// Edge index within the triangle
        edge: usize,
    },
    /// Vertex contact; never produced, vertex response is not implemented
    Vertex(TriangleHandle),
}

/// Outcome of one tick of collision response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseState {
    /// No triangle was near
    Free,
    /// Triangles were near but none blocked the point
    Near,
    /// Blocked, moved along the slide vector
    Sliding(Contact),
    /// Blocked head-on, did not move
    Stuck(Contact),
}

/// Movement request for one entity and one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveRequest {
    /// Current position
    pub position: Vec3,
    /// Velocity from the previous tick
    pub velocity: Vec3,
    /// Desired direction of travel
    pub look_vector: Vec3,
    /// Speed in units per second; also the near-collision radius
    pub speed: f32,
    /// Elapsed time in seconds
    pub delta: f64,
}

/// Result of a collision-checked move
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Position after this tick
    pub new_position: Vec3,
    /// Velocity after this tick; unchanged when stuck
    pub new_velocity: Vec3,
    /// Speed used this tick, reduced while sliding. Not meant to be persisted.
    pub new_speed: f32,
    /// True when any contact was found
    pub collided: bool,
    /// Final classification
    pub state: ResponseState,
    /// Slide direction (zero when free or stuck)
    pub slide: Vec3,
}

impl MoveResult {
    /// True when the entity did not move this tick
    pub fn is_stuck(&self) -> bool {
        matches!(self.state, ResponseState::Stuck(_))
    }

    /// Contact that produced this result, if any
    pub fn contact(&self) -> Option<Contact> {
        match self.state {
            ResponseState::Sliding(contact) | ResponseState::Stuck(contact) => Some(contact),
            ResponseState::Free | ResponseState::Near => None,
        }
    }
}

enum Hit<'a> {
    Polygon(TriangleHandle, &'a Triangle),
    Edge(usize, &'a Edge),
}

impl Hit<'_> {
    fn contact(&self) -> Contact {
        match *self {
            Hit::Polygon(handle, _) => Contact::Polygon(handle),
            Hit::Edge(edge, _) => Contact::Edge {
                triangle: TriangleHandle(0),
                edge,
            },
        }
    }
}

/// Move a point for one tick, sliding along whatever blocks it
pub fn check_collision(request: &MoveRequest, world: &VertexData) -> MoveResult {
    let position = request.position;
    let look_vector = request.look_vector;

    let mut near = false;
    let mut hit: Option<Hit<'_>> = None;

    for (handle, triangle) in world.iter() {
        let [v0, v1, v2] = triangle.points;
        if !near_collision(request.speed, position, v0, v1, v2) {
            continue;
        }
        near = true;

        if tangent_collision(triangle) && intersect_point_triangle(position, triangle) {
            log::trace!("Polygon contact with triangle {}", handle.index());
            hit = Some(Hit::Polygon(handle, triangle));
        }
    }

    if near {
        if let Some(first) = world.first() {
            for (i, edge) in first.edges.iter().enumerate() {
                if intersect_point_edge(position, look_vector, edge) {
                    log::trace!("Edge contact with edge {} of triangle 0", i);
                    hit = Some(Hit::Edge(i, edge));
                }
            }
        }
    }

    let Some(hit) = hit else {
        let (new_position, new_velocity) = linestep(position, look_vector, request.speed, request.delta);
        return MoveResult {
            new_position,
            new_velocity,
            new_speed: request.speed,
            collided: false,
            state: if near { ResponseState::Near } else { ResponseState::Free },
            slide: Vec3::zeros(),
        };
    };

    let contact = hit.contact();
    let slide = match hit {
        Hit::Polygon(_, triangle) => calc_plane_slide_velocity(
            position,
            look_vector,
            request.velocity,
            triangle.origin,
            triangle.normal,
        ),
        Hit::Edge(_, edge) => calc_edge_slide_velocity(position, look_vector, request.velocity, edge),
    };

    if utils::is_zero(&slide) {
        return MoveResult {
            new_position: position,
            new_velocity: request.velocity,
            new_speed: request.speed,
            collided: true,
            state: ResponseState::Stuck(contact),
            slide,
        };
    }

    let slide_intensity = look_vector.dot(&slide).abs();
    let new_speed = request.speed * slide_intensity;
    let (new_position, new_velocity) = linestep(position, slide, new_speed, request.delta);

    MoveResult {
        new_position,
        new_velocity,
        new_speed,
        collided: true,
        state: ResponseState::Sliding(contact),
        slide,
    }
}

/// Gravity and ground resolution; vertical movement is not resolved yet, so
/// this leaves the result untouched
pub fn check_gravity(_result: &mut MoveResult, _world: &VertexData) {}

/// Collision step followed by the gravity step
pub fn check_world_collision(request: &MoveRequest, world: &VertexData) -> MoveResult {
    let mut result = check_collision(request, world);
    check_gravity(&mut result, world);
    result
}
