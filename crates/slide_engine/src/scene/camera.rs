//! # First-Person Camera
//!
//! Free-fly camera oriented by yaw and pitch (degrees) that walks through the
//! world with the collision response.
//!
//! ## Coordinate System
//! Right-handed, Y-up. A yaw of 270 with zero pitch looks down -Z.
//!
//! Movement is driven by a held [`CameraDirection`]. Each direction maps to a
//! look vector derived from the orientation; the diagonals are the halved sum
//! of two axes and therefore move at roughly 0.7 of the base speed.

use crate::core::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::physics::collision::VertexData;
use crate::physics::response::MoveResult;
use crate::physics::PhysicsSystem;
use super::actor::Movable;

/// Largest pitch magnitude when pitch is constrained
pub const PITCH_LIMIT: f32 = 89.0;

/// Movement direction relative to the camera orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraDirection {
    /// Along the front vector
    Front,
    /// Against the front vector
    Back,
    /// Against the right vector
    Left,
    /// Along the right vector
    Right,
    /// `(front + right) / 2`
    FrontRight,
    /// `(front - right) / 2`
    FrontLeft,
    /// `(-front + right) / 2`
    BackRight,
    /// `(-front - right) / 2`
    BackLeft,
}

impl CameraDirection {
    /// Combine held movement keys into one direction
    ///
    /// Forward/back take priority and pick up a diagonal when a side key is
    /// also held. Opposing keys cancel out.
    pub fn from_keys(forward: bool, back: bool, left: bool, right: bool) -> Option<Self> {
        let side = match (left, right) {
            (true, false) => Some(Self::Left),
            (false, true) => Some(Self::Right),
            _ => None,
        };

        match (forward, back, side) {
            (true, false, Some(Self::Right)) => Some(Self::FrontRight),
            (true, false, Some(_)) => Some(Self::FrontLeft),
            (true, false, None) => Some(Self::Front),
            (false, true, Some(Self::Right)) => Some(Self::BackRight),
            (false, true, Some(_)) => Some(Self::BackLeft),
            (false, true, None) => Some(Self::Back),
            _ => side,
        }
    }
}

/// Editor-style pan driven by mouse motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanMode {
    /// Vertical mouse motion moves along the front vector
    Dolly,
    /// Horizontal motion moves along the right vector, vertical along world up
    Strafe,
}

/// Orientation-derived basis vectors
#[derive(Debug, Clone, Copy, PartialEq)]
struct LookVectors {
    front: Vec3,
    right: Vec3,
    up: Vec3,
    front_right: Vec3,
    front_left: Vec3,
    back_right: Vec3,
    back_left: Vec3,
}

/// First-person camera
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    velocity: Vec3,
    speed: f32,
    yaw: f32,
    pitch: f32,
    world_up: Vec3,
    look: LookVectors,
    direction: Option<CameraDirection>,
    locked: bool,

    look_sensitivity: f32,
    pan_sensitivity: f32,
    mouse_sensitivity: f32,

    fov: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Create a camera at `position` from the camera settings
    pub fn new(position: Vec3, aspect: f32, config: &CameraConfig) -> Self {
        let world_up = Vec3::new(0.0, 1.0, 0.0);
        let mut camera = Self {
            position,
            velocity: Vec3::new(0.0, 0.0, -1.0),
            speed: config.speed,
            yaw: config.yaw,
            pitch: config.pitch,
            world_up,
            look: LookVectors {
                front: Vec3::new(0.0, 0.0, -1.0),
                right: Vec3::new(1.0, 0.0, 0.0),
                up: world_up,
                front_right: Vec3::zeros(),
                front_left: Vec3::zeros(),
                back_right: Vec3::zeros(),
                back_left: Vec3::zeros(),
            },
            direction: None,
            locked: false,
            look_sensitivity: config.look_sensitivity,
            pan_sensitivity: config.pan_sensitivity,
            mouse_sensitivity: config.mouse_sensitivity,
            fov: config.fov,
            aspect,
            near: config.near,
            far: config.far,
        };
        camera.update_look_vectors();
        camera
    }

    /// Recompute front, right, up and the diagonals from yaw and pitch
    pub fn update_look_vectors(&mut self) {
        let yaw = utils::deg_to_rad(self.yaw);
        let pitch = utils::deg_to_rad(self.pitch);

        let front = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize();
        let right = front.cross(&self.world_up).normalize();
        let up = right.cross(&front).normalize();

        self.look = LookVectors {
            front,
            right,
            up,
            front_right: (front + right) / 2.0,
            front_left: (front - right) / 2.0,
            back_right: (-front + right) / 2.0,
            back_left: (-front - right) / 2.0,
        };
    }

    /// Rotate from a mouse delta
    ///
    /// Offsets are scaled by `sensitivity` and the global mouse sensitivity.
    /// Yaw wraps at the 0/360 boundary; pitch is clamped to
    /// `±`[`PITCH_LIMIT`] when `constrain_pitch` is set. Ignored while locked.
    pub fn process_mouse_rotation(&mut self, x_offset: f64, y_offset: f64, sensitivity: f32, constrain_pitch: bool) {
        if self.locked {
            return;
        }

        let scale = f64::from(sensitivity * self.mouse_sensitivity);
        self.yaw += (x_offset * scale) as f32;
        self.pitch += (y_offset * scale) as f32;

        if self.yaw > 360.0 {
            self.yaw = 0.0;
        }
        if self.yaw < 0.0 {
            self.yaw = 360.0;
        }

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_look_vectors();
    }

    /// [`Camera::process_mouse_rotation`] with the configured look sensitivity
    /// and constrained pitch
    pub fn look(&mut self, x_offset: f64, y_offset: f64) {
        self.process_mouse_rotation(x_offset, y_offset, self.look_sensitivity, true);
    }

    /// Pan the camera from a mouse delta
    ///
    /// Offsets are scaled by the pan sensitivity and the global mouse
    /// sensitivity. Panning teleports the camera and bypasses collision.
    /// Ignored while locked.
    pub fn pan(&mut self, x_offset: f64, y_offset: f64, mode: PanMode) {
        if self.locked {
            return;
        }

        let scale = f64::from(self.pan_sensitivity * self.mouse_sensitivity);
        let (dx, dy) = ((x_offset * scale) as f32, (y_offset * scale) as f32);

        match mode {
            PanMode::Dolly => self.position += self.look.front * dy,
            PanMode::Strafe => self.position += self.look.right * dx + self.world_up * dy,
        }
        log::trace!("Camera panned to: {:?}", self.position);
    }

    /// Look vector for a movement direction
    pub fn direction_vector(&self, direction: CameraDirection) -> Vec3 {
        match direction {
            CameraDirection::Front => self.look.front,
            CameraDirection::Back => -self.look.front,
            CameraDirection::Left => -self.look.right,
            CameraDirection::Right => self.look.right,
            CameraDirection::FrontRight => self.look.front_right,
            CameraDirection::FrontLeft => self.look.front_left,
            CameraDirection::BackRight => self.look.back_right,
            CameraDirection::BackLeft => self.look.back_left,
        }
    }

    /// Hold a movement direction, or release with `None`
    pub fn set_direction(&mut self, direction: Option<CameraDirection>) {
        self.direction = direction;
    }

    /// Currently held direction
    pub fn direction(&self) -> Option<CameraDirection> {
        self.direction
    }

    /// True while a direction is held
    pub fn is_moving(&self) -> bool {
        self.direction.is_some()
    }

    /// Run one tick of collision-checked movement
    ///
    /// Does nothing unless a direction is held.
    pub fn update_interpolation(
        &mut self,
        physics: &PhysicsSystem,
        delta: f64,
        world: &VertexData,
    ) -> Option<MoveResult> {
        physics.move_entity(self, delta, world)
    }

    /// View matrix looking along the front vector
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.look.front, self.look.up)
    }

    /// Perspective projection from the configured field of view
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective(utils::deg_to_rad(self.fov), self.aspect, self.near, self.far)
    }

    /// Freeze or release mouse look
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// True while mouse look is frozen
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Teleport the camera
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Set the base movement speed
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Set the viewport aspect ratio
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Unit front vector
    pub fn front(&self) -> Vec3 {
        self.look.front
    }

    /// Unit right vector
    pub fn right(&self) -> Vec3 {
        self.look.right
    }

    /// Unit up vector
    pub fn up(&self) -> Vec3 {
        self.look.up
    }
}

impl Movable for Camera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn speed(&self) -> f32 {
        self.speed
    }

    fn look_vector(&self) -> Option<Vec3> {
        self.direction.map(|direction| self.direction_vector(direction))
    }

    fn apply_move(&mut self, result: &MoveResult) {
        self.position = result.new_position;
        self.velocity = result.new_velocity;
    }
}
