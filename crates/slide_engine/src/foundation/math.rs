//! Math utilities and types
//!
//! Thin aliases over `nalgebra` plus the handful of helpers the collision core
//! and the scene actors share.

pub use nalgebra::{Matrix3, Matrix4, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Actor transform: position, euler rotation in degrees, scale and a bounding radius
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,

    /// Scale factors
    pub scale: Vec3,

    /// Euler rotation (degrees) applied X, then Y, then Z
    pub rotation: Vec3,

    /// Per-axis bounding radius of the actor
    pub radius: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation: Vec3::zeros(),
            radius: Vec3::zeros(),
        }
    }
}

impl Transform {
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Model matrix: translation * rotX * rotY * rotZ * scale
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * Mat4::rotation_x(utils::deg_to_rad(self.rotation.x))
            * Mat4::rotation_y(utils::deg_to_rad(self.rotation.y))
            * Mat4::rotation_z(utils::deg_to_rad(self.rotation.z))
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.to_matrix()
            .transform_point(&Point3::from(point))
            .coords
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Centroid of three points
    pub fn average_triangle(points: &[Vec3; 3]) -> Vec3 {
        (points[0] + points[1] + points[2]) / 3.0
    }

    /// Unit normal of a triangle from its winding: (v1 - v0) x (v2 - v0)
    ///
    /// A zero-area triangle yields a NaN normal.
    pub fn calc_normal(points: &[Vec3; 3]) -> Vec3 {
        let v0 = points[1] - points[0];
        let v1 = points[2] - points[0];
        v0.cross(&v1).normalize()
    }

    /// True when every component of `v` is exactly zero
    pub fn is_zero(v: &Vec3) -> bool {
        v.x == 0.0 && v.y == 0.0 && v.z == 0.0
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create a right-handed perspective projection matrix (OpenGL depth range)
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}
