//! Position integration from a look direction and speed

use crate::foundation::math::Vec3;

/// Constant-velocity step: `velocity = look_vector * speed`,
/// `position += velocity * delta`
///
/// Velocity is recomputed even when `delta` is zero. Returns the new
/// `(position, velocity)`.
pub fn linestep(position: Vec3, look_vector: Vec3, speed: f32, delta: f64) -> (Vec3, Vec3) {
    let velocity = look_vector * speed;
    (position + velocity * delta as f32, velocity)
}

/// Identical to [`linestep`]; no easing curve is applied
pub fn smoothstep(position: Vec3, look_vector: Vec3, speed: f32, delta: f64) -> (Vec3, Vec3) {
    let velocity = look_vector * speed;
    (position + velocity * delta as f32, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linestep_zero_delta_recomputes_velocity() {
        let start = Vec3::new(1.0, 2.0, 3.0);
        let (position, velocity) = linestep(start, Vec3::new(0.0, 0.0, -1.0), 4.0, 0.0);

        assert_eq!(position, start);
        assert_eq!(velocity, Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn test_linestep_moves_by_velocity_times_delta() {
        let (position, velocity) = linestep(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), 2.0, 0.5);
        assert_eq!(velocity, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_smoothstep_matches_linestep() {
        let start = Vec3::new(-1.0, 0.5, 2.0);
        let look = Vec3::new(0.6, 0.0, 0.8);
        for delta in [0.0, 0.016, 0.25, 1.0] {
            assert_eq!(smoothstep(start, look, 3.0, delta), linestep(start, look, 3.0, delta));
        }
    }
}
