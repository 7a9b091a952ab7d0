//! Drone pose and heading utilities.

use glam::Vec3;

/// Where the drone is and which way it points.
///
/// Only `position` and `yaw` feed the simulation. `pitch` and `roll` are the
/// smoothed visual tilt handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DronePose {
    pub position: Vec3,
    /// Heading around the vertical axis, radians.
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Default for DronePose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }
}

impl DronePose {
    /// Create a level pose at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Heading vector on the ground plane: (sin yaw, 0, cos yaw).
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Right vector on the ground plane: (cos yaw, 0, -sin yaw).
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Planar (X-Z) distance to a point, ignoring height.
    pub fn planar_distance(&self, point: Vec3) -> f32 {
        let dx = self.position.x - point.x;
        let dz = self.position.z - point.z;
        (dx * dx + dz * dz).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_vectors_at_zero_yaw() {
        let pose = DronePose::default();
        assert_eq!(pose.forward(), Vec3::Z);
        assert_eq!(pose.right(), Vec3::X);
    }

    #[test]
    fn heading_vectors_stay_orthonormal() {
        let pose = DronePose { yaw: 1.234, ..Default::default() };
        let f = pose.forward();
        let r = pose.right();
        assert!((f.length() - 1.0).abs() < 1e-6);
        assert!((r.length() - 1.0).abs() < 1e-6);
        assert!(f.dot(r).abs() < 1e-6);
    }

    #[test]
    fn planar_distance_ignores_height() {
        let pose = DronePose::from_position(Vec3::new(3.0, 10.0, 4.0));
        assert!((pose.planar_distance(Vec3::ZERO) - 5.0).abs() < 1e-6);
    }
}
