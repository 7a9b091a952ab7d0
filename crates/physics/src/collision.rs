//! Drone vs. pillar collision on the ground plane.

use glam::{Vec2, Vec3};

use crate::flight::DroneState;

/// Collision radius of the drone body.
pub const DRONE_RADIUS: f32 = 0.6;
/// Collision radius of a maze pillar.
pub const PILLAR_RADIUS: f32 = 0.4;
/// Velocity multiplier applied on impact.
pub const IMPACT_DAMPING: f32 = 0.5;

/// Static vertical cylinder the drone can bump into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub position: Vec3,
    pub radius: f32,
}

impl Obstacle {
    pub fn pillar(position: Vec3) -> Self {
        Self {
            position,
            radius: PILLAR_RADIUS,
        }
    }
}

/// A resolved overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index into the obstacle slice.
    pub obstacle: usize,
    /// How far the drone was pushed out.
    pub overlap: f32,
}

/// Push the drone out of the first obstacle it overlaps and halve its velocity.
///
/// Stops at the first hit. Two simultaneous overlaps are resolved one per
/// frame, which is good enough for pillars spaced wider than the drone.
pub fn resolve_obstacles(drone: &mut DroneState, obstacles: &[Obstacle]) -> Option<Contact> {
    for (index, obstacle) in obstacles.iter().enumerate() {
        let offset = Vec2::new(
            drone.pose.position.x - obstacle.position.x,
            drone.pose.position.z - obstacle.position.z,
        );
        let distance = offset.length();
        let reach = DRONE_RADIUS + obstacle.radius;
        if distance >= reach {
            continue;
        }

        let overlap = reach - distance;
        // Dead centre has no direction; pick +X.
        let push = if distance > f32::EPSILON { offset / distance } else { Vec2::X };
        drone.pose.position.x += push.x * overlap;
        drone.pose.position.z += push.y * overlap;
        drone.velocity *= IMPACT_DAMPING;

        log::debug!("Drone hit obstacle {} (overlap {:.3})", index, overlap);
        return Some(Contact { obstacle: index, overlap });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pillar_at(x: f32, z: f32) -> Obstacle {
        Obstacle::pillar(Vec3::new(x, 4.0, z))
    }

    #[test]
    fn overlap_is_pushed_to_exact_contact_distance() {
        let obstacles = [pillar_at(2.0, -3.0)];
        let mut drone = DroneState::at_rest(Vec3::new(2.3, 2.0, -2.6));
        drone.velocity = Vec3::new(0.1, -0.02, 0.08);
        let speed_before = drone.speed();

        let contact = resolve_obstacles(&mut drone, &obstacles).expect("overlapping");
        assert_eq!(contact.obstacle, 0);
        assert!((contact.overlap - 0.5).abs() < 1e-5);

        let after = drone.pose.planar_distance(obstacles[0].position);
        assert!((after - (DRONE_RADIUS + PILLAR_RADIUS)).abs() < 1e-5);
        assert_eq!(drone.velocity, Vec3::new(0.05, -0.01, 0.04));
        assert!((drone.speed() - speed_before * 0.5).abs() < 1e-7);
        // Height is untouched.
        assert_eq!(drone.pose.position.y, 2.0);
    }

    #[test]
    fn push_is_directly_away_from_centre() {
        let obstacles = [pillar_at(0.0, 0.0)];
        let mut drone = DroneState::at_rest(Vec3::new(0.0, 1.0, -0.4));
        resolve_obstacles(&mut drone, &obstacles);
        assert!(drone.pose.position.x.abs() < 1e-6);
        assert!((drone.pose.position.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn dead_centre_pushes_along_x() {
        let obstacles = [pillar_at(5.0, 5.0)];
        let mut drone = DroneState::at_rest(Vec3::new(5.0, 1.0, 5.0));
        let contact = resolve_obstacles(&mut drone, &obstacles).expect("overlapping");
        assert!((contact.overlap - 1.0).abs() < 1e-6);
        assert!(drone.pose.position.is_finite());
        assert!((drone.pose.position.x - 6.0).abs() < 1e-6);
        assert_eq!(drone.pose.position.z, 5.0);
    }

    #[test]
    fn touching_is_not_a_collision() {
        let obstacles = [pillar_at(0.0, 0.0)];
        let mut drone = DroneState::at_rest(Vec3::new(1.0, 1.0, 0.0));
        drone.velocity = Vec3::X;
        assert!(resolve_obstacles(&mut drone, &obstacles).is_none());
        assert_eq!(drone.velocity, Vec3::X);
    }

    #[test]
    fn only_first_overlap_is_resolved() {
        let obstacles = [pillar_at(0.0, 0.0), pillar_at(1.2, 0.0)];
        let mut drone = DroneState::at_rest(Vec3::new(0.6, 1.0, 0.0));
        drone.velocity = Vec3::new(0.08, 0.0, 0.0);
        let contact = resolve_obstacles(&mut drone, &obstacles).expect("overlapping");
        assert_eq!(contact.obstacle, 0);
        // Damped once, not twice.
        assert!((drone.velocity.x - 0.04).abs() < 1e-7);
    }
}
