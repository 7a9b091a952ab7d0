//! Axis-aligned play area with bouncy walls and a soft ceiling.

use crate::flight::DroneState;

/// Velocity factor on hitting a side wall.
pub const WALL_RESTITUTION: f32 = -0.5;
/// Velocity factor on hitting the ceiling.
pub const CEILING_RESTITUTION: f32 = -0.1;

/// Extra room left of and right of the grid.
const SIDE_MARGIN: f32 = 2.0;
/// Extra room past the far edge of the grid.
const FAR_MARGIN: f32 = 5.0;
/// Extra room on the near side of the first row.
const NEAR_MARGIN: f32 = 2.0;

/// Play-area limits. There is no lower limit: the global floor handles that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
    pub max_y: f32,
}

/// Which limits were hit in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundsHit {
    pub x: bool,
    pub z: bool,
    pub ceiling: bool,
}

impl BoundsHit {
    pub fn any(&self) -> bool {
        self.x || self.z || self.ceiling
    }
}

impl WorldBounds {
    /// Limits around a grid of `cols` x `rows` cells of `cell_size`, centred
    /// on X = 0, whose first row sits at `start_z` and which grows toward -Z.
    pub fn around_grid(cols: usize, rows: usize, cell_size: f32, start_z: f32, max_y: f32) -> Self {
        let width = cols as f32 * cell_size;
        let depth = rows as f32 * cell_size;
        Self {
            min_x: -width / 2.0 - SIDE_MARGIN,
            max_x: width / 2.0 + SIDE_MARGIN,
            min_z: start_z - depth - FAR_MARGIN,
            max_z: start_z + NEAR_MARGIN,
            max_y,
        }
    }

    /// Clamp the drone into the area, reflecting the velocity of each clamped axis.
    pub fn resolve(&self, drone: &mut DroneState) -> BoundsHit {
        let mut hit = BoundsHit::default();
        let position = &mut drone.pose.position;
        let velocity = &mut drone.velocity;

        if position.x < self.min_x {
            position.x = self.min_x;
            velocity.x *= WALL_RESTITUTION;
            hit.x = true;
        } else if position.x > self.max_x {
            position.x = self.max_x;
            velocity.x *= WALL_RESTITUTION;
            hit.x = true;
        }

        if position.z < self.min_z {
            position.z = self.min_z;
            velocity.z *= WALL_RESTITUTION;
            hit.z = true;
        } else if position.z > self.max_z {
            position.z = self.max_z;
            velocity.z *= WALL_RESTITUTION;
            hit.z = true;
        }

        if position.y > self.max_y {
            position.y = self.max_y;
            velocity.y *= CEILING_RESTITUTION;
            hit.ceiling = true;
        }

        hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn maze_bounds() -> WorldBounds {
        WorldBounds::around_grid(9, 9, 3.0, -5.0, 7.5)
    }

    #[test]
    fn grid_bounds_follow_dimensions() {
        let b = maze_bounds();
        assert_eq!(b.min_x, -15.5);
        assert_eq!(b.max_x, 15.5);
        assert_eq!(b.min_z, -37.0);
        assert_eq!(b.max_z, -3.0);
        assert_eq!(b.max_y, 7.5);
    }

    #[test]
    fn wall_clamps_and_reflects_at_half_speed() {
        let b = maze_bounds();
        let mut drone = DroneState::at_rest(Vec3::new(16.2, 2.0, -10.0));
        drone.velocity = Vec3::new(0.12, 0.0, 0.03);
        let hit = b.resolve(&mut drone);
        assert!(hit.x && !hit.z && !hit.ceiling);
        assert_eq!(drone.pose.position.x, b.max_x);
        assert_eq!(drone.velocity.x, -0.06);
        assert_eq!(drone.velocity.z, 0.03);
    }

    #[test]
    fn near_and_far_walls_reflect_z() {
        let b = maze_bounds();
        let mut near = DroneState::at_rest(Vec3::new(0.0, 1.5, 0.0));
        near.velocity = Vec3::new(0.0, 0.0, 0.1);
        b.resolve(&mut near);
        assert_eq!(near.pose.position.z, -3.0);
        assert_eq!(near.velocity.z, -0.05);

        let mut far = DroneState::at_rest(Vec3::new(0.0, 1.5, -40.0));
        far.velocity = Vec3::new(0.0, 0.0, -0.1);
        b.resolve(&mut far);
        assert_eq!(far.pose.position.z, -37.0);
        assert_eq!(far.velocity.z, 0.05);
    }

    #[test]
    fn ceiling_reflects_weakly() {
        let b = maze_bounds();
        let mut drone = DroneState::at_rest(Vec3::new(0.0, 8.0, -10.0));
        drone.velocity = Vec3::new(0.0, 0.1, 0.0);
        let hit = b.resolve(&mut drone);
        assert!(hit.ceiling);
        assert_eq!(drone.pose.position.y, 7.5);
        assert!((drone.velocity.y + 0.01).abs() < 1e-7);
    }

    #[test]
    fn inside_is_untouched() {
        let b = maze_bounds();
        let mut drone = DroneState::at_rest(Vec3::new(1.0, 3.0, -20.0));
        drone.velocity = Vec3::new(0.1, 0.1, 0.1);
        let before = drone;
        assert!(!b.resolve(&mut drone).any());
        assert_eq!(drone, before);
    }
}
