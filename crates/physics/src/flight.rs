//! Per-frame flight integration.
//!
//! All tuning constants are per reference frame (1/60 s). A step of `dt`
//! seconds is `k = dt / REFERENCE_FRAME_SECONDS` reference frames: additive
//! terms scale by `k`, multiplicative ones are raised to the power `k`.

use engine_core::{DronePose, FlightIntent, REFERENCE_FRAME_SECONDS};
use glam::Vec3;
use rand::Rng;

use crate::profile::ParameterProfile;

/// Horizontal thrust only works above this height.
pub const AIRBORNE_HEIGHT: f32 = 1.01;
/// Global inelastic floor.
pub const FLOOR_HEIGHT: f32 = 1.0;
/// Yaw change per reference frame while a rotate key is held, radians.
pub const YAW_RATE: f32 = 0.022;
/// Ascend thrust relative to `thrust`. Descend uses 1.0.
pub const ASCEND_GAIN: f32 = 1.2;
/// Sensor noise jitter bound on X and Z velocity.
pub const NOISE_AMPLITUDE: f32 = 0.0015;
/// Fraction of the remaining tilt error closed per reference frame.
pub const TILT_SMOOTHING: f32 = 0.15;

/// Everything the simulation owns about the drone body.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DroneState {
    pub pose: DronePose,
    /// Per-reference-frame velocity.
    pub velocity: Vec3,
}

impl DroneState {
    /// Level and at rest at `position`.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            pose: DronePose::from_position(position),
            velocity: Vec3::ZERO,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.pose.position
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Mission-scoped forces acting on the drone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlightEnvironment {
    /// Added to velocity every reference frame.
    pub wind: Vec3,
    /// Random X/Z velocity jitter.
    pub noise: bool,
}

/// Clamp a velocity to `limit` while keeping its direction.
pub fn clamp_speed(velocity: Vec3, limit: f32) -> Vec3 {
    velocity.clamp_length_max(limit)
}

/// Advance the drone by `dt` seconds.
pub fn integrate<R: Rng + ?Sized>(
    drone: &mut DroneState,
    profile: &ParameterProfile,
    intent: FlightIntent,
    env: &FlightEnvironment,
    rng: &mut R,
    dt: f32,
) {
    let k = dt / REFERENCE_FRAME_SECONDS;
    if !k.is_finite() || k <= 0.0 {
        return;
    }

    let forward = drone.pose.forward();
    let right = drone.pose.right();
    let impulse = profile.thrust() * k;

    if drone.pose.position.y > AIRBORNE_HEIGHT && intent.wants_translation() {
        // Forward key flies along -forward: the camera trails on +Z.
        if intent.forward {
            drone.velocity -= forward * impulse;
        }
        if intent.back {
            drone.velocity += forward * impulse;
        }
        if intent.strafe_left {
            drone.velocity -= right * impulse;
        }
        if intent.strafe_right {
            drone.velocity += right * impulse;
        }
    }
    if intent.ascend {
        drone.velocity.y += impulse * ASCEND_GAIN;
    }
    if intent.descend {
        drone.velocity.y -= impulse;
    }
    if intent.yaw_left {
        drone.pose.yaw += YAW_RATE * k;
    }
    if intent.yaw_right {
        drone.pose.yaw -= YAW_RATE * k;
    }

    drone.velocity += env.wind * k;
    if env.noise {
        drone.velocity.x += rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE) * k;
        drone.velocity.z += rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE) * k;
    }

    drone.velocity *= profile.drag().powf(k);
    drone.velocity.y += profile.gravity() * k;
    drone.velocity = clamp_speed(drone.velocity, profile.speed_limit());

    drone.pose.position += drone.velocity * k;

    if drone.pose.position.y < FLOOR_HEIGHT {
        drone.pose.position.y = FLOOR_HEIGHT;
        drone.velocity.y = 0.0;
    }

    let target_pitch = drone.velocity.z * profile.tilt_gain();
    let target_roll = -drone.velocity.x * profile.tilt_gain();
    let blend = 1.0 - (1.0 - TILT_SMOOTHING).powf(k);
    drone.pose.pitch += (target_pitch - drone.pose.pitch) * blend;
    drone.pose.roll += (target_roll - drone.pose.roll) * blend;
}
