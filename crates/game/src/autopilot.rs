//! Scripted pilot for headless runs. Holds the same keys a player would,
//! steering toward the current target with the nose pointed down -Z.

use std::collections::BTreeSet;

use glam::Vec3;

use input::keys;
use physics::DroneState;

use crate::events::HostEvent;

/// Keys stay released while the predicted position is this close on an axis.
const DEADBAND: f32 = 0.6;
/// How many reference frames ahead to predict the drone's position.
const LOOKAHEAD_FRAMES: f32 = 12.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    held: BTreeSet<&'static str>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys the autopilot currently holds.
    pub fn held(&self) -> impl Iterator<Item = &&'static str> {
        self.held.iter()
    }

    /// Key changes needed to fly toward `target`. With no target every key
    /// is released.
    pub fn steer(&mut self, drone: &DroneState, target: Option<Vec3>) -> Vec<HostEvent> {
        let wanted = match target {
            Some(target) => wanted_keys(drone, target),
            None => BTreeSet::new(),
        };

        let mut events: Vec<HostEvent> = self
            .held
            .difference(&wanted)
            .map(|key| HostEvent::key_up(key))
            .collect();
        events.extend(wanted.difference(&self.held).map(|key| HostEvent::key_down(key)));
        self.held = wanted;
        events
    }
}

fn wanted_keys(drone: &DroneState, target: Vec3) -> BTreeSet<&'static str> {
    let predicted = drone.position() + drone.velocity * LOOKAHEAD_FRAMES;
    let delta = target - predicted;
    let mut wanted = BTreeSet::new();

    if delta.y > DEADBAND {
        wanted.insert(keys::ASCEND);
    } else if delta.y < -DEADBAND {
        wanted.insert(keys::DESCEND);
    }
    // Facing yaw 0: forward flies toward -Z, strafe right toward +X.
    if delta.z < -DEADBAND {
        wanted.insert(keys::FORWARD);
    } else if delta.z > DEADBAND {
        wanted.insert(keys::BACK);
    }
    if delta.x < -DEADBAND {
        wanted.insert(keys::STRAFE_LEFT);
    } else if delta.x > DEADBAND {
        wanted.insert(keys::STRAFE_RIGHT);
    }
    wanted
}
