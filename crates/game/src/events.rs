//! Host-facing event surface.
//!
//! The host (a window, a test, the headless autopilot) pushes [`HostEvent`]s
//! in and collects [`GameEvent`]s out of each frame.

use physics::Persona;

use crate::mission::{MissionId, StartReason};
use crate::sim::Simulation;

/// Something the host wants the simulation to know about.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Persona chosen on the mode-selection screen.
    SelectPersona(Persona),
    /// Drag slider moved.
    SetDrag(f32),
    /// Tilt slider moved.
    SetTiltGain(f32),
    /// Key down or up, using the host's key string. A fresh `r` press
    /// restarts the current mission on the next frame.
    Key { key: String, pressed: bool },
    /// Window lost focus; every held key counts as released.
    FocusLost,
}

impl HostEvent {
    pub fn key_down(key: &str) -> Self {
        HostEvent::Key { key: key.to_string(), pressed: true }
    }

    pub fn key_up(key: &str) -> Self {
        HostEvent::Key { key: key.to_string(), pressed: false }
    }
}

/// Something that happened inside the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MissionStarted { mission: MissionId, reason: StartReason },
    CheckpointReached { mission: MissionId, index: usize },
    /// The drone was pushed out of obstacle `obstacle`.
    Collision { obstacle: usize },
    MissionCompleted { mission: MissionId },
    /// The maze clock ran out; a retry follows immediately.
    MissionFailed { mission: MissionId },
    GameEnded,
}

impl Simulation {
    /// Apply one host event. Results show up in the next [`Simulation::frame`].
    pub fn handle_event(&mut self, event: HostEvent) {
        match event {
            HostEvent::SelectPersona(persona) => {
                self.start_game(persona);
            }
            HostEvent::SetDrag(drag) => {
                log::debug!("Drag set to {}", drag);
                self.profile.set_drag(drag);
            }
            HostEvent::SetTiltGain(tilt_gain) => {
                log::debug!("Tilt gain set to {}", tilt_gain);
                self.profile.set_tilt_gain(tilt_gain);
            }
            HostEvent::Key { key, pressed } => {
                self.input.process_key(&key, pressed);
            }
            HostEvent::FocusLost => self.input.release_all(),
        }
    }
}
