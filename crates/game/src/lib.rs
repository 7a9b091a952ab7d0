//! Drone Pilot: Systems Thinker Trial.
//!
//! A three-mission flight trial driven one frame at a time by a host. The
//! host feeds [`HostEvent`]s in, calls [`Simulation::frame`] and reads the
//! drone, course, HUD and notices back out.

pub mod autopilot;
pub mod checkpoints;
pub mod config;
pub mod course;
pub mod events;
pub mod hud;
pub mod mission;
pub mod notices;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{AudioConfig, ConfigError, GameConfig, MissionTiming};
pub use events::{GameEvent, HostEvent};
pub use mission::{Checklist, GamePhase, MissionId, StartReason};
pub use sim::Simulation;
