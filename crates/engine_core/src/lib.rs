//! Core engine types and utilities for the drone pilot trial.
//!
//! This crate provides the foundational types used across all engine systems:
//! - Drone pose and heading math
//! - Simulated time and deferred events
//! - Shared per-frame components

pub mod components;
pub mod scheduler;
pub mod time;
pub mod transform;

pub use components::*;
pub use scheduler::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Quat, Vec2, Vec3};
