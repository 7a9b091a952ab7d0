//! Arcade flight physics for the drone: parameter profiles, the per-frame
//! integrator, and the obstacle/bounds resolver used inside the maze.

pub mod bounds;
pub mod collision;
pub mod flight;
pub mod profile;

pub use bounds::*;
pub use collision::*;
pub use flight::*;
pub use profile::*;
