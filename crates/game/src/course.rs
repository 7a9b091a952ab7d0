//! Mission courses: spawn point, checkpoints, pillars, walls and weather.
//!
//! Every (re)build of a mission makes a fresh `Course`. Nothing in it
//! survives a reset.

use glam::Vec3;
use rand::Rng;

use physics::{FlightEnvironment, Obstacle, WorldBounds};

use crate::checkpoints::CheckpointTrack;
use crate::mission::MissionId;

/// Number of rings in the first mission.
pub const RING_COUNT: usize = 5;
/// The first ring is placed relative to this point.
const RING_ANCHOR: Vec3 = Vec3::new(0.0, 3.0, -15.0);

/// Maze grid, one character per cell. `#` is a pillar.
pub const MAZE_LAYOUT: [&str; 9] = [
    "#### ####",
    "#   #   #",
    "### ### #",
    "# #   # #",
    "# ### ###",
    "#   #   #",
    "### ### #",
    "#   #   #",
    "#### ####",
];
/// Distance between neighbouring maze cells.
pub const MAZE_WALL_THICKNESS: f32 = 3.0;
/// Z of the first maze row. Rows grow toward -Z.
const MAZE_START_Z: f32 = -5.0;
const PILLAR_HEIGHT: f32 = 8.0;
/// Invisible ceiling sits just under the pillar tops.
const MAZE_CEILING: f32 = PILLAR_HEIGHT - 0.5;
const MAZE_EXIT: Vec3 = Vec3::new(0.0, 2.5, -35.0);
const MAZE_SPAWN: Vec3 = Vec3::new(0.0, 1.5, 0.0);

const WIND_GOAL: Vec3 = Vec3::new(0.0, 3.0, -40.0);
/// Wind components are drawn from [-WIND_SPREAD/2, WIND_SPREAD/2).
const WIND_SPREAD: f32 = 0.005;

/// Default spawn on the ground at the origin.
pub const DEFAULT_SPAWN: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Everything mission-specific the frame loop needs.
#[derive(Debug, Clone)]
pub struct Course {
    pub mission: MissionId,
    pub spawn: Vec3,
    pub track: CheckpointTrack,
    /// Only the maze has obstacles.
    pub obstacles: Vec<Obstacle>,
    /// Only the maze is walled in.
    pub bounds: Option<WorldBounds>,
    pub environment: FlightEnvironment,
}

impl Course {
    pub fn build<R: Rng + ?Sized>(mission: MissionId, rng: &mut R) -> Self {
        match mission {
            MissionId::One => ring_course(rng),
            MissionId::Two => maze(),
            MissionId::Three => wind_goal(rng),
        }
    }

    /// Empty, calm field shown behind the mode-selection screen.
    pub fn idle() -> Self {
        Course {
            mission: MissionId::One,
            spawn: DEFAULT_SPAWN,
            track: CheckpointTrack::default(),
            obstacles: Vec::new(),
            bounds: None,
            environment: FlightEnvironment::default(),
        }
    }
}

/// Mission 1: rings stepping away down -Z at random offsets.
fn ring_course<R: Rng + ?Sized>(rng: &mut R) -> Course {
    let mut last = RING_ANCHOR;
    let mut rings = Vec::with_capacity(RING_COUNT);
    for _ in 0..RING_COUNT {
        let next = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 25.0,
            2.0 + rng.gen::<f32>() * 6.0,
            last.z - (15.0 + rng.gen::<f32>() * 10.0),
        );
        rings.push(next);
        last = next;
    }
    Course {
        mission: MissionId::One,
        spawn: DEFAULT_SPAWN,
        track: CheckpointTrack::new(rings),
        obstacles: Vec::new(),
        bounds: None,
        environment: FlightEnvironment::default(),
    }
}

/// Centre of maze cell (row, col).
pub fn maze_cell_center(row: usize, col: usize, cols: usize) -> Vec3 {
    let x = (col as f32 - cols as f32 / 2.0 + 0.5) * MAZE_WALL_THICKNESS;
    let z = MAZE_START_Z - row as f32 * MAZE_WALL_THICKNESS;
    Vec3::new(x, PILLAR_HEIGHT / 2.0, z)
}

/// Mission 2: pillar maze with sensor noise and an exit gate.
fn maze() -> Course {
    let cols = MAZE_LAYOUT[0].len();
    let rows = MAZE_LAYOUT.len();
    let obstacles = MAZE_LAYOUT
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|(_, cell)| *cell == '#')
                .map(move |(col, _)| Obstacle::pillar(maze_cell_center(row, col, line.len())))
        })
        .collect();

    Course {
        mission: MissionId::Two,
        spawn: MAZE_SPAWN,
        track: CheckpointTrack::new([MAZE_EXIT]),
        obstacles,
        bounds: Some(WorldBounds::around_grid(cols, rows, MAZE_WALL_THICKNESS, MAZE_START_Z, MAZE_CEILING)),
        environment: FlightEnvironment {
            wind: Vec3::ZERO,
            noise: true,
        },
    }
}

/// Mission 3: one goal, steady random crosswind.
fn wind_goal<R: Rng + ?Sized>(rng: &mut R) -> Course {
    let wind = Vec3::new(
        (rng.gen::<f32>() - 0.5) * WIND_SPREAD,
        0.0,
        (rng.gen::<f32>() - 0.5) * WIND_SPREAD,
    );
    Course {
        mission: MissionId::Three,
        spawn: DEFAULT_SPAWN,
        track: CheckpointTrack::new([WIND_GOAL]),
        obstacles: Vec::new(),
        bounds: None,
        environment: FlightEnvironment { wind, noise: false },
    }
}
