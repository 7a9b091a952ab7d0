//! Mission state machine.
//!
//! Flow: persona selected → mission 1 → 2 → 3 → game ended → persona
//! selected again. A finished mission is *cleared* until its deferred
//! transition fires; the drone keeps flying but no goal, collision, bounds or
//! timeout checks run in that window.

use std::time::Duration;

use audio::Cue;
use engine_core::TimerId;
use physics::{resolve_obstacles, DroneState, ParameterProfile, Persona};

use crate::checkpoints::TrackProgress;
use crate::course::Course;
use crate::events::GameEvent;
use crate::sim::Simulation;

const OPENING_QUOTE: &str = "Turn sparks into systems.";
const NOISE_WARNING: &str = "WARNING: Sensor Noise Detected! Escape the maze!";
const TIME_OVER: &str = "Time Over! Retrying...";
const COLLISION_WARNING: &str = "COLLISION!";
const WARNING_TOAST_SECONDS: f32 = 2.0;
const COLLISION_TOAST_SECONDS: f32 = 1.0;
const COLLISION_FLASH_SECONDS: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissionId {
    One,
    Two,
    Three,
}

impl MissionId {
    /// 1-based mission number shown on the HUD.
    pub fn number(&self) -> u8 {
        match self {
            MissionId::One => 1,
            MissionId::Two => 2,
            MissionId::Three => 3,
        }
    }

    /// The mission after this one; `None` after the last.
    pub fn next(&self) -> Option<MissionId> {
        match self {
            MissionId::One => Some(MissionId::Two),
            MissionId::Two => Some(MissionId::Three),
            MissionId::Three => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MissionId::One => "M1: From Spark to Flight",
            MissionId::Two => "M2: Debug Under Pressure",
            MissionId::Three => "M3: Team Tactics",
        }
    }

    pub fn briefing(&self) -> &'static str {
        match self {
            MissionId::One => "Fly through the randomly generated course.",
            MissionId::Two => "Escape the maze with an unstable system. (60s)",
            MissionId::Three => "Score a goal in strong winds.",
        }
    }

    /// Narration shown when the mission is completed.
    pub fn completion_quote(&self) -> &'static str {
        match self {
            MissionId::One => "Every failure is data. Every success, a system.",
            MissionId::Two => "Complexity mastered is simplicity.",
            MissionId::Three => "A well-built system appears to have a life of its own.",
        }
    }
}

/// The three traits earned across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Checklist {
    /// Earned by escaping the maze.
    pub systems: bool,
    /// Earned by scoring the wind goal.
    pub prototyping: bool,
    /// Earned by flying the ring course.
    pub leading: bool,
}

impl Checklist {
    pub fn mark(&mut self, mission: MissionId) {
        match mission {
            MissionId::One => self.leading = true,
            MissionId::Two => self.systems = true,
            MissionId::Three => self.prototyping = true,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.systems && self.prototyping && self.leading
    }
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a persona on the mode-selection screen.
    NotStarted,
    /// Flying one of the missions.
    Flying,
    /// All missions done; mode selection shown again.
    GameEnded,
}

impl GamePhase {
    /// Title and subtitle of the mode-selection overlay, when it is visible.
    pub fn overlay(&self) -> Option<(&'static str, &'static str)> {
        match self {
            GamePhase::NotStarted => Some(("Drone Pilot: Systems Thinker Trial", "Choose Your Design Philosophy")),
            GamePhase::Flying => None,
            GamePhase::GameEnded => Some(("ALL MISSIONS COMPLETE", "Would you like to try again?")),
        }
    }
}

/// Why a mission was (re)built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartReason {
    /// First attempt, from persona selection or after the previous mission.
    New,
    /// The pilot asked for a restart.
    Restart,
    /// The maze clock ran out.
    TimedOut,
}

/// Deferred state-machine actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Deferred {
    /// Build the (already incremented) current mission.
    AdvanceMission,
    EndGame,
    /// The maze fail timer.
    MazeTimeout,
}

#[derive(Debug, Clone)]
pub struct MissionState {
    pub phase: GamePhase,
    pub current: MissionId,
    pub checklist: Checklist,
    /// Clock time of the last (re)build.
    pub started_at: Duration,
    /// Current course finished, waiting for the deferred transition.
    pub cleared: bool,
    pub(crate) fail_timer: Option<TimerId>,
}

impl Default for MissionState {
    fn default() -> Self {
        Self {
            phase: GamePhase::NotStarted,
            current: MissionId::One,
            checklist: Checklist::default(),
            started_at: Duration::ZERO,
            cleared: false,
            fail_timer: None,
        }
    }
}

impl Simulation {
    /// Begin a run with `persona`. Ignored while a run is in progress.
    pub(crate) fn start_game(&mut self, persona: Persona) -> bool {
        if self.mission.phase == GamePhase::Flying {
            log::debug!("Ignoring persona selection mid-run");
            return false;
        }
        log::info!("Starting run as {}", persona);
        self.persona = persona;
        self.profile = ParameterProfile::for_persona(persona);
        self.mission.phase = GamePhase::Flying;
        self.mission.current = MissionId::One;
        self.mission.checklist = Checklist::default();
        self.notices.narrate(OPENING_QUOTE);
        self.reset_mission(StartReason::New);
        true
    }

    /// (Re)build the current mission from scratch.
    pub(crate) fn reset_mission(&mut self, reason: StartReason) {
        self.cancel_fail_timer();

        let mission = self.mission.current;
        self.course = Course::build(mission, &mut self.rng);
        self.drone = DroneState::at_rest(self.course.spawn);
        self.mission.started_at = self.time.elapsed();
        self.mission.cleared = false;

        self.notices.show_mission_card(mission.title(), mission.briefing());
        if mission == MissionId::Two {
            self.notices.toast(NOISE_WARNING, WARNING_TOAST_SECONDS);
            let limit = self.timing.mission2_time_limit();
            // A zero-delay timer would fire again inside the same frame after
            // every retry; the per-frame timeout check covers that case.
            if !limit.is_zero() {
                let id = self.scheduler.schedule(self.time.elapsed(), limit, Deferred::MazeTimeout);
                self.mission.fail_timer = Some(id);
            }
        }
        if reason == StartReason::TimedOut {
            self.notices.toast(TIME_OVER, WARNING_TOAST_SECONDS);
        }

        log::info!("Mission {} started ({:?})", mission.number(), reason);
        self.events.push(GameEvent::MissionStarted { mission, reason });
    }

    fn cancel_fail_timer(&mut self) {
        if let Some(id) = self.mission.fail_timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn complete_mission(&mut self) {
        let mission = self.mission.current;
        self.audio.play(Cue::Complete);
        self.mission.checklist.mark(mission);
        self.mission.cleared = true;
        self.notices.narrate(mission.completion_quote());
        log::info!("Mission {} complete", mission.number());
        self.events.push(GameEvent::MissionCompleted { mission });

        let now = self.time.elapsed();
        match mission.next() {
            Some(next) => {
                if mission == MissionId::Two {
                    self.course.environment.noise = false;
                    self.cancel_fail_timer();
                }
                self.mission.current = next;
                self.scheduler.schedule(now, self.timing.advance_delay(), Deferred::AdvanceMission);
            }
            None => {
                self.scheduler.schedule(now, self.timing.end_game_delay(), Deferred::EndGame);
            }
        }
    }

    fn fail_maze(&mut self) {
        log::info!("Maze timer expired, retrying mission 2");
        self.events.push(GameEvent::MissionFailed { mission: MissionId::Two });
        self.reset_mission(StartReason::TimedOut);
    }

    fn end_game(&mut self) {
        self.cancel_fail_timer();
        self.scheduler.clear();
        self.mission.phase = GamePhase::GameEnded;
        self.mission.current = MissionId::One;
        self.mission.checklist = Checklist::default();
        log::info!("All missions complete");
        self.events.push(GameEvent::GameEnded);
    }

    pub(crate) fn on_deferred(&mut self, id: TimerId, event: Deferred) {
        if self.mission.phase != GamePhase::Flying {
            return;
        }
        match event {
            Deferred::AdvanceMission => self.reset_mission(StartReason::New),
            Deferred::EndGame => self.end_game(),
            Deferred::MazeTimeout => {
                if self.mission.fail_timer != Some(id) {
                    return;
                }
                self.mission.fail_timer = None;
                if self.mission.current == MissionId::Two && !self.mission.cleared {
                    self.fail_maze();
                }
            }
        }
    }

    /// Goal, collision, bounds and timeout checks. Runs after integration.
    pub(crate) fn run_mission_checks(&mut self) {
        if self.mission.cleared {
            return;
        }
        self.check_goal();
        if self.mission.cleared || self.course.mission != MissionId::Two {
            return;
        }
        self.check_obstacles();
        if let Some(bounds) = self.course.bounds {
            let hit = bounds.resolve(&mut self.drone);
            if hit.any() {
                log::trace!("Drone held inside maze bounds: {:?}", hit);
            }
        }
        if self.mission_elapsed_duration() >= self.timing.mission2_time_limit() {
            self.fail_maze();
        }
    }

    fn check_goal(&mut self) {
        let mission = self.course.mission;
        let (index, finished) = match self.course.track.check(self.drone.position()) {
            TrackProgress::Pending => return,
            TrackProgress::Passed { index } => (index, false),
            TrackProgress::Finished { index } => (index, true),
        };
        self.audio.play(Cue::Pass);
        log::debug!("Mission {} checkpoint {} reached", mission.number(), index);
        self.events.push(GameEvent::CheckpointReached { mission, index });
        if finished {
            self.complete_mission();
        }
    }

    fn check_obstacles(&mut self) {
        if let Some(contact) = resolve_obstacles(&mut self.drone, &self.course.obstacles) {
            self.audio.play(Cue::Impact);
            self.notices.flash(COLLISION_FLASH_SECONDS);
            self.notices.toast(COLLISION_WARNING, COLLISION_TOAST_SECONDS);
            self.events.push(GameEvent::Collision { obstacle: contact.obstacle });
        }
    }

    pub(crate) fn mission_elapsed_duration(&self) -> Duration {
        self.time.elapsed().saturating_sub(self.mission.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missions_run_in_order() {
        assert_eq!(MissionId::One.next(), Some(MissionId::Two));
        assert_eq!(MissionId::Two.next(), Some(MissionId::Three));
        assert_eq!(MissionId::Three.next(), None);
        assert_eq!(MissionId::Three.number(), 3);
    }

    #[test]
    fn checklist_flags_follow_missions() {
        let mut checklist = Checklist::default();
        checklist.mark(MissionId::One);
        assert!(checklist.leading && !checklist.systems && !checklist.prototyping);
        checklist.mark(MissionId::Two);
        assert!(checklist.systems);
        assert!(!checklist.is_complete());
        checklist.mark(MissionId::Three);
        assert!(checklist.prototyping);
        assert!(checklist.is_complete());
    }

    #[test]
    fn overlay_only_when_not_flying() {
        assert!(GamePhase::NotStarted.overlay().is_some());
        assert!(GamePhase::Flying.overlay().is_none());
        assert_eq!(GamePhase::GameEnded.overlay().map(|(t, _)| t), Some("ALL MISSIONS COMPLETE"));
    }
}
