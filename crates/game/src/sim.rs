//! The simulation core: everything one frame touches, and the frame itself.
//!
//! A frame runs in a fixed order: advance the clock, fire due deferred
//! events, handle a restart press, sample input, integrate the drone, run
//! mission checks, then age the on-screen notices.

use std::time::Duration;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use audio::CuePlayer;
use engine_core::{Scheduler, Time};
use input::{keys, InputState};
use physics::{integrate, DroneState, ParameterProfile, Persona};

use crate::config::MissionTiming;
use crate::course::Course;
use crate::events::GameEvent;
use crate::hud::hud_text;
use crate::mission::{Checklist, Deferred, GamePhase, MissionId, MissionState, StartReason};
use crate::notices::Notices;

pub struct Simulation {
    pub(crate) time: Time,
    pub(crate) input: InputState,
    pub(crate) rng: StdRng,
    pub(crate) persona: Persona,
    pub(crate) profile: ParameterProfile,
    pub(crate) drone: DroneState,
    pub(crate) course: Course,
    pub(crate) mission: MissionState,
    pub(crate) scheduler: Scheduler<Deferred>,
    pub(crate) notices: Notices,
    pub(crate) audio: Box<dyn CuePlayer>,
    pub(crate) timing: MissionTiming,
    /// Outbox, drained by `frame`.
    pub(crate) events: Vec<GameEvent>,
}

impl Simulation {
    /// A simulation sitting on the mode-selection screen.
    pub fn new(seed: u64, timing: MissionTiming, audio: Box<dyn CuePlayer>) -> Self {
        let course = Course::idle();
        Self {
            time: Time::new(),
            input: InputState::new(),
            rng: StdRng::seed_from_u64(seed),
            persona: Persona::Optimizer,
            profile: ParameterProfile::default(),
            drone: DroneState::at_rest(course.spawn),
            course,
            mission: MissionState::default(),
            scheduler: Scheduler::new(),
            notices: Notices::new(),
            audio,
            timing,
            events: Vec::new(),
        }
    }

    /// Step the world by `dt` seconds and return everything that happened
    /// since the previous call.
    pub fn frame(&mut self, dt: f32) -> Vec<GameEvent> {
        self.time.advance(dt);
        self.run_deferred();

        if self.mission.phase == GamePhase::Flying && self.input.is_pressed(keys::RESTART) {
            self.reset_mission(StartReason::Restart);
        }

        if self.mission.phase == GamePhase::Flying {
            let intent = self.input.flight_intent();
            integrate(
                &mut self.drone,
                &self.profile,
                intent,
                &self.course.environment,
                &mut self.rng,
                self.time.delta_seconds(),
            );
            self.run_mission_checks();
        }

        self.notices.update(self.time.delta_seconds());
        self.input.begin_frame();
        std::mem::take(&mut self.events)
    }

    fn run_deferred(&mut self) {
        while let Some((id, event)) = self.scheduler.pop_due(self.time.elapsed()) {
            log::trace!("Deferred {:?} fired", event);
            self.on_deferred(id, event);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.mission.phase
    }

    /// The mission being flown, or about to be after a transition.
    pub fn mission(&self) -> MissionId {
        self.mission.current
    }

    pub fn checklist(&self) -> &Checklist {
        &self.mission.checklist
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn profile(&self) -> &ParameterProfile {
        &self.profile
    }

    pub fn drone(&self) -> &DroneState {
        &self.drone
    }

    pub fn course(&self) -> &Course {
        &self.course
    }

    pub fn notices(&self) -> &Notices {
        &self.notices
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    /// Whether the finished course is waiting for its transition.
    pub fn is_cleared(&self) -> bool {
        self.mission.cleared
    }

    /// Seconds since the current mission was (re)built.
    pub fn mission_elapsed(&self) -> f32 {
        self.mission_elapsed_duration().as_secs_f32()
    }

    /// Maze countdown, only while flying mission 2.
    pub fn time_left(&self) -> Option<f32> {
        if self.mission.phase != GamePhase::Flying || self.course.mission != MissionId::Two {
            return None;
        }
        let limit = self.timing.mission2_time_limit();
        Some(limit.saturating_sub(self.mission_elapsed_duration()).as_secs_f32())
    }

    /// Where the drone should head next.
    pub fn current_target(&self) -> Option<Vec3> {
        if self.mission.cleared {
            return None;
        }
        self.course.track.current_target()
    }

    pub fn hud_text(&self) -> String {
        hud_text(
            self.persona.name(),
            self.mission.current.number(),
            &self.mission.checklist,
            self.time_left(),
        )
    }

    /// Pending deferred events, mostly for diagnostics.
    pub fn pending_deferred(&self) -> usize {
        self.scheduler.len()
    }

    /// Time until the maze fail timer fires, if armed.
    pub fn fail_timer_remaining(&self) -> Option<Duration> {
        self.mission.fail_timer?;
        Some(self.timing.mission2_time_limit().saturating_sub(self.mission_elapsed_duration()))
    }
}
