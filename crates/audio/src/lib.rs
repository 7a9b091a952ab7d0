//! Fire-and-forget sound cues for simulation events.
//!
//! The simulation only ever calls [`CuePlayer::play`]. Whatever goes wrong
//! behind that call is logged and swallowed, so flight and mission logic run
//! the same with or without sound.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

#[cfg(feature = "kira")]
mod kira_backend;

#[cfg(feature = "kira")]
pub use kira_backend::KiraCues;

/// The three sounds the game makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A checkpoint was reached.
    Pass,
    /// The drone hit an obstacle.
    Impact,
    /// A mission was completed.
    Complete,
}

impl Cue {
    pub const ALL: [Cue; 3] = [Cue::Pass, Cue::Impact, Cue::Complete];
}

/// Anything that can play cues. Must never fail outward.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing. Used when audio is disabled or unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCues;

impl CuePlayer for SilentCues {
    fn play(&mut self, _cue: Cue) {}
}

/// Records cues instead of playing them. Clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct CueLog {
    played: Rc<RefCell<Vec<Cue>>>,
}

impl CueLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cue played so far, oldest first.
    pub fn played(&self) -> Vec<Cue> {
        self.played.borrow().clone()
    }

    pub fn count(&self, cue: Cue) -> usize {
        self.played.borrow().iter().filter(|c| **c == cue).count()
    }
}

impl CuePlayer for CueLog {
    fn play(&mut self, cue: Cue) {
        self.played.borrow_mut().push(cue);
    }
}

/// Where to find cue sounds and how loud to play them.
#[derive(Debug, Clone, PartialEq)]
pub struct CueSettings {
    pub enabled: bool,
    /// Master volume, 0.0 to 1.0.
    pub volume: f64,
    pub pass: Option<PathBuf>,
    pub impact: Option<PathBuf>,
    pub complete: Option<PathBuf>,
}

impl Default for CueSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 0.15,
            pass: None,
            impact: None,
            complete: None,
        }
    }
}

impl CueSettings {
    pub fn path_for(&self, cue: Cue) -> Option<&PathBuf> {
        match cue {
            Cue::Pass => self.pass.as_ref(),
            Cue::Impact => self.impact.as_ref(),
            Cue::Complete => self.complete.as_ref(),
        }
    }
}

/// Try to build the real backend.
pub fn try_open(settings: &CueSettings) -> anyhow::Result<Box<dyn CuePlayer>> {
    #[cfg(feature = "kira")]
    {
        Ok(Box::new(KiraCues::new(settings)?))
    }
    #[cfg(not(feature = "kira"))]
    {
        let _ = settings;
        anyhow::bail!("built without the `kira` feature")
    }
}

/// Build the real backend, or fall back to silence if that is impossible.
pub fn open_or_silent(settings: &CueSettings) -> Box<dyn CuePlayer> {
    if !settings.enabled {
        log::info!("Audio disabled, cues are silent");
        return Box::new(SilentCues);
    }
    match try_open(settings) {
        Ok(player) => player,
        Err(e) => {
            log::warn!("Audio unavailable ({:#}), cues are silent", e);
            Box::new(SilentCues)
        }
    }
}
