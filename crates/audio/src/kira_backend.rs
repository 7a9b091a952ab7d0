//! Cue playback through Kira.

use anyhow::Result;
use kira::{
    manager::{AudioManager, AudioManagerSettings, backend::DefaultBackend},
    sound::static_sound::{StaticSoundData, StaticSoundHandle, StaticSoundSettings},
    tween::Tween,
};
use std::collections::HashMap;

use crate::{Cue, CuePlayer, CueSettings};

/// Plays cue sounds loaded from files. Cues without a loadable file stay silent.
pub struct KiraCues {
    manager: AudioManager,
    sounds: HashMap<Cue, StaticSoundData>,
    active_sounds: Vec<StaticSoundHandle>,
}

impl KiraCues {
    /// Create the audio manager and load whatever cue files are configured.
    pub fn new(settings: &CueSettings) -> Result<Self> {
        let mut manager = AudioManager::<DefaultBackend>::new(AudioManagerSettings::default())?;
        let _ = manager.main_track().set_volume(settings.volume, Tween::default());

        let mut sounds = HashMap::new();
        for cue in Cue::ALL {
            let Some(path) = settings.path_for(cue) else {
                continue;
            };
            match StaticSoundData::from_file(path) {
                Ok(data) => {
                    sounds.insert(cue, data);
                }
                Err(e) => log::warn!("Could not load {:?} cue from {:?}: {}", cue, path, e),
            }
        }
        log::info!("Audio ready with {} of {} cues", sounds.len(), Cue::ALL.len());

        Ok(Self {
            manager,
            sounds,
            active_sounds: Vec::new(),
        })
    }

    fn try_play(&mut self, cue: Cue) -> Result<()> {
        if let Some(sound_data) = self.sounds.get(&cue) {
            let settings = StaticSoundSettings::new().volume(1.0);
            let handle = self.manager.play(sound_data.clone().with_settings(settings))?;
            self.active_sounds.push(handle);
        }
        Ok(())
    }

    /// Clean up finished sounds.
    fn cleanup(&mut self) {
        self.active_sounds.retain(|handle| handle.state() != kira::sound::PlaybackState::Stopped);
    }
}

impl CuePlayer for KiraCues {
    fn play(&mut self, cue: Cue) {
        self.cleanup();
        if let Err(e) = self.try_play(cue) {
            log::warn!("Failed to play {:?} cue: {}", cue, e);
        }
    }
}
