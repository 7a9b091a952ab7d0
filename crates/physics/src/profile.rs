//! Pilot personas and the physical constants they fly with.

use std::fmt;
use std::str::FromStr;

/// Pilot archetype chosen at game start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    /// Heavier damping, lower top speed.
    Optimizer,
    /// Snappier thrust, less drag, more tilt.
    Prototyper,
}

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::Optimizer, Persona::Prototyper];

    pub fn name(&self) -> &'static str {
        match self {
            Persona::Optimizer => "optimizer",
            Persona::Prototyper => "prototyper",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown persona {0:?} (expected \"optimizer\" or \"prototyper\")")]
pub struct UnknownPersona(pub String);

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "optimizer" => Ok(Persona::Optimizer),
            "prototyper" => Ok(Persona::Prototyper),
            _ => Err(UnknownPersona(s.to_string())),
        }
    }
}

/// Physical constants for one flight, in per-reference-frame units.
///
/// `thrust`, `gravity` and `speed_limit` are fixed once the persona is
/// picked. `drag` and `tilt_gain` follow the tuning sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterProfile {
    thrust: f32,
    drag: f32,
    gravity: f32,
    speed_limit: f32,
    tilt_gain: f32,
}

impl ParameterProfile {
    pub const OPTIMIZER: ParameterProfile = ParameterProfile {
        thrust: 0.014,
        drag: 0.975,
        gravity: -0.0018,
        speed_limit: 0.16,
        tilt_gain: 0.45,
    };

    pub const PROTOTYPER: ParameterProfile = ParameterProfile {
        thrust: 0.018,
        drag: 0.950,
        gravity: -0.0018,
        speed_limit: 0.22,
        tilt_gain: 0.65,
    };

    /// A fresh copy of the persona's preset. Edits to it never touch the preset.
    pub fn for_persona(persona: Persona) -> Self {
        match persona {
            Persona::Optimizer => Self::OPTIMIZER,
            Persona::Prototyper => Self::PROTOTYPER,
        }
    }

    pub fn thrust(&self) -> f32 {
        self.thrust
    }

    pub fn drag(&self) -> f32 {
        self.drag
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn speed_limit(&self) -> f32 {
        self.speed_limit
    }

    pub fn tilt_gain(&self) -> f32 {
        self.tilt_gain
    }

    /// Drag slider. The slider's own range is the only validation.
    pub fn set_drag(&mut self, drag: f32) {
        self.drag = drag;
    }

    /// Tilt slider.
    pub fn set_tilt_gain(&mut self, tilt_gain: f32) {
        self.tilt_gain = tilt_gain;
    }
}

impl Default for ParameterProfile {
    fn default() -> Self {
        Self::OPTIMIZER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_parses_case_insensitively() {
        assert_eq!("Optimizer".parse::<Persona>(), Ok(Persona::Optimizer));
        assert_eq!(" PROTOTYPER ".parse::<Persona>(), Ok(Persona::Prototyper));
        assert!("ace".parse::<Persona>().is_err());
    }

    #[test]
    fn persona_name_round_trips() {
        for persona in Persona::ALL {
            assert_eq!(persona.name().parse::<Persona>(), Ok(persona));
        }
    }

    #[test]
    fn slider_edits_do_not_touch_preset() {
        let mut active = ParameterProfile::for_persona(Persona::Prototyper);
        active.set_drag(0.9);
        active.set_tilt_gain(1.0);
        assert_eq!(active.drag(), 0.9);
        assert_eq!(active.tilt_gain(), 1.0);
        assert_eq!(ParameterProfile::PROTOTYPER.drag(), 0.950);
        assert_eq!(ParameterProfile::for_persona(Persona::Prototyper).tilt_gain(), 0.65);
        // Fixed fields are untouched by the sliders.
        assert_eq!(active.thrust(), 0.018);
        assert_eq!(active.speed_limit(), 0.22);
    }

    #[test]
    fn presets_are_physically_sane() {
        for persona in Persona::ALL {
            let p = ParameterProfile::for_persona(persona);
            assert!(p.thrust() > 0.0);
            assert!(p.drag() > 0.0 && p.drag() < 1.0);
            assert!(p.gravity() < 0.0);
            assert!(p.speed_limit() > 0.0);
        }
    }
}
