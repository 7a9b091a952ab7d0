//! Common per-frame components shared between input and physics.

/// What the pilot asks the drone to do this frame.
///
/// Opposing flags may both be set; each one applies its own impulse, so
/// holding forward and back together cancels out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightIntent {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub ascend: bool,
    pub descend: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
}

impl FlightIntent {
    /// True when any horizontal translation is requested.
    pub fn wants_translation(&self) -> bool {
        self.forward || self.back || self.strafe_left || self.strafe_right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intent_does_not_translate() {
        assert!(!FlightIntent::default().wants_translation());
    }

    #[test]
    fn vertical_only_intent_is_not_translation() {
        let intent = FlightIntent { ascend: true, yaw_left: true, ..Default::default() };
        assert!(!intent.wants_translation());
        assert!(FlightIntent { strafe_right: true, ..intent }.wants_translation());
    }
}
