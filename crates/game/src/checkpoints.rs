//! Ordered proximity targets.

use glam::Vec3;

/// How close the drone must get to a checkpoint to count it.
pub const GOAL_RADIUS: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    pub position: Vec3,
    /// Lit up by the renderer once passed.
    pub reached: bool,
}

/// Result of one proximity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackProgress {
    /// Current checkpoint not reached (or track already finished).
    Pending,
    /// Checkpoint `index` reached, more to go.
    Passed { index: usize },
    /// Checkpoint `index` reached and it was the last one.
    Finished { index: usize },
}

/// Checkpoints that must be visited strictly in order.
#[derive(Debug, Clone, Default)]
pub struct CheckpointTrack {
    checkpoints: Vec<Checkpoint>,
    current: usize,
}

impl CheckpointTrack {
    pub fn new(positions: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            checkpoints: positions
                .into_iter()
                .map(|position| Checkpoint { position, reached: false })
                .collect(),
            current: 0,
        }
    }

    /// Check the drone against the current checkpoint only, advancing at most one.
    pub fn check(&mut self, drone_position: Vec3) -> TrackProgress {
        let index = self.current;
        let Some(checkpoint) = self.checkpoints.get_mut(index) else {
            return TrackProgress::Pending;
        };
        if checkpoint.position.distance(drone_position) >= GOAL_RADIUS {
            return TrackProgress::Pending;
        }
        checkpoint.reached = true;
        self.current += 1;
        if self.is_finished() {
            TrackProgress::Finished { index }
        } else {
            TrackProgress::Passed { index }
        }
    }

    /// Index of the next checkpoint to visit.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Position of the next checkpoint, if any remain.
    pub fn current_target(&self) -> Option<Vec3> {
        self.checkpoints.get(self.current).map(|c| c.position)
    }

    pub fn is_finished(&self) -> bool {
        !self.checkpoints.is_empty() && self.current >= self.checkpoints.len()
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_track(n: usize) -> CheckpointTrack {
        CheckpointTrack::new((0..n).map(|i| Vec3::new(0.0, 3.0, -10.0 * (i as f32 + 1.0))))
    }

    #[test]
    fn later_checkpoint_is_not_skip_satisfied() {
        let mut track = line_track(4);
        let third = track.checkpoints()[2].position;
        assert_eq!(track.check(third), TrackProgress::Pending);
        assert_eq!(track.current_index(), 0);
        assert!(!track.checkpoints()[2].reached);
    }

    #[test]
    fn one_advance_per_check_even_when_in_range_of_several() {
        // Two checkpoints closer together than the goal radius.
        let mut track = CheckpointTrack::new([Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -40.0)]);
        let between = Vec3::new(0.0, 0.0, -0.5);
        assert_eq!(track.check(between), TrackProgress::Passed { index: 0 });
        assert_eq!(track.current_index(), 1);
        assert_eq!(track.check(between), TrackProgress::Passed { index: 1 });
        assert_eq!(track.current_index(), 2);
    }

    #[test]
    fn visiting_in_order_finishes_exactly_at_the_end() {
        let mut track = line_track(5);
        let positions: Vec<_> = track.checkpoints().iter().map(|c| c.position).collect();
        for (i, p) in positions.iter().enumerate() {
            let progress = track.check(*p);
            if i + 1 < positions.len() {
                assert_eq!(progress, TrackProgress::Passed { index: i });
                assert!(!track.is_finished());
            } else {
                assert_eq!(progress, TrackProgress::Finished { index: i });
            }
        }
        assert!(track.is_finished());
        assert!(track.checkpoints().iter().all(|c| c.reached));
        assert!(track.current_target().is_none());
        // Nothing left to report.
        assert_eq!(track.check(positions[4]), TrackProgress::Pending);
    }

    #[test]
    fn radius_boundary_is_exclusive() {
        let mut track = line_track(1);
        let target = track.checkpoints()[0].position;
        assert_eq!(track.check(target + Vec3::new(GOAL_RADIUS, 0.0, 0.0)), TrackProgress::Pending);
        assert_eq!(track.check(target + Vec3::new(2.4, 0.0, 0.0)), TrackProgress::Finished { index: 0 });
    }

    #[test]
    fn empty_track_never_finishes() {
        let mut track = CheckpointTrack::default();
        assert_eq!(track.check(Vec3::ZERO), TrackProgress::Pending);
        assert!(!track.is_finished());
    }
}
