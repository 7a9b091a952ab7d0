//! Time management for the game loop.
//!
//! The clock is advanced by the host, one frame at a time, so the simulation
//! never reads the wall clock and tests can drive it deterministically.

use std::time::Duration;

/// Length of the frame the per-frame tuning constants were written against.
pub const REFERENCE_FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Manages frame timing and delta time calculation.
#[derive(Debug, Clone)]
pub struct Time {
    /// Duration of the last frame in seconds, exactly as the host passed it.
    delta_seconds: f32,
    /// Total elapsed time since start.
    elapsed: Duration,
    /// Frame count since start.
    frame_count: u64,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a clock at zero.
    pub fn new() -> Self {
        Self {
            delta_seconds: 0.0,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Start a new frame that lasted `dt` seconds. Negative or NaN steps count as zero.
    pub fn advance(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.delta_seconds = dt;
        self.elapsed += Duration::try_from_secs_f32(dt).unwrap_or(Duration::ZERO);
        self.frame_count += 1;
    }

    /// Get the delta time in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    /// Get total elapsed time in seconds.
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get total elapsed time as Duration.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed_and_frames() {
        let mut time = Time::new();
        for _ in 0..60 {
            time.advance(REFERENCE_FRAME_SECONDS);
        }
        assert_eq!(time.frame_count(), 60);
        assert!((time.elapsed_seconds() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn bad_steps_do_not_move_the_clock() {
        let mut time = Time::new();
        time.advance(-1.0);
        time.advance(f32::NAN);
        assert_eq!(time.elapsed(), Duration::ZERO);
        assert_eq!(time.frame_count(), 2);
        assert_eq!(time.delta_seconds(), 0.0);
    }
}
