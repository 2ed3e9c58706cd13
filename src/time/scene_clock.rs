use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::clock::{NOMINAL_FRAME_RATE, NOMINAL_FRAME_SECS};

/// Playback speed presets for the scene clock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TimeSpeed {
    Paused,
    Normal,
    Slow, // half speed
    Fast, // double speed
    Custom(f32),
}

impl TimeSpeed {
    /// Get the multiplier value
    pub fn multiplier(&self) -> f32 {
        match self {
            TimeSpeed::Paused => 0.0,
            TimeSpeed::Normal => 1.0,
            TimeSpeed::Slow => 0.5,
            TimeSpeed::Fast => 2.0,
            TimeSpeed::Custom(m) => m.max(0.0),
        }
    }
}

impl Default for TimeSpeed {
    fn default() -> Self {
        TimeSpeed::Normal
    }
}

/// Monotonic animation clock: a frame counter plus accumulated scene time.
///
/// Motion formulas read [`SceneClock::time_units`], which is elapsed scene time
/// expressed in nominal 60 Hz frames. This keeps per-frame tuning constants
/// meaningful while making speed independent of how often the host ticks.
///
/// Elapsed time is kept in `f64` seconds so a 1/60 s step still registers
/// after weeks of continuous running.
#[derive(Debug, Clone, Default)]
pub struct SceneClock {
    ticks: u64,
    elapsed: f64,
    last_delta: f32,
    speed: TimeSpeed,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a real elapsed duration
    pub fn advance(&mut self, dt: Duration) {
        let delta = dt.as_secs_f64() * self.speed.multiplier() as f64;
        self.ticks += 1;
        self.elapsed += delta;
        self.last_delta = delta as f32;
    }

    /// Advance by exactly one nominal frame
    pub fn advance_frame(&mut self) {
        self.advance(Duration::from_secs_f32(NOMINAL_FRAME_SECS));
    }

    /// Number of advances so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Scene time in seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Scene time in nominal frames
    pub fn time_units(&self) -> f64 {
        self.elapsed * NOMINAL_FRAME_RATE as f64
    }

    /// Scene time covered by the last advance, in nominal frames
    pub fn delta_units(&self) -> f32 {
        self.last_delta * NOMINAL_FRAME_RATE
    }

    /// Scene time covered by the last advance, in seconds
    pub fn delta(&self) -> f32 {
        self.last_delta
    }

    pub fn set_speed(&mut self, speed: TimeSpeed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> TimeSpeed {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advance() {
        let mut clock = SceneClock::new();
        for _ in 0..60 {
            clock.advance_frame();
        }
        assert_eq!(clock.ticks(), 60);
        assert!((clock.elapsed() - 1.0).abs() < 1e-4);
        assert!((clock.time_units() - 60.0).abs() < 1e-2);
    }

    #[test]
    fn test_time_units_follow_elapsed_time_not_tick_count() {
        // 30 Hz and 120 Hz hosts cover the same scene time in one second
        let mut slow = SceneClock::new();
        let mut fast = SceneClock::new();
        for _ in 0..30 {
            slow.advance(Duration::from_secs_f32(1.0 / 30.0));
        }
        for _ in 0..120 {
            fast.advance(Duration::from_secs_f32(1.0 / 120.0));
        }
        assert_ne!(slow.ticks(), fast.ticks());
        assert!((slow.time_units() - fast.time_units()).abs() < 0.05);
    }

    #[test]
    fn test_speed_multiplier() {
        let mut clock = SceneClock::new();
        clock.set_speed(TimeSpeed::Paused);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.ticks(), 1);
        assert_eq!(clock.elapsed(), 0.0);

        clock.set_speed(TimeSpeed::Fast);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.elapsed(), 2.0);
        assert_eq!(clock.delta_units(), 120.0);

        assert_eq!(TimeSpeed::Custom(-3.0).multiplier(), 0.0);
    }

    #[test]
    fn test_frames_still_count_after_a_week() {
        let mut clock = SceneClock::new();
        clock.advance(Duration::from_secs(8 * 86_400));
        let before = clock.elapsed();
        for _ in 0..600 {
            clock.advance_frame();
        }
        let advanced = clock.elapsed() - before;
        assert!((advanced - 10.0).abs() < 1e-3, "advanced {}", advanced);
        assert!(clock.time_units() > before * 60.0);
    }
}
