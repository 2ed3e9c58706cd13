use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::constants::{clock::MODE_POLL_INTERVAL_SECS, hours};
use crate::time::WallClock;

/// Coarse time of day classification driving which population is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneMode {
    Morning, // 05:00 - 12:00
    Day,     // 12:00 - 17:00
    Evening, // 17:00 - 21:00
    Night,   // 21:00 - 05:00
}

impl SceneMode {
    pub const ALL: [SceneMode; 4] = [
        SceneMode::Morning,
        SceneMode::Day,
        SceneMode::Evening,
        SceneMode::Night,
    ];

    /// Classify a wall clock hour
    pub fn classify(hour: u32) -> Self {
        match hour {
            h if (hours::MORNING_START..hours::DAY_START).contains(&h) => SceneMode::Morning,
            h if (hours::DAY_START..hours::EVENING_START).contains(&h) => SceneMode::Day,
            h if (hours::EVENING_START..hours::NIGHT_START).contains(&h) => SceneMode::Evening,
            _ => SceneMode::Night,
        }
    }

    pub fn is_night(&self) -> bool {
        *self == SceneMode::Night
    }

    pub fn name(&self) -> &'static str {
        match self {
            SceneMode::Morning => "morning",
            SceneMode::Day => "day",
            SceneMode::Evening => "evening",
            SceneMode::Night => "night",
        }
    }
}

impl Default for SceneMode {
    fn default() -> Self {
        SceneMode::Day
    }
}

/// Result of a classifier update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeUpdate {
    pub mode: SceneMode,
    /// The wall clock was read during this update
    pub polled: bool,
    /// The mode differs from the previous update
    pub changed: bool,
}

/// Polls the wall clock on a fixed cadence and keeps the current scene mode.
///
/// Category changes are rare, so the clock is read at most once per poll
/// interval of scene time rather than every tick. A failed read keeps the
/// last known mode.
pub struct TimeOfDayClassifier {
    poll_interval: f32,
    last_poll: Option<f64>,
    current: SceneMode,
    overridden: bool,
}

impl TimeOfDayClassifier {
    pub fn new(poll_interval: f32) -> Self {
        Self {
            poll_interval,
            last_poll: None,
            current: SceneMode::default(),
            overridden: false,
        }
    }

    /// Update the classification at `elapsed` seconds of scene time
    pub fn update(
        &mut self,
        elapsed: f64,
        clock: &dyn WallClock,
        debug_override: Option<SceneMode>,
    ) -> ModeUpdate {
        let previous = self.current;

        if let Some(mode) = debug_override {
            self.current = mode;
            self.overridden = true;
            return ModeUpdate {
                mode,
                polled: false,
                changed: mode != previous,
            };
        }

        // Clearing an override re-reads the clock right away
        if self.overridden {
            self.overridden = false;
            self.last_poll = None;
        }

        let due = match self.last_poll {
            None => true,
            Some(last) => elapsed - last >= self.poll_interval as f64,
        };
        if !due {
            return ModeUpdate {
                mode: self.current,
                polled: false,
                changed: false,
            };
        }

        self.last_poll = Some(elapsed);
        match clock.now() {
            Ok(now) => self.current = SceneMode::classify(now.hour()),
            Err(e) => {
                log::warn!("Keeping {} mode: {}", self.current.name(), e);
            }
        }

        ModeUpdate {
            mode: self.current,
            polled: true,
            changed: self.current != previous,
        }
    }

    /// Force a re-read of the wall clock on the next update
    pub fn invalidate(&mut self) {
        self.last_poll = None;
    }

    pub fn current(&self) -> SceneMode {
        self.current
    }
}

impl Default for TimeOfDayClassifier {
    fn default() -> Self {
        Self::new(MODE_POLL_INTERVAL_SECS)
    }
}
