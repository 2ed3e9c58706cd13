// Ambient Scene Constants
//
// Tuning values shared by the clock, the classifier, terrain and the entity
// populations. Config defaults read from here so there is one place to change them.

/// Scene clock constants
pub mod clock {
    /// Frame rate the motion constants were tuned against
    pub const NOMINAL_FRAME_RATE: f32 = 60.0;
    pub const NOMINAL_FRAME_SECS: f32 = 1.0 / NOMINAL_FRAME_RATE;

    /// How often the wall clock is re-read for mode classification (seconds)
    pub const MODE_POLL_INTERVAL_SECS: f32 = 60.0;
}

/// Time of day hour boundaries (inclusive start, exclusive end)
pub mod hours {
    pub const MORNING_START: u32 = 5;
    pub const DAY_START: u32 = 12;
    pub const EVENING_START: u32 = 17;
    pub const NIGHT_START: u32 = 21;
}

/// Lunar cycle constants
pub mod lunar {
    /// Mean synodic month in days
    pub const CYCLE_DAYS: f64 = 29.53;

    /// Reference new moon: 2000-01-06 18:14 UTC
    pub const EPOCH_YEAR: i32 = 2000;
    pub const EPOCH_MONTH: u32 = 1;
    pub const EPOCH_DAY: u32 = 6;
    pub const EPOCH_HOUR: u32 = 18;
    pub const EPOCH_MINUTE: u32 = 14;
}

/// Terrain silhouette constants
pub mod terrain {
    pub const BASE_PEAKS: f32 = 8.0;
    pub const PEAK_SPREAD: f32 = 4.0;
    pub const MIN_PEAKS: usize = 6;
    pub const MAX_PEAKS: usize = 12;

    /// Horizontal overscan past each viewport edge
    pub const OVERSCAN: f32 = 50.0;

    /// Peak heights as a fraction of the layer height
    pub const MIN_HEIGHT_FRACTION: f32 = 0.3;
    pub const HEIGHT_RANGE_FRACTION: f32 = 0.5;

    /// Maximum sub-peak x jitter as a fraction of peak spacing
    pub const JITTER_FRACTION: f32 = 0.15;

    /// Bézier control point placement along each segment
    pub const CONTROL_NEAR: f32 = 0.4;
    pub const CONTROL_FAR: f32 = 0.6;

    pub const DEFAULT_COMPLEXITY: f32 = 0.5;
}

/// Entity motion constants
pub mod motion {
    /// Per-index phase decorrelation
    pub const GOLDEN_RATIO: f32 = 1.618_034;

    pub const BUTTERFLY_PATH_LEN: usize = 20;
    pub const BUTTERFLY_PATH_SPEED: f32 = 0.01;
    pub const BUTTERFLY_WING_RATE: f32 = 0.3;

    pub const DRAGONFLY_ARRIVE_EPSILON: f32 = 2.0;
    pub const DRAGONFLY_SEEK_FRACTION: f32 = 0.02;
    pub const DRAGONFLY_WOBBLE: f32 = 0.15;
    pub const DRAGONFLY_WING_RATE: f32 = 0.8;
}

/// Shooting star defaults
pub mod shooting_star {
    pub const CHECK_INTERVAL_SECS: f32 = 2.0;
    pub const SPAWN_PROBABILITY: f64 = 0.08;
    pub const LIFESPAN_SECS: f32 = 3.0;
}
