pub mod lunar;
pub mod scene_clock;
pub mod scene_mode;
pub mod wall_clock;

pub use lunar::{LunarPhaseCalculator, MoonPhase};
pub use scene_clock::{SceneClock, TimeSpeed};
pub use scene_mode::{ModeUpdate, SceneMode, TimeOfDayClassifier};
pub use wall_clock::{ManualClock, SystemClock, WallClock};
