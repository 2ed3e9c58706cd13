pub mod config;
pub mod constants;
pub mod engine;
pub mod entities;
pub mod error;
pub mod terrain;
pub mod theme;
pub mod time;

pub use config::{RenderConfig, SceneSettings, TerrainLayerSettings, Viewport};
pub use engine::{AnimationEngine, SceneFrame};
pub use entities::{EntityKind, PercentBounds, PopulationCounts, RenderDescriptor, WindStrength};
pub use error::{SceneError, SceneResult};
pub use terrain::{generate, ClosedPath, MountainLayer, ParallaxLayer, TerrainDescriptor, TerrainStyle};
pub use theme::{FixedTheme, SharedTheme, Theme, ThemeCallback, ThemeSource, ThemeSubscription};
pub use time::{
    LunarPhaseCalculator, ManualClock, MoonPhase, SceneClock, SceneMode, SystemClock,
    TimeOfDayClassifier, TimeSpeed, WallClock,
};
