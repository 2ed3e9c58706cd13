//! Frame orchestration
//!
//! The host calls [`AnimationEngine::tick`] once per animation frame with the
//! real time since the previous call and the current [`RenderConfig`]. Each
//! tick returns a complete [`SceneFrame`]; the engine keeps no reference to
//! earlier frames.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::{RenderConfig, SceneSettings};
use crate::entities::{
    active_kinds, EntityKind, FrameContext, Populations, RenderDescriptor, ShootingStarSpawner,
    WindEffects,
};
use crate::error::SceneResult;
use crate::terrain::{MountainLayer, ParallaxLayer, TerrainDescriptor};
use crate::theme::{FixedTheme, Theme, ThemeSource, ThemeSubscription};
use crate::time::{
    LunarPhaseCalculator, MoonPhase, SceneClock, SceneMode, SystemClock, TimeOfDayClassifier,
    TimeSpeed, WallClock,
};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct SceneFrame {
    pub tick: u64,
    /// Scene time in seconds
    pub elapsed: f64,
    pub mode: SceneMode,
    /// Present only at night
    pub moon_phase: Option<MoonPhase>,
    pub theme: Theme,
    /// Far to near
    pub terrain: Vec<TerrainDescriptor>,
    /// Back to front
    pub entities: Vec<RenderDescriptor>,
}

impl SceneFrame {
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|d| d.kind == kind).count()
    }

    pub fn contains(&self, kind: EntityKind) -> bool {
        self.entities.iter().any(|d| d.kind == kind)
    }
}

pub struct AnimationEngine {
    clock: SceneClock,
    classifier: TimeOfDayClassifier,
    lunar: LunarPhaseCalculator,
    wall_clock: Box<dyn WallClock + Send>,
    dark: Arc<AtomicBool>,
    _theme_subscription: ThemeSubscription,
    layers: Vec<ParallaxLayer>,
    populations: Populations,
    spawner: ShootingStarSpawner,
    wind: WindEffects,
    moon_phase: Option<MoonPhase>,
}

impl AnimationEngine {
    /// Engine reading the system clock with a fixed light theme
    pub fn new(settings: SceneSettings) -> SceneResult<Self> {
        Self::with_sources(settings, SystemClock, &FixedTheme::default())
    }

    /// Engine reading the given wall clock and following the given theme
    pub fn with_sources(
        settings: SceneSettings,
        wall_clock: impl WallClock + Send + 'static,
        theme: &dyn ThemeSource,
    ) -> SceneResult<Self> {
        settings.validate()?;

        let dark = Arc::new(AtomicBool::new(theme.current().is_dark()));
        let flag = Arc::clone(&dark);
        let theme_subscription = theme.on_change(Box::new(move |theme| {
            flag.store(theme.is_dark(), Ordering::Relaxed);
        }));

        let viewport = settings.viewport;
        let layers = settings
            .terrain
            .iter()
            .enumerate()
            .map(|(i, layer)| {
                let mountain = MountainLayer::new(
                    viewport.width,
                    viewport.height * layer.height_fraction,
                    layer.seed,
                    i as u32,
                )
                .with_complexity(layer.complexity)
                .with_style(layer.style);
                ParallaxLayer::new(mountain, layer.scroll_speed, &layer.color, layer.opacity)
            })
            .collect::<Vec<_>>();

        log::info!(
            "Scene engine ready: {} terrain layers, {:?} wind, {}",
            layers.len(),
            settings.wind,
            match settings.rng_seed {
                Some(seed) => format!("rng seed {}", seed),
                None => "entropy-seeded rng".to_string(),
            }
        );

        Ok(Self {
            clock: SceneClock::new(),
            classifier: TimeOfDayClassifier::new(settings.mode_poll_interval),
            lunar: LunarPhaseCalculator::default(),
            wall_clock: Box::new(wall_clock),
            dark,
            _theme_subscription: theme_subscription,
            layers,
            populations: Populations::new(settings.populations),
            spawner: ShootingStarSpawner::new(settings.shooting_stars, settings.rng_seed),
            wind: WindEffects::from_strength(settings.wind),
            moon_phase: None,
        })
    }

    /// Advance by `dt` of real time and describe the resulting frame
    pub fn tick(&mut self, dt: Duration, config: &RenderConfig) -> SceneFrame {
        self.clock.advance(dt);
        let now = self.clock.elapsed();

        let update = self
            .classifier
            .update(now, &*self.wall_clock, config.debug_override);
        if update.changed {
            log::info!("Scene mode is now {}", update.mode.name());
        }
        let mode = update.mode;

        let moon_phase = if mode.is_night() {
            if update.polled || update.changed || self.moon_phase.is_none() {
                self.refresh_moon_phase();
            }
            self.moon_phase
        } else {
            None
        };

        self.spawner.update(now, mode);

        let theme = self.theme();
        let ctx = FrameContext::new(self.clock.time_units(), self.clock.delta_units(), mode, theme)
            .with_moon(moon_phase)
            .with_wind(self.wind);
        self.populations.update(&ctx, |kind| config.is_enabled(kind));

        let terrain = self
            .layers
            .iter()
            .map(|layer| layer.descriptor(config.scroll_offset, theme))
            .collect();

        let mut entities = Vec::new();
        for &kind in active_kinds(mode) {
            if !config.is_enabled(kind) {
                continue;
            }
            match kind {
                EntityKind::ShootingStar => self.spawner.emit(now, &ctx, &mut entities),
                _ => self.populations.emit(kind, &ctx, &mut entities),
            }
        }

        SceneFrame {
            tick: self.clock.ticks(),
            elapsed: now,
            mode,
            moon_phase,
            theme,
            terrain,
            entities,
        }
    }

    /// Advance by one nominal frame
    pub fn tick_frame(&mut self, config: &RenderConfig) -> SceneFrame {
        self.tick(
            Duration::from_secs_f32(crate::constants::clock::NOMINAL_FRAME_SECS),
            config,
        )
    }

    fn refresh_moon_phase(&mut self) {
        match self.wall_clock.now() {
            Ok(now) => {
                let phase = self.lunar.phase(&now);
                if self.moon_phase != Some(phase) {
                    log::debug!("Moon phase {:?}", phase);
                }
                self.moon_phase = Some(phase);
            }
            Err(e) => log::warn!("Moon phase not refreshed: {}", e),
        }
    }

    /// Swap the wall clock; the next tick re-reads it
    pub fn set_wall_clock(&mut self, wall_clock: impl WallClock + Send + 'static) {
        self.wall_clock = Box::new(wall_clock);
        self.classifier.invalidate();
        self.moon_phase = None;
    }

    pub fn set_time_speed(&mut self, speed: TimeSpeed) {
        self.clock.set_speed(speed);
    }

    /// Force a shooting star at the current scene time
    pub fn spawn_shooting_star(&mut self) {
        self.spawner.spawn_at(self.clock.elapsed());
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.dark.load(Ordering::Relaxed))
    }

    pub fn mode(&self) -> SceneMode {
        self.classifier.current()
    }

    pub fn clock(&self) -> &SceneClock {
        &self.clock
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn populations(&self) -> &Populations {
        &self.populations
    }

    pub fn spawner(&self) -> &ShootingStarSpawner {
        &self.spawner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SharedTheme;
    use crate::time::ManualClock;

    fn engine_at(hour: u32) -> (AnimationEngine, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::at_hour(hour));
        let settings = SceneSettings {
            rng_seed: Some(1),
            ..Default::default()
        };
        let engine =
            AnimationEngine::with_sources(settings, Arc::clone(&clock), &FixedTheme(Theme::Light))
                .unwrap();
        (engine, clock)
    }

    #[test]
    fn test_first_tick_classifies_from_wall_clock() {
        let (mut engine, _clock) = engine_at(6);
        let frame = engine.tick_frame(&RenderConfig::default());
        assert_eq!(frame.mode, SceneMode::Morning);
        assert_eq!(frame.tick, 1);
        assert!(frame.moon_phase.is_none());
        assert_eq!(frame.terrain.len(), 3);
        assert!(frame.contains(EntityKind::Sun));
        assert!(frame.contains(EntityKind::DewDrop));
    }

    #[test]
    fn test_override_wins_until_cleared() {
        let (mut engine, _clock) = engine_at(13);
        let night = RenderConfig::default().with_override(SceneMode::Night);
        let frame = engine.tick_frame(&night);
        assert_eq!(frame.mode, SceneMode::Night);
        assert!(frame.moon_phase.is_some());
        assert!(!frame.contains(EntityKind::Sun));

        let frame = engine.tick_frame(&RenderConfig::default());
        assert_eq!(frame.mode, SceneMode::Day);
    }

    #[test]
    fn test_mode_follows_clock_only_after_poll_interval() {
        let (mut engine, clock) = engine_at(10);
        let config = RenderConfig::default();
        assert_eq!(engine.tick(Duration::from_secs(1), &config).mode, SceneMode::Morning);

        clock.set_hour(22);
        assert_eq!(engine.tick(Duration::from_secs(30), &config).mode, SceneMode::Morning);
        assert_eq!(engine.tick(Duration::from_secs(30), &config).mode, SceneMode::Night);
    }

    #[test]
    fn test_theme_changes_reach_next_frame() {
        let theme = SharedTheme::new(Theme::Light);
        let engine = AnimationEngine::with_sources(
            SceneSettings::default(),
            ManualClock::at_hour(13),
            &theme,
        );
        let mut engine = engine.unwrap();
        assert_eq!(theme.listener_count(), 1);

        let config = RenderConfig::default();
        let light = engine.tick_frame(&config);
        theme.set(Theme::Dark);
        let dark = engine.tick_frame(&config);

        assert_eq!(light.theme, Theme::Light);
        assert_eq!(dark.theme, Theme::Dark);
        assert!(dark.entities.iter().all(|d| d.color_token.ends_with("-dark")));
        assert!(dark.terrain.iter().all(|t| t.color_token.ends_with("-dark")));
    }

    #[test]
    fn test_dropped_engines_release_theme_listeners() {
        let theme = SharedTheme::new(Theme::Light);
        for _ in 0..100 {
            let engine =
                AnimationEngine::with_sources(SceneSettings::default(), SystemClock, &theme);
            assert_eq!(theme.listener_count(), 1);
            drop(engine);
        }
        assert_eq!(theme.listener_count(), 0);

        let kept = AnimationEngine::with_sources(SceneSettings::default(), SystemClock, &theme);
        assert!(kept.is_ok());
        assert_eq!(theme.listener_count(), 1);
        theme.set(Theme::Dark);
        assert_eq!(kept.unwrap().theme(), Theme::Dark);
    }

    #[test]
    fn test_paused_clock_freezes_motion() {
        let (mut engine, _clock) = engine_at(13);
        let config = RenderConfig::default();
        let before = engine.tick_frame(&config);
        engine.set_time_speed(TimeSpeed::Paused);
        let after = engine.tick_frame(&config);
        assert_eq!(before.elapsed, after.elapsed);
        assert_eq!(before.entities, after.entities);
        assert_eq!(after.tick, 2);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut settings = SceneSettings::default();
        settings.mode_poll_interval = 0.0;
        assert!(AnimationEngine::with_sources(settings, SystemClock, &FixedTheme::default()).is_err());
    }
}
