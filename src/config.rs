//! Per-tick render config and the session settings file

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::clock::MODE_POLL_INTERVAL_SECS;
use crate::entities::{EntityKind, PopulationCounts, ShootingStarSettings, WindStrength};
use crate::error::{SceneError, SceneResult};
use crate::terrain::TerrainStyle;
use crate::time::SceneMode;

/// Snapshot the host passes to every tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Accumulated scroll distance driving terrain parallax
    pub scroll_offset: f32,
    /// Forces a scene mode regardless of the wall clock
    pub debug_override: Option<SceneMode>,
    /// Per-kind switches; kinds not listed are enabled
    pub entity_toggles: HashMap<EntityKind, bool>,
}

impl RenderConfig {
    pub fn is_enabled(&self, kind: EntityKind) -> bool {
        self.entity_toggles.get(&kind).copied().unwrap_or(true)
    }

    pub fn with_override(mut self, mode: SceneMode) -> Self {
        self.debug_override = Some(mode);
        self
    }

    pub fn with_scroll(mut self, offset: f32) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn set_enabled(&mut self, kind: EntityKind, enabled: bool) {
        self.entity_toggles.insert(kind, enabled);
    }

    pub fn from_json_str(json: &str) -> SceneResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Drawing surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 300.0,
        }
    }
}

/// One mountain layer in the parallax stack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainLayerSettings {
    pub seed: f32,
    pub scroll_speed: f32,
    pub style: TerrainStyle,
    #[serde(default = "default_complexity")]
    pub complexity: f32,
    /// Color token prefix; the theme suffix is appended
    pub color: String,
    pub opacity: f32,
    /// Tallest possible layer height as a fraction of the viewport height
    pub height_fraction: f32,
}

fn default_complexity() -> f32 {
    crate::constants::terrain::DEFAULT_COMPLEXITY
}

impl TerrainLayerSettings {
    fn layer(
        seed: f32,
        scroll_speed: f32,
        style: TerrainStyle,
        color: &str,
        opacity: f32,
        height_fraction: f32,
    ) -> Self {
        Self {
            seed,
            scroll_speed,
            style,
            complexity: default_complexity(),
            color: color.to_string(),
            opacity,
            height_fraction,
        }
    }

    /// Far, middle and near ranges
    pub fn default_stack() -> Vec<Self> {
        vec![
            Self::layer(11.0, 0.1, TerrainStyle::Smooth, "mountain-far", 0.5, 0.6),
            Self::layer(23.0, 0.25, TerrainStyle::Smooth, "mountain-mid", 0.7, 0.45),
            Self::layer(42.0, 0.5, TerrainStyle::Sharp, "mountain-near", 0.9, 0.35),
        ]
    }
}

/// Session settings, loaded once when the engine is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Seconds of scene time between wall clock reads
    pub mode_poll_interval: f32,
    /// Fixed seed for the shooting star RNG; entropy when absent
    pub rng_seed: Option<u64>,
    pub wind: WindStrength,
    pub viewport: Viewport,
    pub populations: PopulationCounts,
    pub terrain: Vec<TerrainLayerSettings>,
    pub shooting_stars: ShootingStarSettings,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            mode_poll_interval: MODE_POLL_INTERVAL_SECS,
            rng_seed: None,
            wind: WindStrength::default(),
            viewport: Viewport::default(),
            populations: PopulationCounts::default(),
            terrain: TerrainLayerSettings::default_stack(),
            shooting_stars: ShootingStarSettings::default(),
        }
    }
}

impl SceneSettings {
    /// Read and validate a TOML settings file
    pub fn load(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&text)?;
        log::info!(
            "Loaded scene settings from {} ({} terrain layers)",
            path.display(),
            settings.terrain.len()
        );
        Ok(settings)
    }

    pub fn from_toml_str(text: &str) -> SceneResult<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> SceneResult<()> {
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("mode_poll_interval", self.mode_poll_interval)?;
        positive("shooting_stars.check_interval", self.shooting_stars.check_interval)?;
        positive("shooting_stars.lifespan", self.shooting_stars.lifespan)?;

        let p = self.shooting_stars.spawn_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(SceneError::invalid(
                "shooting_stars.spawn_probability",
                format!("{} is outside [0, 1]", p),
            ));
        }

        for (i, layer) in self.terrain.iter().enumerate() {
            let field = |name: &str| format!("terrain[{}].{}", i, name);
            if !layer.seed.is_finite() {
                return Err(SceneError::invalid(&field("seed"), "must be finite"));
            }
            if !layer.scroll_speed.is_finite() || layer.scroll_speed < 0.0 {
                return Err(SceneError::invalid(
                    &field("scroll_speed"),
                    "must be finite and non-negative",
                ));
            }
            unit(&field("complexity"), layer.complexity)?;
            unit(&field("opacity"), layer.opacity)?;
            positive(&field("height_fraction"), layer.height_fraction)?;
            if layer.height_fraction > 1.0 {
                return Err(SceneError::invalid(&field("height_fraction"), "must not exceed 1"));
            }
            if layer.color.is_empty() {
                return Err(SceneError::invalid(&field("color"), "must not be empty"));
            }
        }

        Ok(())
    }
}

fn positive(field: &str, value: f32) -> SceneResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("{} must be positive", value)))
    }
}

fn unit(field: &str, value: f32) -> SceneResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SceneError::invalid(field, format!("{} is outside [0, 1]", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_toggles_are_enabled() {
        let mut config = RenderConfig::default();
        assert!(config.is_enabled(EntityKind::Bee));
        config.set_enabled(EntityKind::Bee, false);
        assert!(!config.is_enabled(EntityKind::Bee));
        assert!(config.is_enabled(EntityKind::Bird));
    }

    #[test]
    fn test_render_config_from_json() {
        let config = RenderConfig::from_json_str(
            r#"{ "debug_override": "night", "entity_toggles": { "firefly": false } }"#,
        )
        .unwrap();
        assert_eq!(config.debug_override, Some(SceneMode::Night));
        assert!(!config.is_enabled(EntityKind::Firefly));
        assert_eq!(config.scroll_offset, 0.0);
    }

    #[test]
    fn test_defaults_validate() {
        let settings = SceneSettings::default();
        settings.validate().unwrap();
        assert_eq!(settings.terrain.len(), 3);
        assert_eq!(settings.terrain[2].style, TerrainStyle::Sharp);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings = SceneSettings::from_toml_str(
            r#"
            rng_seed = 9
            wind = "strong"

            [populations]
            bees = 2
            "#,
        )
        .unwrap();
        assert_eq!(settings.rng_seed, Some(9));
        assert_eq!(settings.wind, WindStrength::Strong);
        assert_eq!(settings.populations.bees, 2);
        assert_eq!(settings.populations.birds, PopulationCounts::default().birds);
        assert_eq!(settings.viewport, Viewport::default());
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = SceneSettings::from_toml_str(
            r#"
            [shooting_stars]
            spawn_probability = 1.5
            "#,
        )
        .unwrap_err();
        match err {
            SceneError::InvalidSettings { field, .. } => {
                assert_eq!(field, "shooting_stars.spawn_probability")
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_rejects_zero_viewport() {
        let mut settings = SceneSettings::default();
        settings.viewport.width = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SceneError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn test_parse_error_is_typed() {
        assert!(matches!(
            SceneSettings::from_toml_str("viewport = 3"),
            Err(SceneError::Parse(_))
        ));
    }
}
