use glam::Vec2;
use serde::Serialize;

use crate::entities::{EntityKind, WindEffects};
use crate::theme::Theme;
use crate::time::{MoonPhase, SceneMode};

/// Drawable produced for one entity on one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescriptor {
    /// Unique within `kind`
    pub id: u32,
    pub kind: EntityKind,
    /// Viewport percent, always inside `kind.bounds()`
    pub position: Vec2,
    pub size: f32,
    /// Degrees, clockwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    pub color_token: &'static str,
    pub opacity: f32,
    /// Secondary oscillation (wing flap, glow pulse) in `[-1, 1]`
    pub phase: f32,
}

impl RenderDescriptor {
    pub fn new(kind: EntityKind, id: u32, position: Vec2, size: f32, color_token: &'static str) -> Self {
        Self {
            id,
            kind,
            position: kind.bounds().clamp(position),
            size,
            rotation: None,
            color_token,
            opacity: 1.0,
            phase: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase.clamp(-1.0, 1.0);
        self
    }
}

/// Per-frame inputs shared by every entity update
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Scene time in nominal frames
    pub time: f64,
    /// Nominal frames covered by this tick
    pub delta: f32,
    pub mode: SceneMode,
    pub theme: Theme,
    pub moon_phase: Option<MoonPhase>,
    pub wind: WindEffects,
}

impl FrameContext {
    pub fn new(time: f64, delta: f32, mode: SceneMode, theme: Theme) -> Self {
        Self {
            time,
            delta,
            mode,
            theme,
            moon_phase: None,
            wind: WindEffects::default(),
        }
    }

    pub fn with_moon(mut self, phase: Option<MoonPhase>) -> Self {
        self.moon_phase = phase;
        self
    }

    pub fn with_wind(mut self, wind: WindEffects) -> Self {
        self.wind = wind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_into_kind_bounds() {
        let d = RenderDescriptor::new(EntityKind::Bee, 0, Vec2::new(200.0, 0.0), 1.0, "bee-light");
        assert_eq!(d.position, Vec2::new(95.0, 45.0));
        assert_eq!(d.with_opacity(3.0).opacity, 1.0);
    }

    #[test]
    fn test_serializes_without_empty_rotation() {
        let d = RenderDescriptor::new(EntityKind::Star, 3, Vec2::new(10.0, 10.0), 0.5, "star-dark");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "star");
        assert!(json.get("rotation").is_none());
        assert_eq!(json["position"][0], 10.0);
    }
}
