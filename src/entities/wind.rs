use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::entities::hash::{hash01, hash_range, phase_offset};
use crate::entities::motion::{cowave, wave, wrap};
use crate::entities::{palette, EntityKind, FrameContext, RenderDescriptor};

/// Wind strength categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindStrength {
    Calm,
    #[default]
    Light,
    Moderate,
    Strong,
}

impl WindStrength {
    /// Base drift speed in viewport percent per nominal frame
    pub fn drift_speed(&self) -> f32 {
        match self {
            WindStrength::Calm => 0.005,
            WindStrength::Light => 0.02,
            WindStrength::Moderate => 0.04,
            WindStrength::Strong => 0.07,
        }
    }
}

/// How the current wind shows up on the different entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindEffects {
    /// Horizontal drift of wind particles and falling leaves (percent per frame)
    pub particle_drift: f32,
    /// Flower stalk sway amplitude (0-1)
    pub vegetation_sway: f32,
    /// Cloud speed multiplier
    pub cloud_speed: f32,
}

impl WindEffects {
    pub fn from_strength(strength: WindStrength) -> Self {
        let speed = strength.drift_speed();
        Self {
            particle_drift: speed,
            vegetation_sway: (speed * 15.0).min(1.0),
            cloud_speed: 0.5 + speed * 25.0,
        }
    }

    /// Gust displacement at time `t`. This is the integral of a velocity
    /// pulse, so adding it to a linear drift keeps motion continuous.
    pub fn gust_offset(&self, t: f64) -> f32 {
        self.particle_drift * 120.0 * wave(t, 0.004, 0.0)
    }
}

impl Default for WindEffects {
    fn default() -> Self {
        Self::from_strength(WindStrength::default())
    }
}

/// Streak of air drifting across the scene
#[derive(Debug, Clone)]
pub struct WindParticle {
    index: u32,
    base: Vec2,
    speed: f32,
    size: f32,
}

impl WindParticle {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::WindParticle;
        let i = index as f32;
        let base = kind.bounds().inset(5.0).lerp(hash01(i, kind.salt()), hash01(i, kind.salt() + 1.0));
        Self {
            index,
            base,
            speed: hash_range(i, kind.salt() + 2.0, 0.7, 1.4),
            size: hash_range(i, kind.salt() + 3.0, 2.0, 5.0),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let offset = phase_offset(self.index);
        let wind = ctx.wind;

        let drifted = wrap(self.base.x, t, wind.particle_drift * self.speed, 100.0);
        let gust = wind.gust_offset(t + offset as f64 * 40.0);
        let x = (drifted + gust).rem_euclid(100.0);
        // Turbulence, as two detuned waves
        let y = self.base.y + 2.0 * wave(t, 0.03, offset) + 0.8 * cowave(t, 0.047, x * 0.1);

        let heading = (0.06 * cowave(t, 0.03, offset)).atan2(1.0).to_degrees();
        let opacity = 0.25 + 0.25 * wave(t, 0.02, offset * 2.0);

        RenderDescriptor::new(
            EntityKind::WindParticle,
            self.index,
            Vec2::new(x, y),
            self.size,
            palette::token(EntityKind::WindParticle, ctx.theme),
        )
        .with_rotation(heading)
        .with_opacity(opacity)
    }
}
