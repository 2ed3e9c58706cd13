use glam::Vec2;

use crate::entities::hash::{hash01, hash_range, phase_offset};
use crate::entities::motion::{wave, wrap};
use crate::entities::{palette, EntityKind, FrameContext, RenderDescriptor};
use crate::time::SceneMode;

/// Cloud drifting slowly across the sky
#[derive(Debug, Clone)]
pub struct Cloud {
    index: u32,
    start_x: f32,
    altitude: f32,
    speed: f32,
    size: f32,
}

impl Cloud {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Cloud;
        let i = index as f32;
        Self {
            index,
            start_x: hash_range(i, kind.salt(), 0.0, 100.0),
            altitude: kind.bounds().inset(4.0).lerp(0.0, hash01(i, kind.salt() + 1.0)).y,
            speed: hash_range(i, kind.salt() + 2.0, 0.001, 0.003),
            size: hash_range(i, kind.salt() + 3.0, 10.0, 18.0),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);

        let x = wrap(self.start_x, t, self.speed * ctx.wind.cloud_speed, 100.0);
        let y = self.altitude + 1.5 * wave(t, 0.0008, o);
        let opacity = match ctx.mode {
            SceneMode::Night => 0.35,
            SceneMode::Evening => 0.7,
            _ => 0.85,
        };

        RenderDescriptor::new(
            EntityKind::Cloud,
            self.index,
            Vec2::new(x, y),
            self.size,
            palette::token(EntityKind::Cloud, ctx.theme),
        )
        .with_opacity(opacity)
    }
}

/// Fixed star with a twinkle
#[derive(Debug, Clone)]
pub struct Star {
    index: u32,
    spot: Vec2,
    twinkle_rate: f32,
    size: f32,
}

impl Star {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Star;
        let i = index as f32;
        Self {
            index,
            spot: kind
                .bounds()
                .lerp(hash01(i, kind.salt()), hash01(i, kind.salt() + 1.0)),
            twinkle_rate: hash_range(i, kind.salt() + 2.0, 0.01, 0.03),
            size: hash_range(i, kind.salt() + 3.0, 0.2, 0.6),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let twinkle = wave(ctx.time, self.twinkle_rate, phase_offset(self.index));

        RenderDescriptor::new(
            EntityKind::Star,
            self.index,
            self.spot,
            self.size,
            palette::token(EntityKind::Star, ctx.theme),
        )
        .with_opacity(0.3 + 0.7 * (0.5 + 0.5 * twinkle))
        .with_phase(twinkle)
    }
}

/// Sun resting point for each daytime mode
fn sun_anchor(mode: SceneMode) -> Option<(Vec2, f32)> {
    match mode {
        SceneMode::Morning => Some((Vec2::new(20.0, 38.0), 8.0)),
        SceneMode::Day => Some((Vec2::new(50.0, 12.0), 7.0)),
        SceneMode::Evening => Some((Vec2::new(80.0, 40.0), 10.0)),
        SceneMode::Night => None,
    }
}

/// Sun descriptor, or `None` at night
pub fn sun(ctx: &FrameContext) -> Option<RenderDescriptor> {
    let (anchor, size) = sun_anchor(ctx.mode)?;
    let t = ctx.time;
    let position = anchor + Vec2::new(2.0 * wave(t, 0.0005, 0.0), 1.5 * wave(t, 0.001, 0.0));
    let glow = wave(t, 0.01, 0.0);

    Some(
        RenderDescriptor::new(
            EntityKind::Sun,
            0,
            position,
            size,
            palette::sun_token(ctx.mode, ctx.theme),
        )
        .with_opacity(0.85 + 0.15 * glow)
        .with_phase(glow),
    )
}

/// Moon descriptor. Nothing is drawn outside night or during a new moon.
pub fn moon(ctx: &FrameContext) -> Option<RenderDescriptor> {
    if !ctx.mode.is_night() {
        return None;
    }
    let phase = ctx.moon_phase?;
    if !phase.is_visible() {
        return None;
    }

    let t = ctx.time;
    let position = Vec2::new(78.0 + wave(t, 0.0004, 0.0), 18.0 + wave(t, 0.0007, 0.0));

    Some(
        RenderDescriptor::new(EntityKind::Moon, 0, position, 6.0, phase.token())
            .with_opacity(0.5 + 0.5 * phase.illumination()),
    )
}
