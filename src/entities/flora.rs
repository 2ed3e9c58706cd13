use glam::Vec2;

use crate::entities::hash::{hash01, hash_range, phase_offset};
use crate::entities::motion::{wave, wrap};
use crate::entities::{palette, EntityKind, FrameContext, RenderDescriptor};

/// Dew drop resting on the grass, glinting now and then
#[derive(Debug, Clone)]
pub struct DewDrop {
    index: u32,
    spot: Vec2,
    size: f32,
}

impl DewDrop {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::DewDrop;
        let i = index as f32;
        Self {
            index,
            spot: kind
                .bounds()
                .inset(2.0)
                .lerp(hash01(i, kind.salt()), hash01(i, kind.salt() + 1.0)),
            size: hash_range(i, kind.salt() + 2.0, 0.4, 0.8),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);
        let glint = wave(t, 0.03, o * 5.0).max(0.0).powi(3);
        let y = self.spot.y + 0.2 * wave(t, 0.01, o);

        RenderDescriptor::new(
            EntityKind::DewDrop,
            self.index,
            Vec2::new(self.spot.x, y),
            self.size,
            palette::token(EntityKind::DewDrop, ctx.theme),
        )
        .with_opacity(0.4 + 0.6 * glint)
        .with_phase(glint)
    }
}

/// Leaf tumbling down, re-entering from the top once it falls out
#[derive(Debug, Clone)]
pub struct Leaf {
    index: u32,
    start: Vec2,
    fall_speed: f32,
    spin: f32,
    size: f32,
}

impl Leaf {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Leaf;
        let i = index as f32;
        Self {
            index,
            start: Vec2::new(
                hash_range(i, kind.salt(), 0.0, 100.0),
                hash_range(i, kind.salt() + 1.0, 0.0, 100.0),
            ),
            fall_speed: hash_range(i, kind.salt() + 2.0, 0.02, 0.05),
            spin: hash_range(i, kind.salt() + 3.0, 0.5, 2.0),
            size: hash_range(i, kind.salt() + 4.0, 1.5, 2.5),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);

        let y = wrap(self.start.y, t, self.fall_speed, 100.0);
        let drifted = wrap(self.start.x, t, ctx.wind.particle_drift * 0.5, 100.0);
        let x = (drifted + 4.0 * wave(t, 0.02, o)).rem_euclid(100.0);
        let rotation = wrap(self.index as f32 * 37.0, t, self.spin, 360.0);

        RenderDescriptor::new(
            EntityKind::Leaf,
            self.index,
            Vec2::new(x, y),
            self.size,
            palette::token(EntityKind::Leaf, ctx.theme),
        )
        .with_rotation(rotation)
        .with_phase(wave(t, 0.02, o))
    }
}

/// Flower on a stalk rooted at the bottom edge, swaying with the wind
#[derive(Debug, Clone)]
pub struct FlowerStalk {
    index: u32,
    root: Vec2,
    height: f32,
}

impl FlowerStalk {
    pub fn new(index: u32, count: u32) -> Self {
        let kind = EntityKind::FlowerStalk;
        let i = index as f32;
        // Spread roots evenly so stalks don't bunch up, then jitter a little
        let slot = 90.0 / count.max(1) as f32;
        let x = 5.0 + slot * (i + 0.5) + hash_range(i, kind.salt(), -0.3, 0.3) * slot;
        Self {
            index,
            root: Vec2::new(x, hash_range(i, kind.salt() + 1.0, 92.0, 99.0)),
            height: hash_range(i, kind.salt() + 2.0, 6.0, 12.0),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);
        let sway = wave(t, 0.02, o);
        let rotation = 12.0 * ctx.wind.vegetation_sway * sway;

        RenderDescriptor::new(
            EntityKind::FlowerStalk,
            self.index,
            self.root,
            self.height,
            palette::token(EntityKind::FlowerStalk, ctx.theme),
        )
        .with_rotation(rotation)
        .with_phase(sway)
    }
}
