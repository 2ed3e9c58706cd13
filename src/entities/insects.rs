use std::f32::consts::TAU;

use glam::Vec2;

use crate::constants::motion::*;
use crate::entities::hash::{hash01, hash_range, phase_offset};
use crate::entities::motion::{cowave, wave};
use crate::entities::{palette, EntityKind, FrameContext, RenderDescriptor};

fn seeded_base(kind: EntityKind, index: u32, margin: f32) -> Vec2 {
    let i = index as f32;
    kind.bounds()
        .inset(margin)
        .lerp(hash01(i, kind.salt()), hash01(i, kind.salt() + 1.0))
}

/// Heading of a velocity vector in degrees, 0 = moving right
fn heading_degrees(v: Vec2) -> f32 {
    if v.length_squared() <= f32::EPSILON {
        0.0
    } else {
        v.y.atan2(v.x).to_degrees()
    }
}

/// Bee: tight high-frequency zigzag around a home point
#[derive(Debug, Clone)]
pub struct Bee {
    index: u32,
    home: Vec2,
    size: f32,
}

impl Bee {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Bee;
        Self {
            index,
            home: seeded_base(kind, index, 8.0),
            size: hash_range(index as f32, kind.salt() + 2.0, 1.0, 1.6),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);

        let x = self.home.x + 6.0 * wave(t, 0.02, o) + 1.5 * wave(t, 0.11, o * 2.0);
        let y = self.home.y + 4.0 * wave(t, 0.017, o * 1.3) + 1.2 * wave(t, 0.13, o * 0.7);

        // Derivative of the position formula gives the flight direction
        let velocity = Vec2::new(
            0.12 * cowave(t, 0.02, o) + 0.165 * cowave(t, 0.11, o * 2.0),
            0.068 * cowave(t, 0.017, o * 1.3) + 0.156 * cowave(t, 0.13, o * 0.7),
        );

        RenderDescriptor::new(
            EntityKind::Bee,
            self.index,
            Vec2::new(x, y),
            self.size,
            palette::token(EntityKind::Bee, ctx.theme),
        )
        .with_rotation(heading_degrees(velocity))
        .with_phase(wave(t, 0.9, o))
    }
}

/// Firefly: almost still, carried by its brightness pulse
#[derive(Debug, Clone)]
pub struct Firefly {
    index: u32,
    home: Vec2,
    pulse_rate: f32,
}

impl Firefly {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Firefly;
        Self {
            index,
            home: seeded_base(kind, index, 3.0),
            pulse_rate: hash_range(index as f32, kind.salt() + 2.0, 0.03, 0.07),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);

        let x = self.home.x + 1.5 * wave(t, 0.005, o);
        let y = self.home.y + 1.0 * cowave(t, 0.004, o);
        let glow = wave(t, self.pulse_rate, o * 3.0);

        RenderDescriptor::new(
            EntityKind::Firefly,
            self.index,
            Vec2::new(x, y),
            0.6,
            palette::token(EntityKind::Firefly, ctx.theme),
        )
        .with_opacity(0.2 + 0.8 * (0.5 + 0.5 * glow))
        .with_phase(glow)
    }
}

/// Butterfly: replays a precomputed loop of waypoints, then plans a new
/// loop around wherever it ended up.
#[derive(Debug, Clone)]
pub struct Butterfly {
    index: u32,
    path: Vec<Vec2>,
    current_path_index: usize,
    cycle: u64,
    generation: u32,
    position: Vec2,
    speed: f32,
    wing_phase: f32,
    size: f32,
}

impl Butterfly {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Butterfly;
        let i = index as f32;
        let start = seeded_base(kind, index, 10.0);
        Self {
            index,
            path: Self::plan_path(index, 0, start),
            current_path_index: 0,
            cycle: 0,
            generation: 0,
            position: start,
            speed: BUTTERFLY_PATH_SPEED * hash_range(i, kind.salt() + 2.0, 0.8, 1.2),
            wing_phase: hash_range(i, kind.salt() + 3.0, 0.0, TAU),
            size: hash_range(i, kind.salt() + 4.0, 1.8, 2.6),
        }
    }

    /// Lissajous loop through `center`; waypoint 0 is `center` itself
    fn plan_path(index: u32, generation: u32, center: Vec2) -> Vec<Vec2> {
        let bounds = EntityKind::Butterfly.bounds();
        let seed = index as f32 * 31.0 + generation as f32;
        let rx = hash_range(seed, 5.0, 6.0, 14.0);
        let ry = hash_range(seed, 6.0, 4.0, 10.0);
        let tilt = hash_range(seed, 7.0, 0.0, TAU);
        let (sin_t, cos_t) = tilt.sin_cos();

        (0..BUTTERFLY_PATH_LEN)
            .map(|k| {
                let theta = k as f32 / BUTTERFLY_PATH_LEN as f32 * TAU;
                let local = Vec2::new(rx * theta.sin(), ry * 0.5 * (2.0 * theta).sin());
                let rotated = Vec2::new(
                    local.x * cos_t - local.y * sin_t,
                    local.x * sin_t + local.y * cos_t,
                );
                bounds.clamp(center + rotated)
            })
            .collect()
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        let len = self.path.len();
        let progress = (ctx.time * self.speed as f64).max(0.0);
        let cycle = (progress / len as f64).floor() as u64;
        let index = (progress.floor() as u64 % len as u64) as usize;

        if cycle != self.cycle {
            // Loop finished: plan a fresh one from the current spot
            self.generation = self.generation.wrapping_add(1);
            self.path = Self::plan_path(self.index, self.generation, self.position);
            self.cycle = cycle;
        }
        self.current_path_index = index;

        let from = self.path[index];
        let to = self.path[(index + 1) % len];
        self.position = EntityKind::Butterfly.bounds().clamp(from.lerp(to, progress.fract() as f32));
        self.wing_phase = (self.wing_phase + BUTTERFLY_WING_RATE * ctx.delta).rem_euclid(TAU);
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let len = self.path.len();
        let next = self.path[(self.current_path_index + 1) % len];
        let heading = heading_degrees(next - self.path[self.current_path_index]);

        RenderDescriptor::new(
            EntityKind::Butterfly,
            self.index,
            self.position,
            self.size,
            palette::token(EntityKind::Butterfly, ctx.theme),
        )
        .with_rotation(heading)
        .with_phase(self.wing_phase.sin())
    }

    pub fn path(&self) -> &[Vec2] {
        &self.path
    }

    pub fn current_path_index(&self) -> usize {
        self.current_path_index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Dragonfly: darts toward a target, picks a new one on arrival
#[derive(Debug, Clone)]
pub struct Dragonfly {
    index: u32,
    position: Vec2,
    target: Vec2,
    retargets: u32,
    heading: f32,
    wing_phase: f32,
}

impl Dragonfly {
    pub fn new(index: u32) -> Self {
        let start = seeded_base(EntityKind::Dragonfly, index, 5.0);
        Self {
            index,
            position: start,
            target: Self::pick_target(index, 0),
            retargets: 0,
            heading: 0.0,
            wing_phase: 0.0,
        }
    }

    fn pick_target(index: u32, retargets: u32) -> Vec2 {
        let bounds = EntityKind::Dragonfly.bounds().inset(3.0);
        let seed = index as f32 * 13.0 + retargets as f32 * 0.7;
        bounds.lerp(hash01(seed, 11.0), hash01(seed, 12.0))
    }

    pub fn update(&mut self, ctx: &FrameContext) {
        let to_target = self.target - self.position;

        // Fraction of the remaining vector covered this tick, independent of
        // how many nominal frames the tick spans
        let step = 1.0 - (1.0 - DRAGONFLY_SEEK_FRACTION).powf(ctx.delta.max(0.0));
        let perpendicular = Vec2::new(-to_target.y, to_target.x).normalize_or_zero();
        let wobble = perpendicular
            * DRAGONFLY_WOBBLE
            * wave(ctx.time, 0.2, phase_offset(self.index))
            * ctx.delta.min(4.0);

        let movement = to_target * step + wobble;
        self.position = EntityKind::Dragonfly.bounds().clamp(self.position + movement);
        if movement.length_squared() > f32::EPSILON {
            self.heading = heading_degrees(movement);
        }

        if self.position.distance(self.target) < DRAGONFLY_ARRIVE_EPSILON {
            self.retargets = self.retargets.wrapping_add(1);
            self.target = Self::pick_target(self.index, self.retargets);
            log::trace!("dragonfly {} retargeted to {:?}", self.index, self.target);
        }

        self.wing_phase = (self.wing_phase + DRAGONFLY_WING_RATE * ctx.delta).rem_euclid(TAU);
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        RenderDescriptor::new(
            EntityKind::Dragonfly,
            self.index,
            self.position,
            2.2,
            palette::token(EntityKind::Dragonfly, ctx.theme),
        )
        .with_rotation(self.heading)
        .with_phase(self.wing_phase.sin())
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn retargets(&self) -> u32 {
        self.retargets
    }
}
