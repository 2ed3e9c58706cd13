use serde::{Deserialize, Serialize};

use crate::entities::{
    sky, Bee, Bird, Butterfly, Cloud, DewDrop, Dragonfly, EntityKind, Firefly, FlowerStalk,
    FrameContext, Leaf, RenderDescriptor, Star, WindParticle,
};
use crate::time::SceneMode;

/// How many of each kind to create. Fixed for the life of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationCounts {
    pub butterflies: u32,
    pub dragonflies: u32,
    pub bees: u32,
    pub birds: u32,
    pub fireflies: u32,
    pub dew_drops: u32,
    pub leaves: u32,
    pub flower_stalks: u32,
    pub clouds: u32,
    pub wind_particles: u32,
    pub stars: u32,
}

impl Default for PopulationCounts {
    fn default() -> Self {
        Self {
            butterflies: 5,
            dragonflies: 3,
            bees: 6,
            birds: 5,
            fireflies: 15,
            dew_drops: 12,
            leaves: 8,
            flower_stalks: 7,
            clouds: 4,
            wind_particles: 10,
            stars: 40,
        }
    }
}

const MORNING: &[EntityKind] = &[
    EntityKind::Sun,
    EntityKind::Cloud,
    EntityKind::Bird,
    EntityKind::FlowerStalk,
    EntityKind::DewDrop,
    EntityKind::Butterfly,
    EntityKind::Bee,
    EntityKind::WindParticle,
];

const DAY: &[EntityKind] = &[
    EntityKind::Sun,
    EntityKind::Cloud,
    EntityKind::Bird,
    EntityKind::FlowerStalk,
    EntityKind::Butterfly,
    EntityKind::Dragonfly,
    EntityKind::Bee,
    EntityKind::WindParticle,
];

const EVENING: &[EntityKind] = &[
    EntityKind::Sun,
    EntityKind::Cloud,
    EntityKind::Bird,
    EntityKind::Leaf,
    EntityKind::Dragonfly,
    EntityKind::Firefly,
    EntityKind::WindParticle,
];

const NIGHT: &[EntityKind] = &[
    EntityKind::Moon,
    EntityKind::Star,
    EntityKind::Cloud,
    EntityKind::ShootingStar,
    EntityKind::Firefly,
];

/// Kinds shown in a mode, back to front
pub fn active_kinds(mode: SceneMode) -> &'static [EntityKind] {
    match mode {
        SceneMode::Morning => MORNING,
        SceneMode::Day => DAY,
        SceneMode::Evening => EVENING,
        SceneMode::Night => NIGHT,
    }
}

/// Every animated entity in the scene, created once up front.
///
/// Shooting stars are not held here; they come and go through the spawner.
pub struct Populations {
    counts: PopulationCounts,
    butterflies: Vec<Butterfly>,
    dragonflies: Vec<Dragonfly>,
    bees: Vec<Bee>,
    birds: Vec<Bird>,
    fireflies: Vec<Firefly>,
    dew_drops: Vec<DewDrop>,
    leaves: Vec<Leaf>,
    flower_stalks: Vec<FlowerStalk>,
    clouds: Vec<Cloud>,
    wind_particles: Vec<WindParticle>,
    stars: Vec<Star>,
}

impl Populations {
    pub fn new(counts: PopulationCounts) -> Self {
        let stalks = counts.flower_stalks;
        Self {
            counts,
            butterflies: (0..counts.butterflies).map(Butterfly::new).collect(),
            dragonflies: (0..counts.dragonflies).map(Dragonfly::new).collect(),
            bees: (0..counts.bees).map(Bee::new).collect(),
            birds: (0..counts.birds).map(Bird::new).collect(),
            fireflies: (0..counts.fireflies).map(Firefly::new).collect(),
            dew_drops: (0..counts.dew_drops).map(DewDrop::new).collect(),
            leaves: (0..counts.leaves).map(Leaf::new).collect(),
            flower_stalks: (0..stalks).map(|i| FlowerStalk::new(i, stalks)).collect(),
            clouds: (0..counts.clouds).map(Cloud::new).collect(),
            wind_particles: (0..counts.wind_particles).map(WindParticle::new).collect(),
            stars: (0..counts.stars).map(Star::new).collect(),
        }
    }

    pub fn counts(&self) -> &PopulationCounts {
        &self.counts
    }

    /// Advance the stateful kinds that are on screen in this mode
    pub fn update(&mut self, ctx: &FrameContext, is_enabled: impl Fn(EntityKind) -> bool) {
        let active = active_kinds(ctx.mode);
        let live = |kind: EntityKind| active.contains(&kind) && is_enabled(kind);

        if live(EntityKind::Butterfly) {
            for butterfly in &mut self.butterflies {
                butterfly.update(ctx);
            }
        }
        if live(EntityKind::Dragonfly) {
            for dragonfly in &mut self.dragonflies {
                dragonfly.update(ctx);
            }
        }
    }

    /// Append descriptors for one kind
    pub fn emit(&self, kind: EntityKind, ctx: &FrameContext, out: &mut Vec<RenderDescriptor>) {
        match kind {
            EntityKind::Sun => out.extend(sky::sun(ctx)),
            EntityKind::Moon => out.extend(sky::moon(ctx)),
            EntityKind::Star => out.extend(self.stars.iter().map(|s| s.descriptor(ctx))),
            EntityKind::Cloud => out.extend(self.clouds.iter().map(|c| c.descriptor(ctx))),
            EntityKind::Bird => out.extend(self.birds.iter().map(|b| b.descriptor(ctx))),
            EntityKind::FlowerStalk => {
                out.extend(self.flower_stalks.iter().map(|f| f.descriptor(ctx)))
            }
            EntityKind::DewDrop => out.extend(self.dew_drops.iter().map(|d| d.descriptor(ctx))),
            EntityKind::Leaf => out.extend(self.leaves.iter().map(|l| l.descriptor(ctx))),
            EntityKind::Butterfly => {
                out.extend(self.butterflies.iter().map(|b| b.descriptor(ctx)))
            }
            EntityKind::Dragonfly => {
                out.extend(self.dragonflies.iter().map(|d| d.descriptor(ctx)))
            }
            EntityKind::Bee => out.extend(self.bees.iter().map(|b| b.descriptor(ctx))),
            EntityKind::Firefly => out.extend(self.fireflies.iter().map(|f| f.descriptor(ctx))),
            EntityKind::WindParticle => {
                out.extend(self.wind_particles.iter().map(|w| w.descriptor(ctx)))
            }
            // Owned by the spawner
            EntityKind::ShootingStar => {}
        }
    }

    pub fn butterflies(&self) -> &[Butterfly] {
        &self.butterflies
    }

    pub fn dragonflies(&self) -> &[Dragonfly] {
        &self.dragonflies
    }
}
