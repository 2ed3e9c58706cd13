//! Animated scene entities
//!
//! Most kinds are stateless: their descriptor is a closed-form function of
//! scene time and the entity's index. Butterflies and dragonflies carry a
//! little state between ticks, and shooting stars are spawned and expired
//! by [`ShootingStarSpawner`].

mod birds;
mod descriptor;
mod flora;
pub(crate) mod hash;
mod insects;
mod kind;
pub(crate) mod motion;
pub mod palette;
mod population;
mod shooting_star;
pub mod sky;
mod wind;

pub use birds::Bird;
pub use descriptor::{FrameContext, RenderDescriptor};
pub use flora::{DewDrop, FlowerStalk, Leaf};
pub use insects::{Bee, Butterfly, Dragonfly, Firefly};
pub use kind::{EntityKind, PercentBounds};
pub use population::{active_kinds, PopulationCounts, Populations};
pub use shooting_star::{ShootingStar, ShootingStarSettings, ShootingStarSpawner};
pub use sky::{Cloud, Star};
pub use wind::{WindEffects, WindParticle, WindStrength};
