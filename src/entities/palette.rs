//! Theme-aware color tokens. The renderer maps tokens to actual colors.

use crate::entities::EntityKind;
use crate::theme::Theme;
use crate::time::SceneMode;

/// Token for a kind under the given theme
pub fn token(kind: EntityKind, theme: Theme) -> &'static str {
    let (light, dark) = match kind {
        EntityKind::Sun => ("sun-light", "sun-dark"),
        EntityKind::Moon => ("moon-light", "moon-dark"),
        EntityKind::Star => ("star-light", "star-dark"),
        EntityKind::Cloud => ("cloud-light", "cloud-dark"),
        EntityKind::ShootingStar => ("shooting-star-light", "shooting-star-dark"),
        EntityKind::Bird => ("bird-light", "bird-dark"),
        EntityKind::FlowerStalk => ("flower-light", "flower-dark"),
        EntityKind::DewDrop => ("dew-light", "dew-dark"),
        EntityKind::Leaf => ("leaf-light", "leaf-dark"),
        EntityKind::Butterfly => ("butterfly-light", "butterfly-dark"),
        EntityKind::Dragonfly => ("dragonfly-light", "dragonfly-dark"),
        EntityKind::Bee => ("bee-light", "bee-dark"),
        EntityKind::Firefly => ("firefly-light", "firefly-dark"),
        EntityKind::WindParticle => ("wind-light", "wind-dark"),
    };
    match theme {
        Theme::Light => light,
        Theme::Dark => dark,
    }
}

/// The sun's tint follows the time of day
pub fn sun_token(mode: SceneMode, theme: Theme) -> &'static str {
    match (mode, theme) {
        (SceneMode::Morning, Theme::Light) => "sun-morning-light",
        (SceneMode::Morning, Theme::Dark) => "sun-morning-dark",
        (SceneMode::Evening, Theme::Light) => "sun-evening-light",
        (SceneMode::Evening, Theme::Dark) => "sun-evening-dark",
        (_, theme) => token(EntityKind::Sun, theme),
    }
}
