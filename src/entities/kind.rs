use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Every kind of animated scene entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Sun,
    Moon,
    Star,
    Cloud,
    ShootingStar,
    Bird,
    FlowerStalk,
    DewDrop,
    Leaf,
    Butterfly,
    Dragonfly,
    Bee,
    Firefly,
    WindParticle,
}

impl EntityKind {
    /// All kinds in back-to-front draw order
    pub const DRAW_ORDER: [EntityKind; 14] = [
        EntityKind::Sun,
        EntityKind::Moon,
        EntityKind::Star,
        EntityKind::Cloud,
        EntityKind::ShootingStar,
        EntityKind::Bird,
        EntityKind::FlowerStalk,
        EntityKind::DewDrop,
        EntityKind::Leaf,
        EntityKind::Butterfly,
        EntityKind::Dragonfly,
        EntityKind::Bee,
        EntityKind::Firefly,
        EntityKind::WindParticle,
    ];

    /// Viewport region (percent) the kind is confined to
    pub fn bounds(&self) -> PercentBounds {
        match self {
            EntityKind::Sun | EntityKind::Moon => PercentBounds::new(0.0, 100.0, 0.0, 60.0),
            EntityKind::Star => PercentBounds::new(0.0, 100.0, 0.0, 60.0),
            EntityKind::Cloud => PercentBounds::new(0.0, 100.0, 5.0, 35.0),
            EntityKind::ShootingStar => PercentBounds::new(0.0, 100.0, 0.0, 70.0),
            EntityKind::Bird => PercentBounds::new(0.0, 100.0, 5.0, 50.0),
            EntityKind::FlowerStalk => PercentBounds::new(0.0, 100.0, 75.0, 100.0),
            EntityKind::DewDrop => PercentBounds::new(0.0, 100.0, 70.0, 98.0),
            EntityKind::Leaf => PercentBounds::new(0.0, 100.0, 0.0, 100.0),
            EntityKind::Butterfly => PercentBounds::new(5.0, 95.0, 35.0, 90.0),
            EntityKind::Dragonfly => PercentBounds::new(5.0, 95.0, 30.0, 85.0),
            EntityKind::Bee => PercentBounds::new(5.0, 95.0, 45.0, 90.0),
            EntityKind::Firefly => PercentBounds::new(5.0, 95.0, 40.0, 95.0),
            EntityKind::WindParticle => PercentBounds::new(0.0, 100.0, 20.0, 80.0),
        }
    }

    /// Stable per-kind salt for seed hashing
    pub(crate) fn salt(&self) -> f32 {
        (*self as u32 + 1) as f32 * 17.0
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Sun => "sun",
            EntityKind::Moon => "moon",
            EntityKind::Star => "star",
            EntityKind::Cloud => "cloud",
            EntityKind::ShootingStar => "shooting-star",
            EntityKind::Bird => "bird",
            EntityKind::FlowerStalk => "flower-stalk",
            EntityKind::DewDrop => "dew-drop",
            EntityKind::Leaf => "leaf",
            EntityKind::Butterfly => "butterfly",
            EntityKind::Dragonfly => "dragonfly",
            EntityKind::Bee => "bee",
            EntityKind::Firefly => "firefly",
            EntityKind::WindParticle => "wind-particle",
        }
    }
}

/// Axis-aligned rectangle in viewport percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl PercentBounds {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Saturating clamp, never a wrap
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Point at fractional coordinates `(u, v)` inside the rectangle
    pub fn lerp(&self, u: f32, v: f32) -> Vec2 {
        Vec2::new(
            self.min_x + self.width() * u,
            self.min_y + self.height() * v,
        )
    }

    /// Shrink by `margin` percent on every side
    pub fn inset(&self, margin: f32) -> Self {
        let mx = margin.min(self.width() / 2.0);
        let my = margin.min(self.height() / 2.0);
        Self::new(self.min_x + mx, self.max_x - mx, self.min_y + my, self.max_y - my)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_saturates() {
        let bounds = EntityKind::Bird.bounds();
        assert_eq!(bounds.clamp(Vec2::new(-20.0, 80.0)), Vec2::new(0.0, 50.0));
        assert_eq!(bounds.clamp(Vec2::new(50.0, 20.0)), Vec2::new(50.0, 20.0));
        assert!(bounds.contains(Vec2::new(0.0, 5.0)));
        assert!(!bounds.contains(Vec2::new(0.0, 4.9)));
    }

    #[test]
    fn test_inset() {
        let inner = PercentBounds::new(0.0, 100.0, 40.0, 50.0).inset(10.0);
        assert_eq!(inner, PercentBounds::new(10.0, 90.0, 45.0, 45.0));
    }

    #[test]
    fn test_draw_order_covers_every_kind_once() {
        let mut kinds = EntityKind::DRAW_ORDER.to_vec();
        kinds.sort();
        kinds.dedup();
        assert_eq!(kinds.len(), 14);
    }
}
