use glam::Vec2;

use crate::entities::hash::{hash01, hash_range, phase_offset};
use crate::entities::motion::{cowave, wave, wrap};
use crate::entities::{palette, EntityKind, FrameContext, RenderDescriptor};

/// Bird gliding across the upper sky, wrapping at the right edge
#[derive(Debug, Clone)]
pub struct Bird {
    index: u32,
    start_x: f32,
    cruise_y: f32,
    speed: f32,
    size: f32,
}

impl Bird {
    pub fn new(index: u32) -> Self {
        let kind = EntityKind::Bird;
        let i = index as f32;
        let lane = kind.bounds().inset(6.0);
        Self {
            index,
            start_x: hash_range(i, kind.salt(), 0.0, 100.0),
            cruise_y: lane.lerp(0.0, hash01(i, kind.salt() + 1.0)).y,
            speed: hash_range(i, kind.salt() + 2.0, 0.01, 0.03),
            size: hash_range(i, kind.salt() + 3.0, 1.2, 2.2),
        }
    }

    pub fn descriptor(&self, ctx: &FrameContext) -> RenderDescriptor {
        let t = ctx.time;
        let o = phase_offset(self.index);

        let x = wrap(self.start_x, t, self.speed, 100.0);
        let y = self.cruise_y + 3.0 * wave(t, 0.01, o) + 1.0 * wave(t, 0.037, o * 2.3);
        let climb = 0.03 * cowave(t, 0.01, o) + 0.037 * cowave(t, 0.037, o * 2.3);
        let tilt = climb.atan2(self.speed).to_degrees().clamp(-25.0, 25.0);

        RenderDescriptor::new(
            EntityKind::Bird,
            self.index,
            Vec2::new(x, y),
            self.size,
            palette::token(EntityKind::Bird, ctx.theme),
        )
        .with_rotation(tilt)
        .with_phase(wave(t, 0.15, o))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::time::SceneMode;

    #[test]
    fn test_birds_stay_in_upper_sky() {
        let bounds = EntityKind::Bird.bounds();
        for index in 0..8 {
            let bird = Bird::new(index);
            let mut t = 0.0;
            while t < 60_000.0 {
                let d = bird.descriptor(&FrameContext::new(t, 1.0, SceneMode::Day, Theme::Dark));
                assert!(bounds.contains(d.position), "{:?}", d.position);
                assert!(d.position.y <= 50.0);
                t += 23.0;
            }
        }
    }

    #[test]
    fn test_birds_fly_right() {
        let bird = Bird::new(0);
        let a = bird.descriptor(&FrameContext::new(0.0, 1.0, SceneMode::Day, Theme::Light));
        let b = bird.descriptor(&FrameContext::new(10.0, 1.0, SceneMode::Day, Theme::Light));
        let moved = (b.position.x - a.position.x).rem_euclid(100.0);
        assert!(moved > 0.0 && moved < 1.0);
    }
}
