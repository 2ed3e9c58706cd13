use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::shooting_star::{CHECK_INTERVAL_SECS, LIFESPAN_SECS, SPAWN_PROBABILITY};
use crate::entities::{palette, EntityKind, FrameContext, RenderDescriptor};
use crate::time::SceneMode;

/// Spawner tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShootingStarSettings {
    /// Seconds between spawn trials
    pub check_interval: f32,
    /// Probability that a trial spawns a star
    pub spawn_probability: f64,
    /// Seconds a star stays visible
    pub lifespan: f32,
}

impl Default for ShootingStarSettings {
    fn default() -> Self {
        Self {
            check_interval: CHECK_INTERVAL_SECS,
            spawn_probability: SPAWN_PROBABILITY,
            lifespan: LIFESPAN_SECS,
        }
    }
}

/// A transient streak across the night sky
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub id: u32,
    pub start: Vec2,
    /// Unit vector, always pointing downward
    pub direction: Vec2,
    /// Percent per second
    pub speed: f32,
    /// Scene seconds
    pub spawn_time: f64,
    pub lifespan: f32,
}

impl ShootingStar {
    pub fn age(&self, now: f64) -> f32 {
        (now - self.spawn_time).max(0.0) as f32
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now - self.spawn_time >= self.lifespan as f64
    }

    pub fn position(&self, now: f64) -> Vec2 {
        let p = self.start + self.direction * self.speed * self.age(now);
        EntityKind::ShootingStar.bounds().clamp(p)
    }

    pub fn descriptor(&self, now: f64, ctx: &FrameContext) -> RenderDescriptor {
        let progress = (self.age(now) / self.lifespan).clamp(0.0, 1.0);
        let heading = self.direction.y.atan2(self.direction.x).to_degrees();

        RenderDescriptor::new(
            EntityKind::ShootingStar,
            self.id,
            self.position(now),
            1.5,
            palette::token(EntityKind::ShootingStar, ctx.theme),
        )
        .with_rotation(heading)
        .with_opacity(1.0 - progress)
        .with_phase(progress)
    }
}

/// Stochastic shooting star generator, active only at night.
///
/// Every `check_interval` seconds of scene time a Bernoulli trial decides
/// whether to spawn. An update runs at most one trial, however many intervals
/// it covers, so a long stall yields one roll rather than a burst. Stars are
/// removed on the first update at or after their lifespan, whatever the mode.
pub struct ShootingStarSpawner {
    settings: ShootingStarSettings,
    rng: StdRng,
    stars: Vec<ShootingStar>,
    last_check: f64,
    next_id: u32,
    total_spawned: u64,
}

impl ShootingStarSpawner {
    pub fn new(settings: ShootingStarSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            settings,
            rng,
            stars: Vec::new(),
            last_check: 0.0,
            next_id: 0,
            total_spawned: 0,
        }
    }

    /// Expire old stars, then run any spawn trials that are due
    pub fn update(&mut self, now: f64, mode: SceneMode) {
        let before = self.stars.len();
        self.stars.retain(|star| !star.is_expired(now));
        let expired = before - self.stars.len();
        if expired > 0 {
            log::debug!("{} shooting star(s) expired at {:.2}s", expired, now);
        }

        if !mode.is_night() {
            // Trials resume on the next interval boundary after night returns
            self.last_check = now;
            return;
        }

        let interval = self.settings.check_interval.max(f32::EPSILON) as f64;
        let due = ((now - self.last_check) / interval).floor();
        if due.is_nan() || due < 1.0 {
            return;
        }
        if due > 1.0 {
            log::trace!("Skipping {} missed shooting star trial(s)", due - 1.0);
        }
        // Snap to the latest boundary at or before `now`
        self.last_check += due * interval;
        if self.last_check > now {
            self.last_check = now;
        }

        if self.rng.gen_bool(self.settings.spawn_probability.clamp(0.0, 1.0)) {
            self.spawn_at(now);
        }
    }

    /// Spawn a star immediately at `now`
    pub fn spawn_at(&mut self, now: f64) -> &ShootingStar {
        let start = Vec2::new(self.rng.gen_range(10.0..90.0), self.rng.gen_range(5.0..35.0));
        let angle = self.rng.gen_range(15.0f32..45.0).to_radians();
        let leftward = self.rng.gen_bool(0.5);
        let dx = if leftward { -angle.cos() } else { angle.cos() };
        let speed = self.rng.gen_range(20.0..35.0);

        let star = ShootingStar {
            id: self.next_id,
            start,
            direction: Vec2::new(dx, angle.sin()),
            speed,
            spawn_time: now,
            lifespan: self.settings.lifespan,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.total_spawned += 1;

        log::debug!("Shooting star {} spawned at ({:.1}, {:.1})", star.id, start.x, start.y);
        self.stars.push(star);
        &self.stars[self.stars.len() - 1]
    }

    pub fn active(&self) -> &[ShootingStar] {
        &self.stars
    }

    pub fn total_spawned(&self) -> u64 {
        self.total_spawned
    }

    pub fn settings(&self) -> &ShootingStarSettings {
        &self.settings
    }

    pub fn emit(&self, now: f64, ctx: &FrameContext, out: &mut Vec<RenderDescriptor>) {
        out.extend(self.stars.iter().map(|star| star.descriptor(now, ctx)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn always() -> ShootingStarSettings {
        ShootingStarSettings {
            spawn_probability: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_present_from_spawn_until_lifespan() {
        let mut spawner = ShootingStarSpawner::new(ShootingStarSettings::default(), Some(7));
        spawner.spawn_at(10.0);
        assert_eq!(spawner.active().len(), 1);

        spawner.update(10.0, SceneMode::Day);
        assert_eq!(spawner.active().len(), 1);
        spawner.update(12.99, SceneMode::Day);
        assert_eq!(spawner.active().len(), 1);
        spawner.update(13.0, SceneMode::Day);
        assert!(spawner.active().is_empty());
    }

    #[test]
    fn test_no_trials_outside_night() {
        let mut spawner = ShootingStarSpawner::new(always(), Some(1));
        let mut now = 0.0;
        while now < 60.0 {
            spawner.update(now, SceneMode::Evening);
            now += 0.5;
        }
        assert_eq!(spawner.total_spawned(), 0);
    }

    #[test]
    fn test_trials_follow_check_interval() {
        let mut spawner = ShootingStarSpawner::new(always(), Some(1));
        spawner.update(1.9, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 0);
        spawner.update(2.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 1);
        // Two intervals in one update still roll once
        spawner.update(6.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 2);
        spawner.update(7.9, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 2);
        spawner.update(8.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 3);
    }

    #[test]
    fn test_long_stall_spawns_at_most_one_star() {
        let mut spawner = ShootingStarSpawner::new(always(), Some(5));
        spawner.update(0.0, SceneMode::Night);
        spawner.update(3_600.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 1);
        assert_eq!(spawner.active().len(), 1);

        // The next trial waits a full interval after the stall
        spawner.update(3_601.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 1);
        spawner.update(3_602.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 2);
    }

    #[test]
    fn test_tiny_interval_late_in_a_session() {
        let settings = ShootingStarSettings {
            check_interval: 0.001,
            spawn_probability: 1.0,
            ..Default::default()
        };
        let mut spawner = ShootingStarSpawner::new(settings, Some(2));
        spawner.update(40_000.0, SceneMode::Day);
        spawner.update(40_001.0, SceneMode::Night);
        assert_eq!(spawner.total_spawned(), 1);

        let mut now = 40_001.0;
        for _ in 0..600 {
            now += 1.0 / 60.0;
            spawner.update(now, SceneMode::Night);
        }
        assert_eq!(spawner.total_spawned(), 601);
    }

    #[test]
    fn test_seeded_spawners_agree() {
        let run = |seed| {
            let mut spawner = ShootingStarSpawner::new(ShootingStarSettings::default(), Some(seed));
            let mut now = 0.0;
            let mut starts = Vec::new();
            while now < 600.0 {
                spawner.update(now, SceneMode::Night);
                starts.extend(spawner.active().iter().map(|s| (s.id, s.start)));
                now += 0.25;
            }
            starts
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_star_falls_downward_and_fades() {
        let mut spawner = ShootingStarSpawner::new(ShootingStarSettings::default(), Some(3));
        let star = spawner.spawn_at(0.0).clone();
        assert!(star.direction.y > 0.0);
        assert!((10.0..90.0).contains(&star.start.x));
        assert!((5.0..35.0).contains(&star.start.y));

        let ctx = FrameContext::new(0.0, 1.0, SceneMode::Night, Theme::Dark);
        let early = star.descriptor(0.1, &ctx);
        let late = star.descriptor(2.5, &ctx);
        assert!(late.position.y > early.position.y);
        assert!(late.opacity < early.opacity);
        assert!(EntityKind::ShootingStar.bounds().contains(late.position));
    }
}
