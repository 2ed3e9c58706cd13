use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::lunar;

/// Moon phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    ThirdQuarter,
    WaningCrescent,
}

/// Upper bound (exclusive, in days) of each phase, in cycle order.
/// Anything at or past the last bound wraps back to a new moon.
const PHASE_THRESHOLDS: [(f64, MoonPhase); 8] = [
    (1.0, MoonPhase::New),
    (7.4, MoonPhase::WaxingCrescent),
    (8.4, MoonPhase::FirstQuarter),
    (14.8, MoonPhase::WaxingGibbous),
    (15.8, MoonPhase::Full),
    (22.1, MoonPhase::WaningGibbous),
    (23.1, MoonPhase::ThirdQuarter),
    (29.5, MoonPhase::WaningCrescent),
];

impl MoonPhase {
    /// Look up the phase for a day within the lunar cycle
    pub fn for_lunar_day(lunar_day: f64) -> Self {
        let day = lunar_day.rem_euclid(lunar::CYCLE_DAYS);
        PHASE_THRESHOLDS
            .iter()
            .find(|(bound, _)| day < *bound)
            .map(|(_, phase)| *phase)
            .unwrap_or(MoonPhase::New)
    }

    /// Illuminated fraction used as the moon's opacity
    pub fn illumination(&self) -> f32 {
        match self {
            MoonPhase::New => 0.0,
            MoonPhase::WaxingCrescent => 0.25,
            MoonPhase::FirstQuarter => 0.5,
            MoonPhase::WaxingGibbous => 0.75,
            MoonPhase::Full => 1.0,
            MoonPhase::WaningGibbous => 0.75,
            MoonPhase::ThirdQuarter => 0.5,
            MoonPhase::WaningCrescent => 0.25,
        }
    }

    /// A new moon is not drawn at all
    pub fn is_visible(&self) -> bool {
        *self != MoonPhase::New
    }

    pub fn token(&self) -> &'static str {
        match self {
            MoonPhase::New => "moon-new",
            MoonPhase::WaxingCrescent => "moon-waxing-crescent",
            MoonPhase::FirstQuarter => "moon-first-quarter",
            MoonPhase::WaxingGibbous => "moon-waxing-gibbous",
            MoonPhase::Full => "moon-full",
            MoonPhase::WaningGibbous => "moon-waning-gibbous",
            MoonPhase::ThirdQuarter => "moon-third-quarter",
            MoonPhase::WaningCrescent => "moon-waning-crescent",
        }
    }
}

/// Maps calendar dates onto the lunar cycle relative to a known new moon
#[derive(Debug, Clone, Copy)]
pub struct LunarPhaseCalculator {
    epoch: DateTime<Utc>,
}

impl LunarPhaseCalculator {
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    /// Whole days since the epoch, modulo the cycle length
    pub fn lunar_day<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> f64 {
        let elapsed = now.with_timezone(&Utc) - self.epoch;
        let diff_days = (elapsed.num_seconds() as f64 / 86_400.0).floor();
        diff_days.rem_euclid(lunar::CYCLE_DAYS)
    }

    pub fn phase<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> MoonPhase {
        MoonPhase::for_lunar_day(self.lunar_day(now))
    }
}

impl Default for LunarPhaseCalculator {
    fn default() -> Self {
        let epoch = Utc
            .with_ymd_and_hms(
                lunar::EPOCH_YEAR,
                lunar::EPOCH_MONTH,
                lunar::EPOCH_DAY,
                lunar::EPOCH_HOUR,
                lunar::EPOCH_MINUTE,
                0,
            )
            .single()
            .unwrap_or_default();
        Self::new(epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_full_moon_mid_cycle() {
        let calc = LunarPhaseCalculator::default();
        let now = calc.epoch() + Duration::minutes((15.2 * 24.0 * 60.0) as i64);
        assert_eq!(calc.phase(&now), MoonPhase::Full);
    }

    #[test]
    fn test_epoch_is_new_moon() {
        let calc = LunarPhaseCalculator::default();
        assert_eq!(calc.phase(&calc.epoch()), MoonPhase::New);
        assert_eq!(calc.lunar_day(&calc.epoch()), 0.0);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(MoonPhase::for_lunar_day(0.0), MoonPhase::New);
        assert_eq!(MoonPhase::for_lunar_day(0.99), MoonPhase::New);
        assert_eq!(MoonPhase::for_lunar_day(1.0), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::for_lunar_day(7.4), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::for_lunar_day(8.4), MoonPhase::WaxingGibbous);
        assert_eq!(MoonPhase::for_lunar_day(14.8), MoonPhase::Full);
        assert_eq!(MoonPhase::for_lunar_day(15.8), MoonPhase::WaningGibbous);
        assert_eq!(MoonPhase::for_lunar_day(22.1), MoonPhase::ThirdQuarter);
        assert_eq!(MoonPhase::for_lunar_day(23.1), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::for_lunar_day(29.5), MoonPhase::New);
        assert_eq!(MoonPhase::for_lunar_day(29.52), MoonPhase::New);
    }

    #[test]
    fn test_cycle_coverage() {
        // Sweep the whole cycle; every sample must land on exactly one phase
        // and phases must appear in cycle order.
        let order = [
            MoonPhase::New,
            MoonPhase::WaxingCrescent,
            MoonPhase::FirstQuarter,
            MoonPhase::WaxingGibbous,
            MoonPhase::Full,
            MoonPhase::WaningGibbous,
            MoonPhase::ThirdQuarter,
            MoonPhase::WaningCrescent,
            MoonPhase::New,
        ];
        let mut cursor = 0;
        let mut day = 0.0;
        while day < lunar::CYCLE_DAYS {
            let phase = MoonPhase::for_lunar_day(day);
            if phase != order[cursor] {
                cursor += 1;
                assert_eq!(phase, order[cursor], "out of order at day {}", day);
            }
            day += 0.01;
        }
        assert_eq!(cursor, order.len() - 1);
    }

    #[test]
    fn test_dates_before_epoch_wrap() {
        let calc = LunarPhaseCalculator::default();
        let before = calc.epoch() - Duration::days(1);
        let day = calc.lunar_day(&before);
        assert!((0.0..lunar::CYCLE_DAYS).contains(&day));
        assert_eq!(calc.phase(&before), MoonPhase::WaningCrescent);
    }

    #[test]
    fn test_new_moon_not_visible() {
        assert!(!MoonPhase::New.is_visible());
        assert_eq!(MoonPhase::New.illumination(), 0.0);
        assert!(MoonPhase::Full.is_visible());
        assert_eq!(MoonPhase::Full.illumination(), 1.0);
    }
}
