use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use parking_lot::Mutex;

use crate::error::{SceneError, SceneResult};

/// Source of the current civil date and time
pub trait WallClock {
    /// Current local time with its UTC offset
    fn now(&self) -> SceneResult<DateTime<FixedOffset>>;
}

impl<T: WallClock + ?Sized> WallClock for Arc<T> {
    fn now(&self) -> SceneResult<DateTime<FixedOffset>> {
        (**self).now()
    }
}

impl<T: WallClock + ?Sized> WallClock for Box<T> {
    fn now(&self) -> SceneResult<DateTime<FixedOffset>> {
        (**self).now()
    }
}

/// The host's local system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> SceneResult<DateTime<FixedOffset>> {
        let now = Local::now();
        Ok(now.with_timezone(now.offset()))
    }
}

/// Clock driven by the caller, for previews and tests
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Option<DateTime<FixedOffset>>>,
}

impl ManualClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Mutex::new(Some(now)),
        }
    }

    /// Clock fixed at the given UTC instant
    pub fn from_utc(now: DateTime<Utc>) -> Self {
        Self::new(now.fixed_offset())
    }

    /// Clock fixed at `hour:00` UTC on 2024-06-01
    pub fn at_hour(hour: u32) -> Self {
        let clock = Self {
            now: Mutex::new(None),
        };
        clock.set_hour(hour);
        clock
    }

    pub fn set(&self, now: DateTime<FixedOffset>) {
        *self.now.lock() = Some(now);
    }

    /// Keep the current date but move to `hour:00`
    pub fn set_hour(&self, hour: u32) {
        let mut guard = self.now.lock();
        let date = guard
            .map(|now| now.date_naive())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default());
        let naive = date.and_hms_opt(hour % 24, 0, 0).unwrap_or_default();
        *guard = Some(Utc.from_utc_datetime(&naive).fixed_offset());
    }

    /// Subsequent reads fail until a time is set again
    pub fn make_unavailable(&self) {
        *self.now.lock() = None;
    }
}

impl WallClock for ManualClock {
    fn now(&self) -> SceneResult<DateTime<FixedOffset>> {
        self.now
            .lock()
            .ok_or_else(|| SceneError::ClockUnavailable("manual clock has no time set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::at_hour(6);
        assert_eq!(clock.now().unwrap().hour(), 6);

        clock.set_hour(21);
        assert_eq!(clock.now().unwrap().hour(), 21);

        clock.make_unavailable();
        assert!(matches!(clock.now(), Err(SceneError::ClockUnavailable(_))));

        clock.set_hour(9);
        assert_eq!(clock.now().unwrap().hour(), 9);
    }

    #[test]
    fn test_shared_clock() {
        let clock = Arc::new(ManualClock::at_hour(3));
        let boxed: Box<dyn WallClock> = Box::new(clock.clone());
        clock.set_hour(14);
        assert_eq!(boxed.now().unwrap().hour(), 14);
    }

    #[test]
    fn test_system_clock_reads() {
        assert!(SystemClock.now().is_ok());
    }
}
