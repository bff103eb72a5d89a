//! Moscow wall clock and the date snapshots stamped onto records.
//!
//! The clock is decorative: it carries no state and nothing depends on it.
//! Formatting is split from time acquisition so it can be tested against a
//! fixed instant.

use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta, Utc};

/// Refresh cadence of the clock line.
pub const TICK: Duration = Duration::from_secs(1);

const MSK_OFFSET_HOURS: i64 = 3;

pub struct MoscowClock;

impl MoscowClock {
    /// `DD.MM.YYYY | HH:MM:SS MSK` for the given instant.
    pub fn render(now: DateTime<Utc>) -> String {
        let msk = now + TimeDelta::hours(MSK_OFFSET_HOURS);
        format!("{} MSK", msk.format("%d.%m.%Y | %H:%M:%S"))
    }

    pub fn now_line() -> String {
        Self::render(Utc::now())
    }
}

/// Date-and-time snapshot stamped onto news entries at publication.
pub(crate) fn event_timestamp() -> String {
    Local::now().format("%d.%m.%Y, %H:%M:%S").to_string()
}

/// Date-only snapshot stamped onto listings at creation.
pub(crate) fn event_date() -> String {
    Local::now().format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_moscow_offset_line() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 30, 21, 5, 9).unwrap();
        assert_eq!(MoscowClock::render(instant), "31.08.2026 | 00:05:09 MSK");
    }

    #[test]
    fn tick_is_one_second() {
        assert_eq!(TICK, Duration::from_secs(1));
    }
}
