//! Clock preferences and minute arithmetic

use chrono::{NaiveTime, Timelike};

/// Hour display style of the time label
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClockStyle {
    /// Hours 1–12, no AM/PM marker
    H12,
    /// Hours 0–23
    H24,
}

const MINUTE_MICROS: u64 = 60_000_000;

/// Microseconds from `time` to the start of the next minute.
///
/// Exactly on a boundary this returns a full minute, since the tick for the
/// current minute has just fired. The result never reaches 0 (floored at
/// 1 ms), so a sleep scheduled from it cannot busy-loop even for chrono's
/// leap second representation.
pub fn micros_until_next_minute(time: NaiveTime) -> u64 {
    let into_minute = time.second() as u64 * 1_000_000 + time.nanosecond() as u64 / 1_000;
    if into_minute == 0 {
        return MINUTE_MICROS;
    }
    MINUTE_MICROS.saturating_sub(into_minute).max(1_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_minute_on_exact_boundary() {
        let t = NaiveTime::from_hms_opt(12, 5, 0).unwrap();
        assert_eq!(micros_until_next_minute(t), 60_000_000);
    }

    #[test]
    fn half_minute_left_at_thirty_seconds() {
        let t = NaiveTime::from_hms_opt(12, 5, 30).unwrap();
        assert_eq!(micros_until_next_minute(t), 30_000_000);
    }

    #[test]
    fn submillisecond_remainder_is_floored() {
        let t = NaiveTime::from_hms_milli_opt(12, 5, 59, 999).unwrap();
        assert_eq!(micros_until_next_minute(t), 1_000);
    }

    #[test]
    fn leap_second_cannot_underflow() {
        // chrono encodes a leap second as nanosecond >= 1_000_000_000.
        let t = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(micros_until_next_minute(t), 1_000);
    }
}
