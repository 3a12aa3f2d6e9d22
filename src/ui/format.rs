//! Text formatting for the face labels
//!
//! All three routines write into a caller-provided buffer and hand back the
//! written slice. A 16 byte buffer fits every possible output; the fallback
//! literals only show up if a caller passes something smaller.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::clock::ClockStyle;

/// Format a time as `H:MM`, hour without a leading zero.
///
/// `H24` keeps hours 0–23 (`15:07` stays `"15:07"`, `05:07` becomes
/// `"5:07"`); `H12` wraps to 1–12 with no AM/PM marker (`15:07` becomes
/// `"3:07"`, midnight `"12:05"`).
pub fn time_text<'a>(buf: &'a mut [u8], time: NaiveTime, style: ClockStyle) -> &'a str {
    let hour = match style {
        ClockStyle::H12 => time.hour12().1,
        ClockStyle::H24 => time.hour(),
    };
    format_no_std::show(buf, format_args!("{}:{:02}", hour, time.minute())).unwrap_or("-:--")
}

/// Format a date as `D Mon`, day without a leading zero (`"5 Sep"`).
pub fn date_text<'a>(buf: &'a mut [u8], date: NaiveDate) -> &'a str {
    format_no_std::show(
        buf,
        format_args!("{} {}", date.day(), month_abbrev(date.month0())),
    )
    .unwrap_or("-")
}

/// Format a battery charge as `N%`.
pub fn battery_text<'a>(buf: &'a mut [u8], percent: u8) -> &'a str {
    format_no_std::show(buf, format_args!("{}%", percent)).unwrap_or("-%")
}

/// Three-letter English month name, indexed like chrono's `month0`
fn month_abbrev(month0: u32) -> &'static str {
    match month0 {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        _ => "Dec",
    }
}
