//! Watchface UI: face state, text formatting and the digital face

use chrono::NaiveDateTime;

pub mod format;

mod digital;

pub use digital::DigitalFace;

/// Battery reading as the face consumes it
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryInfo {
    /// Charge in percent (0–100)
    pub percent: u8,
    /// Charging state
    pub charging: bool,
}

/// Everything the face needs for one repaint
#[derive(Clone, Copy, Debug)]
pub struct FaceState {
    pub time: NaiveDateTime,
    pub battery: BatteryInfo,
}
