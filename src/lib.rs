//! Portable core of the tickface firmware.
//!
//! Text formatting, the digital face and the minute arithmetic live here,
//! free of any hardware types. The crate builds for the watch (`no_std`)
//! and for desktop hosts, so the face can be driven by the simulator
//! binary and exercised with plain `cargo test`.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod ui;
