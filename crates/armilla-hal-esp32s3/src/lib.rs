#![no_std]

//! ESP32-S3 board adapters for the armilla core.
//!
//! Every driver speaks `embedded-hal` at its seam; [`board::WatchBoard`]
//! aggregates them into the single [`armilla_core::hal::Board`] contract the
//! manager drives.

pub mod board;
pub mod input;
pub mod platform;
