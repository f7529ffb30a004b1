//! # Domain Models
//!
//! Constants and configuration types shared by the Skalable crates.
//! Only `serde` is allowed here: no I/O, no rendering, no logging.

pub mod config;
pub mod constants;
