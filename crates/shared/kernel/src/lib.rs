//! Kernel services shared by the Skalable binaries.
//!
//! Re-exports the domain crate so callers depend on one path.

pub mod config;

pub use skalable_domain as domain;
