//! Core infrastructure
//!
//! Shared components used by the platform layer, the drivers and the binary.

pub mod logging;
