//! Lumen Core
//!
//! Shared utilities for the Lumen overlay crates: logging setup, profiling
//! hooks, math re-exports and small geometry types.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
