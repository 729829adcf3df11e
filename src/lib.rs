//! roadmap-rs - A TUI viewer for the Kelaasor frontend development roadmap
//!
//! This library provides both CLI and TUI interfaces over a fixed roadmap of
//! learning topics grouped by category and split into junior, mid and senior
//! tiers.

pub mod cli;
pub mod core;
pub mod error;
pub mod tui;

pub use error::{Result, RoadmapError};
