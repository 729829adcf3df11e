//! Core functionality for roadmap-rs
//!
//! This module contains shared logic used by both the TUI and the CLI:
//! - The static roadmap content model
//! - Plain text and JSON rendering of the content
//! - Application configuration

pub mod config;
pub mod content;
pub mod outline;

pub use config::Config;
pub use content::{Category, Tier};
