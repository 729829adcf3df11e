//! CLI module for roadmap-rs
//!
//! This module contains all CLI command definitions and handlers using clap.

pub mod commands;
pub mod config;
pub mod show;

pub use commands::{Cli, Commands};
