//! Terminal User Interface module
//!
//! This module contains the ratatui-based roadmap viewer: a tab strip with
//! one pane per category plus a collapsible summary tree.

pub mod app;
pub mod event;
pub mod tabs;
pub mod theme;
pub mod tree;
pub mod ui;
pub mod widgets;

pub use app::App;
