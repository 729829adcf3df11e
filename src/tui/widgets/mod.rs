//! Custom widgets for the roadmap view

pub mod tier_section;
pub mod tree_view;

pub use tier_section::TierSection;
pub use tree_view::TreeView;
