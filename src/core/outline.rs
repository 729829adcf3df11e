//! Plain text and JSON rendering of roadmap content for CLI mode

use serde::Serialize;

use crate::core::content::{self, Category, Tier, TREE_ROOT_TITLE};
use crate::error::{Result, RoadmapError};

/// One entry of the tab strip
#[derive(Debug, Clone, Serialize)]
pub struct TabEntry {
    pub key: &'static str,
    pub title: &'static str,
}

/// All tabs in strip order
pub fn tab_entries() -> Vec<TabEntry> {
    content::tab_keys()
        .into_iter()
        .filter_map(|key| content::tab_label(key).map(|title| TabEntry { key, title }))
        .collect()
}

/// Resolve a category key entered by the user
pub fn resolve_category(key: &str) -> Result<&'static Category> {
    content::find(key).ok_or_else(|| RoadmapError::UnknownCategory {
        key: key.to_string(),
        available: content::category_keys(),
    })
}

/// Tab list as aligned text
pub fn tabs_text() -> String {
    let entries = tab_entries();
    let width = entries.iter().map(|e| e.key.len()).max().unwrap_or(0);

    entries
        .iter()
        .map(|e| format!("{:width$}  {}\n", e.key, e.title, width = width))
        .collect()
}

/// Tab list as pretty JSON
pub fn tabs_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&tab_entries())?)
}

/// One category as text: a heading, then each tier with its items in order
pub fn category_text(category: &Category, show_icons: bool) -> String {
    let mut out = format!("{}\n", category.title);

    for tier in Tier::all() {
        out.push('\n');
        out.push_str(tier.title());
        out.push('\n');
        let marker = if show_icons { "✓" } else { "-" };
        for item in category.items(*tier) {
            out.push_str(&format!("  {} {}\n", marker, item));
        }
    }

    out
}

/// One category as pretty JSON
pub fn category_json(category: &Category) -> Result<String> {
    Ok(serde_json::to_string_pretty(category)?)
}

/// The fully expanded summary tree as an ASCII outline
pub fn tree_text(indent_width: usize) -> String {
    let pad = |depth: usize| " ".repeat(depth * indent_width);
    let mut out = format!("{}\n", TREE_ROOT_TITLE);

    for category in content::categories() {
        out.push_str(&format!("{}{}\n", pad(1), category.title));
        for tier in Tier::all() {
            out.push_str(&format!("{}{}\n", pad(2), tier.title()));
            for item in category.items(*tier) {
                out.push_str(&format!("{}• {}\n", pad(3), item));
            }
        }
    }

    out
}
