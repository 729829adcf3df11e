//! TUI theme and styles

use ratatui::style::{Color, Modifier, Style};

use crate::core::content::Tier;

/// Application color theme
pub struct Theme;

impl Theme {
    /// Primary accent color (teal)
    pub const PRIMARY: Color = Color::Rgb(25, 114, 101);

    /// Muted text color
    pub const MUTED: Color = Color::DarkGray;

    /// Text drawn on pale tier backgrounds
    pub const ON_PALE: Color = Color::Rgb(31, 41, 55);

    /// Page heading style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active tab style
    pub fn tab_active() -> Style {
        Style::default()
            .bg(Self::PRIMARY)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive tab style
    pub fn tab_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Border of the content card
    pub fn card_border() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Tier section heading
    pub fn section_heading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Tree root header
    pub fn tree_root() -> Style {
        Style::default()
            .bg(Self::PRIMARY)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    /// Vertical guide beside expanded children
    pub fn tree_guide() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Tree header under the cursor
    pub fn tree_cursor() -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Status bar style
    pub fn status_bar() -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Muted text style
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED)
    }

    /// Pale background for an item row of the given tier
    pub fn tier_background(tier: Tier) -> Color {
        match tier {
            Tier::Junior => Color::Rgb(209, 250, 229),
            Tier::Mid => Color::Rgb(254, 249, 195),
            Tier::Senior => Color::Rgb(254, 226, 226),
        }
    }

    /// Dot color for a tree leaf of the given tier
    pub fn tier_dot(tier: Tier) -> Color {
        match tier {
            Tier::Junior => Color::Rgb(52, 211, 153),
            Tier::Mid => Color::Rgb(250, 204, 21),
            Tier::Senior => Color::Rgb(248, 113, 113),
        }
    }

    /// Item row style for a tier section
    pub fn tier_item(tier: Tier) -> Style {
        Style::default()
            .bg(Self::tier_background(tier))
            .fg(Self::ON_PALE)
    }

    /// Glyph shown before a tier heading
    pub fn tier_glyph(tier: Tier) -> &'static str {
        match tier {
            Tier::Junior => "★",
            Tier::Mid => "◆",
            Tier::Senior => "■",
        }
    }
}
