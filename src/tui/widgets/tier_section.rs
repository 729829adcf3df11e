//! One tier of a category: a heading and its item rows

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::core::content::Tier;
use crate::tui::theme::Theme;

/// Heading plus one tier-colored row per item, in input order
#[derive(Debug, Clone, Copy)]
pub struct TierSection<'a> {
    title: &'a str,
    items: &'a [&'a str],
    tier: Tier,
    show_icons: bool,
    scroll: u16,
}

impl<'a> TierSection<'a> {
    pub fn new(title: &'a str, items: &'a [&'a str], tier: Tier) -> Self {
        Self {
            title,
            items,
            tier,
            show_icons: true,
            scroll: 0,
        }
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    /// Skip this many rows from the top when rendering
    pub fn scroll(mut self, rows: u16) -> Self {
        self.scroll = rows;
        self
    }

    /// Rows needed to draw the section, including the trailing gap
    pub fn height(&self) -> u16 {
        (self.items.len() + 2) as u16
    }

    /// Styled lines of the section
    fn lines(&self) -> Vec<Line<'a>> {
        let heading = if self.show_icons {
            Line::from(vec![
                Span::styled(Theme::tier_glyph(self.tier), Theme::section_heading()),
                Span::raw(" "),
                Span::styled(self.title, Theme::section_heading()),
            ])
        } else {
            Line::from(Span::styled(self.title, Theme::section_heading()))
        };

        let mut lines = Vec::with_capacity(self.items.len() + 2);
        lines.push(heading);

        let marker = if self.show_icons { " ✓ " } else { "   " };
        for item in self.items {
            lines.push(
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Theme::PRIMARY)),
                    Span::raw(*item),
                ])
                .style(Theme::tier_item(self.tier)),
            );
        }

        lines.push(Line::from(""));
        lines
    }
}

impl Widget for TierSection<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
