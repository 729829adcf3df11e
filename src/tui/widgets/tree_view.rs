//! Collapsible summary tree widget

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::tui::theme::Theme;
use crate::tui::tree::TreeRow;

/// Draws visible tree rows, scrolled so the cursor row stays on screen
#[derive(Debug, Clone, Copy)]
pub struct TreeView<'a> {
    rows: &'a [TreeRow],
    cursor_row: usize,
    indent_width: u16,
    show_icons: bool,
}

impl<'a> TreeView<'a> {
    pub fn new(rows: &'a [TreeRow]) -> Self {
        Self {
            rows,
            cursor_row: 0,
            indent_width: 2,
            show_icons: true,
        }
    }

    pub fn cursor_row(mut self, row: usize) -> Self {
        self.cursor_row = row;
        self
    }

    pub fn indent_width(mut self, width: u16) -> Self {
        self.indent_width = width;
        self
    }

    pub fn show_icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    /// First row to draw for a viewport of the given height
    pub fn scroll_offset(&self, height: u16) -> usize {
        let height = height.max(1) as usize;
        (self.cursor_row + 1).saturating_sub(height)
    }

    /// Leading cells of a row: one guide per expanded ancestor, each
    /// `indent_width` cells wide
    fn indent(&self, depth: u16) -> String {
        let width = self.indent_width as usize;
        if width == 0 {
            return String::new();
        }
        let level = format!("│{}", " ".repeat(width - 1));
        level.repeat(depth as usize)
    }

    fn line(&self, index: usize, row: &'a TreeRow) -> Line<'a> {
        let indent = Span::styled(self.indent(row.depth()), Theme::tree_guide());

        match row {
            TreeRow::Header {
                title,
                expanded,
                depth,
                ..
            } => {
                let glyph = if *expanded { "▾ " } else { "▸ " };
                let mut style = if *depth == 0 {
                    Theme::tree_root()
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                if index == self.cursor_row {
                    style = style.patch(Theme::tree_cursor());
                }
                Line::from(vec![
                    indent,
                    Span::styled(glyph, style),
                    Span::styled(*title, style),
                ])
            }
            TreeRow::Leaf { text, tier, .. } => {
                let dot = if self.show_icons { "● " } else { "- " };
                Line::from(vec![
                    indent,
                    Span::styled(dot, Style::default().fg(Theme::tier_dot(*tier))),
                    Span::styled(*text, Theme::muted()),
                ])
            }
        }
    }
}

impl Widget for TreeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = self.scroll_offset(area.height);
        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(area.height as usize)
            .map(|(i, row)| self.line(i, row))
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::Tier;
    use crate::tui::tree::{NodeId, TreeState};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_headers_and_dots() {
        let rows = TreeState::new().visible_rows();
        let area = Rect::new(0, 0, 60, 5);
        let mut buf = Buffer::empty(area);
        TreeView::new(&rows).render(area, &mut buf);

        assert!(row_text(&buf, 0).starts_with("▾ Frontend Development Roadmap"));
        assert!(row_text(&buf, 1).starts_with("│ ▾ Core Technologies"));
        assert!(row_text(&buf, 2).starts_with("│ │ ▾ Junior Level"));
        assert!(row_text(&buf, 3).starts_with("│ │ │ ● HTML5 fundamentals"));
        assert_eq!(buf[(6, 3)].fg, Theme::tier_dot(Tier::Junior));
    }

    #[test]
    fn test_collapsed_glyph() {
        let mut tree = TreeState::new();
        tree.toggle(NodeId::Category("core"));
        let rows = tree.visible_rows();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        TreeView::new(&rows).render(area, &mut buf);

        assert!(row_text(&buf, 1).starts_with("│ ▸ Core Technologies"));
        assert!(row_text(&buf, 2).starts_with("│ ▾ Frameworks and Libraries"));
    }

    #[test]
    fn test_guides_follow_indent_width() {
        let rows = TreeState::new().visible_rows();
        let area = Rect::new(0, 0, 60, 4);

        let mut buf = Buffer::empty(area);
        TreeView::new(&rows).indent_width(4).render(area, &mut buf);
        assert!(row_text(&buf, 3).starts_with("│   │   │   ● HTML5"));
        assert_eq!(buf[(4, 3)].fg, Theme::MUTED);

        let mut buf = Buffer::empty(area);
        TreeView::new(&rows).indent_width(0).render(area, &mut buf);
        assert!(row_text(&buf, 3).starts_with("● HTML5"));
    }

    #[test]
    fn test_wide_indent_does_not_overflow() {
        let rows = vec![TreeRow::Leaf {
            text: "deep",
            tier: Tier::Senior,
            depth: 3,
        }];
        let view = TreeView::new(&rows).indent_width(30000);
        assert_eq!(view.indent(3).chars().count(), 90000);

        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "│");
    }

    #[test]
    fn test_scroll_keeps_cursor_visible() {
        let rows = TreeState::new().visible_rows();
        let view = TreeView::new(&rows).cursor_row(30);
        assert_eq!(view.scroll_offset(10), 21);
        assert_eq!(view.scroll_offset(40), 0);
    }
}
