//! Main UI renderer

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs};

use crate::core::content::{self, Category, Tier, ROADMAP_TITLE};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::widgets::{TierSection, TreeView};

/// Render the UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Tab strip
            Constraint::Min(0),    // Content card
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_tabs(frame, chunks[1], app);
    render_content(frame, chunks[2], app);
    render_status_bar(frame, chunks[3], app);

    // Render help overlay on top if active
    if app.show_help {
        render_help_overlay(frame);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(ROADMAP_TITLE)
        .style(Theme::title())
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Render the tab strip, summary first
fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = app
        .tabs
        .keys()
        .iter()
        .enumerate()
        .map(|(i, &key)| {
            let label = content::tab_label(key).unwrap_or(key);
            Line::from(format!(" {} {} ", i, label))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tabs.active_index())
        .style(Theme::tab_inactive())
        .highlight_style(Theme::tab_active())
        .divider(" ")
        .block(Block::default().borders(Borders::BOTTOM).border_style(Theme::muted()));

    frame.render_widget(tabs, area);
}

/// Render the single visible pane inside the card
fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::card_border());
    let inner = card.inner(area);
    frame.render_widget(card, area);

    match app.active_category() {
        None => render_summary_tree(frame, inner, app),
        Some(category) => render_category(frame, inner, app, category),
    }
}

fn render_summary_tree(frame: &mut Frame, area: Rect, app: &App) {
    let rows = app.tree.visible_rows();
    let view = TreeView::new(&rows)
        .cursor_row(app.tree.cursor_row())
        .indent_width(app.config.indent_width)
        .show_icons(app.config.show_icons);
    frame.render_widget(view, area);
}

/// Junior, mid and senior sections stacked in one scrollable pane
fn render_category(frame: &mut Frame, area: Rect, app: &App, category: &Category) {
    let sections: Vec<TierSection> = Tier::all()
        .iter()
        .map(|tier| {
            TierSection::new(tier.title(), category.items(*tier), *tier)
                .show_icons(app.config.show_icons)
        })
        .collect();

    let total: u16 = sections.iter().map(TierSection::height).sum();
    let mut skip = app.pane_scroll.min(total.saturating_sub(area.height));
    let mut y = area.y;

    for section in sections {
        let height = section.height();
        if skip >= height {
            skip -= height;
            continue;
        }

        let visible = (height - skip).min(area.bottom().saturating_sub(y));
        if visible == 0 {
            break;
        }
        frame.render_widget(
            section.scroll(skip),
            Rect::new(area.x, y, area.width, visible),
        );
        y += visible;
        skip = 0;
    }
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.tabs.is_summary() {
        "j/k move │ Enter toggle"
    } else {
        "j/k scroll"
    };
    let status_text = format!(" Tab/←→ switch tabs │ {} │ ? help │ q quit ", hint);

    let status = Paragraph::new(status_text).style(Theme::status_bar());
    frame.render_widget(status, area);
}

/// Render the help overlay
fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Calculate centered popup area (60% width, 70% height)
    let popup_width = ((area.width as u32 * 60 / 100) as u16).min(50);
    let popup_height = ((area.height as u32 * 70 / 100) as u16).min(12);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let text: Vec<Line> = help_content()
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("  {:14}", key), Style::default().fg(Theme::PRIMARY)),
                Span::raw(desc),
            ])
        })
        .collect();

    let help = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Help - Roadmap ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help, popup_area);
}

fn help_content() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab / → / l", "Next tab"),
        ("S-Tab / ← / h", "Previous tab"),
        ("0-6", "Jump to tab"),
        ("j / ↓", "Move down / scroll"),
        ("k / ↑", "Move up / scroll"),
        ("Enter / Space", "Expand or collapse node"),
        ("q / Esc", "Quit"),
        ("?", "Show this help"),
    ]
}
