//! Full-frame render tests using ratatui TestBackend
//!
//! These drive the App through key presses and check what ends up on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use roadmap_rs::core::content::{self, Tier};
use roadmap_rs::tui::tree::NodeId;
use roadmap_rs::tui::{ui, App};

// =============================================================================
// HELPERS
// =============================================================================

/// Render the app and return one string per screen row
fn render_rows(app: &App) -> Vec<String> {
    render_rows_sized(app, 100, 100)
}

fn render_rows_sized(app: &App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn screen_contains(rows: &[String], text: &str) -> bool {
    rows.iter().any(|row| row.contains(text))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

// =============================================================================
// SUMMARY TREE
// =============================================================================

#[test]
fn test_initial_render_shows_full_tree() {
    let app = App::new();
    let rows = render_rows(&app);

    assert!(screen_contains(&rows, "Kelaasor Frontend Development Roadmap"));
    assert!(screen_contains(&rows, "▾ Frontend Development Roadmap"));

    for category in content::categories() {
        assert!(screen_contains(&rows, &format!("▾ {}", category.title)));
        for tier in Tier::all() {
            for item in category.items(*tier) {
                assert!(screen_contains(&rows, item), "missing item {}", item);
            }
        }
    }

    // No tier section check marks on the summary tab
    assert!(!screen_contains(&rows, "✓"));
}

#[test]
fn test_collapsing_a_category_hides_only_its_items() {
    let mut app = App::new();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(!app.tree.is_expanded(NodeId::Category("core")));

    let rows = render_rows(&app);
    assert!(screen_contains(&rows, "▸ Core Technologies"));
    assert!(!screen_contains(&rows, "Basic Tailwind CSS"));
    assert!(screen_contains(&rows, "Basic React concepts and hooks"));
}

#[test]
fn test_toggle_twice_restores_screen() {
    let mut app = App::new();
    let before = render_rows(&app);

    press(&mut app, KeyCode::Enter);
    let collapsed = render_rows(&app);
    assert_ne!(before, collapsed);
    assert!(screen_contains(&collapsed, "▸ Frontend Development Roadmap"));
    assert!(!screen_contains(&collapsed, "HTML5 fundamentals and semantic markup"));

    press(&mut app, KeyCode::Enter);
    assert_eq!(render_rows(&app), before);
}

// =============================================================================
// CATEGORY PANES
// =============================================================================

#[test]
fn test_each_category_shows_only_its_tiers() {
    for category in content::categories() {
        let mut app = App::new();
        app.select_tab(category.key);
        let rows = render_rows(&app);

        assert!(!screen_contains(&rows, "▾ Frontend Development Roadmap"));
        assert!(!screen_contains(&rows, "▾"));

        for tier in Tier::all() {
            assert!(screen_contains(&rows, tier.title()));
        }

        let own: Vec<&str> = Tier::all()
            .iter()
            .flat_map(|t| category.items(*t).iter().copied())
            .collect();
        for item in &own {
            assert!(screen_contains(&rows, &format!("✓ {}", item)));
        }

        for other in content::categories().iter().filter(|c| c.key != category.key) {
            for tier in Tier::all() {
                for item in other.items(*tier) {
                    if !own.contains(item) {
                        assert!(
                            !screen_contains(&rows, item),
                            "{} pane shows '{}'",
                            category.key,
                            item
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_testing_tab_scenario() {
    let mut app = App::new();
    app.select_tab("testing");
    let rows = render_rows(&app);

    let junior = rows.iter().position(|r| r.contains("Junior Level")).unwrap();
    assert!(rows[junior + 1].contains("✓ Basic unit testing with Jest"));
    assert!(rows[junior + 2].contains("✓ React Testing Library basics"));
    assert!(rows[junior + 3].contains("✓ Understanding test coverage"));

    let mid = rows.iter().position(|r| r.contains("Mid Level")).unwrap();
    assert!(rows[mid + 1].contains("Integration testing"));
    let senior = rows.iter().position(|r| r.contains("Senior Level")).unwrap();
    assert!(rows[senior + 4].contains("Accessibility testing"));
    assert!(junior < mid && mid < senior);
}

#[test]
fn test_scrolled_pane_stops_at_last_item() {
    let mut app = App::new();
    app.select_tab("soft");
    for _ in 0..40 {
        press(&mut app, KeyCode::Down);
    }

    // 15 rows leave 8 inside the card
    let rows = render_rows_sized(&app, 100, 15);
    assert!(screen_contains(&rows, "Senior Level"));
    assert!(screen_contains(&rows, "✓ Leadership skills"));
    assert!(screen_contains(&rows, "✓ Stakeholder management"));
    assert!(!screen_contains(&rows, "Basic time management"));
    assert!(!screen_contains(&rows, "Mentoring juniors"));
}

#[test]
fn test_switching_back_renders_identically() {
    let mut app = App::new();
    app.select_tab("frameworks");
    let first = render_rows(&app);

    app.select_tab("tools");
    assert_ne!(render_rows(&app), first);

    app.select_tab("frameworks");
    assert_eq!(render_rows(&app), first);
}

#[test]
fn test_summary_tab_after_category_shows_tree_again() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('6'));
    assert_eq!(app.tabs.active_key(), "soft");
    press(&mut app, KeyCode::Char('0'));

    let rows = render_rows(&app);
    assert!(screen_contains(&rows, "▾ Frontend Development Roadmap"));
    assert!(!screen_contains(&rows, "✓"));
}

#[test]
fn test_help_overlay() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('?'));
    let rows = render_rows(&app);
    assert!(screen_contains(&rows, "Help - Roadmap"));
    assert!(screen_contains(&rows, "Expand or collapse node"));
}

#[test]
fn test_help_overlay_on_very_wide_terminal() {
    let mut app = App::new();
    press(&mut app, KeyCode::Char('?'));
    let rows = render_rows_sized(&app, 1200, 1200);
    assert!(screen_contains(&rows, "Help - Roadmap"));
}
