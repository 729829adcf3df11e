//! Main TUI application state and logic

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::KeyEvent;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use ratatui::Terminal;

use crate::core::config::Config;
use crate::core::content::{self, Category};
use crate::error::{Result, RoadmapError};
use crate::tui::event::{action_for, Action, AppEvent, EventHandler};
use crate::tui::tabs::TabSelection;
use crate::tui::tree::TreeState;
use crate::tui::ui;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Active tab
    pub tabs: TabSelection,
    /// Expand/collapse state of the summary tree
    pub tree: TreeState,
    /// Scroll position of a category pane
    pub pane_scroll: u16,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Viewer settings
    pub config: Config,
}

impl App {
    /// Create a new app instance on the summary tab with every node expanded
    pub fn new() -> Self {
        Self {
            running: true,
            tabs: TabSelection::new(),
            tree: TreeState::new(),
            pane_scroll: 0,
            show_help: false,
            config: Config::default(),
        }
    }

    /// Initialize the app with loaded settings
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Category shown by the active tab, `None` on the summary tab
    pub fn active_category(&self) -> Option<&'static Category> {
        content::find(self.tabs.active_key())
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().map_err(|e| RoadmapError::Terminal(e.to_string()))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| RoadmapError::Terminal(e.to_string()))?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(|e| RoadmapError::Terminal(e.to_string()))?;
        Ok(terminal)
    }

    /// Restore terminal to normal state
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().map_err(|e| RoadmapError::Terminal(e.to_string()))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| RoadmapError::Terminal(e.to_string()))?;
        terminal
            .show_cursor()
            .map_err(|e| RoadmapError::Terminal(e.to_string()))?;
        Ok(())
    }

    /// Run the TUI application
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let mut events = EventHandler::new(Duration::from_millis(self.config.tick_rate_ms));

        let result = self.event_loop(&mut terminal, &mut events).await;

        // Restore even if drawing failed
        Self::restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        events: &mut EventHandler,
    ) -> Result<()> {
        while self.running {
            terminal
                .draw(|frame| ui::render(frame, self))
                .map_err(|e| RoadmapError::Terminal(e.to_string()))?;

            match events.next().await {
                Some(AppEvent::Key(key)) => self.handle_key_event(key),
                // Resize and tick only need a redraw
                Some(AppEvent::Resize(_, _)) | Some(AppEvent::Tick) => {}
                None => self.quit(),
            }
        }
        Ok(())
    }

    /// Apply one key press to the UI state
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // If help is shown, any key dismisses it
        if self.show_help {
            self.show_help = false;
            return;
        }

        let Some(action) = action_for(&key) else {
            return;
        };

        match action {
            Action::Quit => self.quit(),
            Action::ShowHelp => self.show_help = true,
            Action::NextTab => {
                if self.tabs.next() {
                    self.on_tab_changed();
                }
            }
            Action::PreviousTab => {
                if self.tabs.previous() {
                    self.on_tab_changed();
                }
            }
            Action::SelectTab(index) => {
                if self.tabs.select_index(index) {
                    self.on_tab_changed();
                }
            }
            Action::Up => {
                if self.tabs.is_summary() {
                    self.tree.cursor_up();
                } else {
                    self.pane_scroll = self.pane_scroll.saturating_sub(1);
                }
            }
            Action::Down => {
                if self.tabs.is_summary() {
                    self.tree.cursor_down();
                } else {
                    self.pane_scroll = self.pane_scroll.saturating_add(1);
                }
            }
            Action::Toggle => {
                if self.tabs.is_summary() {
                    self.tree.toggle_selected();
                }
            }
        }
    }

    /// Select a tab by key
    pub fn select_tab(&mut self, key: &str) {
        if self.tabs.select(key) {
            self.on_tab_changed();
        }
    }

    fn on_tab_changed(&mut self) {
        self.pane_scroll = 0;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
