//! Terminal UI — application state, main entry point, and event loop.

pub mod event;
pub mod theme;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::event::{poll as ct_poll, read as ct_read, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use self::theme::Theme;
use crate::config::Config;
use crate::controller::DispatchCtrl;
use crate::model::item::DispatchItem;

/// Layout arrangement for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Only the item list is visible.
    ListOnly,
    /// List on the left, item detail on the right.
    Split,
}

/// Complete TUI state.
pub struct App {
    /// Controller whose exposed state the dashboard renders.
    pub ctrl: DispatchCtrl,

    // ── Navigation ────────────────────────────
    /// Index of the selected item.
    pub selected: usize,

    // ── UI state ──────────────────────────────
    /// Layout mode.
    pub layout: LayoutMode,
    /// Help popup visible?
    pub show_help: bool,
    /// Active color theme.
    pub theme: Theme,
    /// Show the owner column in the item list?
    pub show_owner_column: bool,
    /// Configured column widths (importance, kind, owner).
    pub column_widths: (u16, u16, u16),

    // ── Lifecycle ─────────────────────────────
    pub should_quit: bool,
    /// Transient status message and the instant it was set.
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create the TUI state around an existing controller.
    pub fn new(ctrl: DispatchCtrl, config: &Config) -> Self {
        Self {
            ctrl,
            selected: 0,
            layout: LayoutMode::ListOnly,
            show_help: false,
            theme: Theme::from_name(&config.display.theme),
            show_owner_column: config.display.show_owner_column,
            column_widths: (
                config.columns.importance_width,
                config.columns.kind_width,
                config.columns.owner_width,
            ),
            should_quit: false,
            status_message: None,
        }
    }

    /// Number of items in the list.
    pub fn item_count(&self) -> usize {
        self.ctrl.items().len()
    }

    /// The currently selected [`DispatchItem`], if any.
    pub fn current_item(&self) -> Option<&DispatchItem> {
        self.ctrl.items().get(self.selected)
    }

    /// Move the selection down one row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.item_count() {
            self.selected += 1;
        }
    }

    /// Move the selection up one row.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.selected = self.item_count().saturating_sub(1);
    }

    /// Trigger a mail fetch and report the outcome in the status bar.
    ///
    /// The item list never changes as a result of a fetch; the status line
    /// reflects only whether the collaborator call succeeded.
    pub fn trigger_fetch(&mut self) {
        match self.ctrl.get_mail() {
            Ok(()) => self.set_status("Mail fetch triggered"),
            Err(e) => self.set_status(&format!("{e}")),
        }
    }

    /// Set a transient status message.
    pub fn set_status(&mut self, msg: &str) {
        self.status_message = Some((msg.to_string(), std::time::Instant::now()));
    }

    /// Called every tick: clears expired status messages.
    pub fn tick(&mut self) {
        if let Some((_, when)) = &self.status_message {
            if when.elapsed().as_secs() >= 5 {
                self.status_message = None;
            }
        }
    }
}

/// Run the TUI dashboard. Blocks until the user quits.
pub fn run_tui(ctrl: DispatchCtrl, config: &Config) -> anyhow::Result<()> {
    // Setup terminal (alternate screen)
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the event loop
    let app = App::new(ctrl, config);
    let result = run_event_loop(&mut terminal, app);

    // Restore terminal (always, even on error)
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop: render → poll → handle → repeat.
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        // Render
        terminal.draw(|frame| {
            ui::render(frame, &mut app);
        })?;

        // Poll for events
        if ct_poll(tick_rate)? {
            if let Event::Key(key) = ct_read()? {
                event::handle_key_event(&mut app, key)?;
            }
        }

        // Periodic housekeeping
        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::stub::StubMailService;

    fn test_app() -> App {
        let ctrl = DispatchCtrl::new(Box::new(StubMailService));
        App::new(ctrl, &Config::default())
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = test_app();
        assert_eq!(app.selected, 0);
        app.select_prev();
        assert_eq!(app.selected, 0);
        app.select_next();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 2, "selection must stop at the last item");
        app.select_last();
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_trigger_fetch_sets_status_and_keeps_items() {
        let mut app = test_app();
        let before: Vec<String> = app.ctrl.items().iter().map(|i| i.title.clone()).collect();
        app.trigger_fetch();
        assert!(app.status_message.is_some());
        let after: Vec<String> = app.ctrl.items().iter().map(|i| i.title.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_current_item_follows_selection() {
        let mut app = test_app();
        app.select_next();
        assert_eq!(app.current_item().expect("item").title, "Read this!");
    }
}
