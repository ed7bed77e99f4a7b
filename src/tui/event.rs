//! Keyboard and input event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, LayoutMode};

/// Process a key event and update the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> anyhow::Result<()> {
    // ── Popup handling (captures all keys) ────────────────
    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => app.show_help = false,
            _ => {}
        }
        return Ok(());
    }

    match (key.modifiers, key.code) {
        // Ctrl+C always quits
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Trigger a mail fetch on the collaborator
        (_, KeyCode::Char('g')) => app.trigger_fetch(),

        // Layout shortcuts
        (_, KeyCode::Char('1')) => app.layout = LayoutMode::ListOnly,
        (_, KeyCode::Char('2')) | (_, KeyCode::Enter) => app.layout = LayoutMode::Split,
        (_, KeyCode::Esc) => app.layout = LayoutMode::ListOnly,

        // Navigation
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => app.select_next(),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => app.select_prev(),
        (_, KeyCode::Home) => app.selected = 0,
        (_, KeyCode::End) => app.select_last(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::controller::DispatchCtrl;
    use crate::service::stub::StubMailService;

    fn test_app() -> App {
        let ctrl = DispatchCtrl::new(Box::new(StubMailService));
        App::new(ctrl, &Config::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).expect("key handling");
    }

    #[test]
    fn test_q_quits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_enter_opens_detail_and_esc_closes() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.layout, LayoutMode::Split);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.layout, LayoutMode::ListOnly);
    }

    #[test]
    fn test_g_reports_fetch_in_status_bar() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('g'));
        let (msg, _) = app.status_message.as_ref().expect("status set");
        assert!(msg.contains("fetch"), "unexpected status: {msg}");
    }

    #[test]
    fn test_help_popup_captures_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        // While the popup is open, navigation keys are swallowed
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 0);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }
}
