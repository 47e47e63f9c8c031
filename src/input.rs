//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] mutations.  Keys that need something
//! outside the UI (a new fetch, a browser) come back as an [`Action`] for the
//! main loop to carry out.
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist), or a new
//!    [`Action`] variant if it reaches beyond the UI.
//! 2. Add a `KeyCode` match arm in [`handle_key_event`].
//! 3. Update the help text in [`crate::ui`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, View};

/// Work the main loop performs on behalf of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Load, retry or refresh, whichever fits the current state.
    Reload,
    /// Open this address in the system browser.
    OpenLink(String),
}

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    app.notice = None;

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Esc | KeyCode::Backspace => app.back(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter if app.view == View::List => app.open_detail(),
        KeyCode::Char('r') => return Some(Action::Reload),
        KeyCode::Char('o') | KeyCode::Enter => {
            match app.current_article().map(|a| a.url.clone()) {
                Some(Some(url)) => return Some(Action::OpenLink(url)),
                Some(None) => app.notice = Some("This article has no link".into()),
                None => {}
            }
        }
        _ => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::controller::FetchState;
    use crate::news::Article;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(articles: Vec<Article>) -> App {
        let mut app = App::new();
        app.sync(FetchState::Loaded(articles));
        app
    }

    fn linked(title: &str) -> Article {
        Article::new(Some(title.into()), None, Some(format!("https://example.com/{title}")), None)
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('q'))), None);
        assert!(app.quit);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut app, key);
        assert!(!app.quit);
    }

    #[test]
    fn r_requests_reload_in_any_state() {
        for state in [FetchState::Idle, FetchState::Failed("x".into()), FetchState::Loaded(vec![])] {
            let mut app = App::new();
            app.sync(state);
            assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('r'))), Some(Action::Reload));
        }
    }

    #[test]
    fn arrows_move_selection() {
        let mut app = app_with(vec![linked("a"), linked("b")]);
        handle_key_event(&mut app, press(KeyCode::Down));
        assert_eq!(app.list_state.selected(), Some(1));
        handle_key_event(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn enter_opens_detail_then_link() {
        let mut app = app_with(vec![linked("a")]);

        assert_eq!(handle_key_event(&mut app, press(KeyCode::Enter)), None);
        assert!(matches!(app.view, View::Detail(_)));

        assert_eq!(
            handle_key_event(&mut app, press(KeyCode::Enter)),
            Some(Action::OpenLink("https://example.com/a".into()))
        );
    }

    #[test]
    fn o_without_url_sets_notice() {
        let mut app = app_with(vec![Article::new(Some("bare".into()), None, None, None)]);

        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('o'))), None);
        assert_eq!(app.notice.as_deref(), Some("This article has no link"));

        handle_key_event(&mut app, press(KeyCode::Down));
        assert!(app.notice.is_none(), "next key press clears the notice");
    }

    #[test]
    fn o_with_nothing_loaded_does_nothing() {
        let mut app = App::new();
        assert_eq!(handle_key_event(&mut app, press(KeyCode::Char('o'))), None);
        assert!(app.notice.is_none());
    }

    #[test]
    fn esc_backs_out_of_detail() {
        let mut app = app_with(vec![linked("a")]);
        app.open_detail();
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view, View::List);
        assert!(!app.quit);
    }
}
