use crossterm::event::KeyCode;

use crate::app::mode::AppMode;
use crate::app::{App, AppEvent};
use crate::engine::Token;
use crate::input::Change;

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(AppEvent::Key(KeyCode::Char(c)));
    }
}

#[test]
fn test_app_starts_editing_and_empty() {
    let app = App::default();
    assert_eq!(app.mode(), AppMode::Editing);
    assert!(app.tokens().is_empty());
    assert_eq!(app.buffer(), "");
}

#[test]
fn test_typing_then_enter_adds_token() {
    let mut app = App::default();
    type_text(&mut app, "a@b.com");
    let changes = app.handle_event(AppEvent::Key(KeyCode::Enter));
    assert_eq!(changes, vec![Change::Added(Token::new("a@b.com", true))]);
    assert_eq!(app.buffer(), "");
}

#[test]
fn test_comma_commit_does_not_insert_comma() {
    let mut app = App::default();
    type_text(&mut app, "a@b.com,");
    assert_eq!(app.tokens().len(), 1);
    assert_eq!(app.buffer(), "");
}

#[test]
fn test_rejected_comma_is_typed_into_field() {
    let mut app = App::default();
    let changes = app.handle_event(AppEvent::Key(KeyCode::Char(',')));
    assert!(changes.is_empty());
    assert_eq!(app.buffer(), ",");
}

#[test]
fn test_backspace_edits_field() {
    let mut app = App::default();
    type_text(&mut app, "ab");
    app.handle_event(AppEvent::Key(KeyCode::Backspace));
    assert_eq!(app.buffer(), "a");
}

#[test]
fn test_blur_commits_and_empties() {
    let mut app = App::default();
    type_text(&mut app, "oops");
    let changes = app.handle_event(AppEvent::Blur);
    assert_eq!(changes, vec![Change::Added(Token::new("oops", false))]);
    assert_eq!(app.mode(), AppMode::Blurred);
    assert_eq!(app.buffer(), "");
}

#[test]
fn test_second_blur_is_noop() {
    let mut app = App::default();
    app.handle_event(AppEvent::Blur);
    assert!(app.handle_event(AppEvent::Blur).is_empty());
    assert_eq!(app.mode(), AppMode::Blurred);
}

#[test]
fn test_focus_and_keys_reactivate_field() {
    let mut app = App::default();
    app.handle_event(AppEvent::Blur);
    app.handle_event(AppEvent::Focus);
    assert_eq!(app.mode(), AppMode::Editing);

    app.handle_event(AppEvent::Blur);
    app.handle_event(AppEvent::Key(KeyCode::Char('x')));
    assert_eq!(app.mode(), AppMode::Editing);
    assert_eq!(app.buffer(), "x");
}

#[test]
fn test_paste_is_split_on_tick() {
    let mut app = App::default();
    let changes = app.handle_event(AppEvent::Paste("a@b.com, c@d.com".to_string()));
    assert!(changes.is_empty());
    assert_eq!(app.buffer(), "a@b.com, c@d.com");

    let changes = app.tick();
    assert_eq!(
        changes,
        vec![
            Change::Added(Token::new("a@b.com", true)),
            Change::Added(Token::new("c@d.com", true)),
        ]
    );
    assert_eq!(app.buffer(), "");
}

#[test]
fn test_paste_drops_line_breaks() {
    let mut app = App::default();
    app.handle_event(AppEvent::Paste("a@b.com,\r\nc@d.com\n".to_string()));
    assert_eq!(app.buffer(), "a@b.com,c@d.com");

    app.tick();
    let values: Vec<&str> = app.tokens().iter().map(|t| t.value.as_str()).collect();
    assert_eq!(values, vec!["a@b.com", "c@d.com"]);
}

#[test]
fn test_remove_reports_removed_token() {
    let mut app = App::default();
    type_text(&mut app, "z@z.com,");
    let changes = app.handle_event(AppEvent::Remove("z@z.com".to_string()));
    assert_eq!(changes, vec![Change::Removed(Token::new("z@z.com", true))]);
    assert!(app.tokens().is_empty());
}

#[test]
fn test_stale_remove_is_ignored() {
    let mut app = App::default();
    assert!(app
        .handle_event(AppEvent::Remove("ghost@x.com".to_string()))
        .is_empty());
}

#[test]
fn test_quit_commits_pending_text() {
    let mut app = App::default();
    type_text(&mut app, "last@one.com");
    let changes = app.handle_event(AppEvent::Quit);
    assert_eq!(changes.len(), 1);
    assert_eq!(app.mode(), AppMode::Quit);
    assert_eq!(app.tokens().len(), 1);
}

#[test]
fn test_render_state_counts() {
    let mut app = App::default();
    type_text(&mut app, "a@b.com,bad,half");
    let state = app.get_render_state();
    assert_eq!(state.token_count, 2);
    assert_eq!(state.invalid_count, 1);
    assert_eq!(state.buffer, "half");
    assert_eq!(state.placeholder, "add more people...");
    assert!(state.is_focused());
}

#[test]
fn test_summary_marks_invalid() {
    let mut app = App::default();
    type_text(&mut app, "a@b.com,bad,");
    assert_eq!(app.summary(), "a@b.com\nbad\t(invalid)");
}
