//! End-to-end keyboard-driven tests for the application state machine.
//! These drive `App::handle_key` exactly as the terminal loop would, without
//! needing a real terminal.

use crossterm::event::KeyCode;
use setlist_manager::App;

/// A comfortable default terminal height for tests.
const ROWS: u16 = 40;

fn press(app: &mut App, code: KeyCode) {
    let exit = app.handle_key(code).expect("key handling failed");
    assert!(!exit, "unexpected exit while driving the app");
}

fn type_song(app: &mut App, title: &str) {
    press(app, KeyCode::Char('a'));
    for ch in title.chars() {
        press(app, KeyCode::Char(ch));
    }
    press(app, KeyCode::Enter);
    press(app, KeyCode::Esc);
}

fn set_list_titles(app: &App) -> Vec<String> {
    app.store()
        .set_list()
        .iter()
        .map(|song| song.title.clone())
        .collect()
}

fn used_titles(app: &App) -> Vec<String> {
    app.store()
        .used()
        .iter()
        .map(|song| song.title.clone())
        .collect()
}

#[test]
fn adding_songs_through_the_input_field() {
    let mut app = App::new(ROWS);

    type_song(&mut app, "Hotel California");
    type_song(&mut app, "  ");
    type_song(&mut app, "Imagine");

    assert_eq!(set_list_titles(&app), vec!["Hotel California", "Imagine"]);
    assert!(used_titles(&app).is_empty());
}

#[test]
fn blank_submission_keeps_the_buffer() {
    let mut app = App::new(ROWS);

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input().value(), "  ");
    assert!(app.store().set_list().is_empty());
}

#[test]
fn successful_submission_clears_the_buffer() {
    let mut app = App::new(ROWS);

    press(&mut app, KeyCode::Char('a'));
    for ch in "Creep".chars() {
        press(&mut app, KeyCode::Char(ch));
    }
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.input().value(), "");
    assert_eq!(set_list_titles(&app), vec!["Creep"]);
}

#[test]
fn marking_songs_used_and_resetting() {
    let mut app = App::new(ROWS);
    type_song(&mut app, "Hotel California");
    type_song(&mut app, "Imagine");

    // Selection starts on the first entry.
    press(&mut app, KeyCode::Enter);
    assert_eq!(set_list_titles(&app), vec!["Imagine"]);
    assert_eq!(used_titles(&app), vec!["Hotel California"]);

    press(&mut app, KeyCode::Enter);
    assert!(app.store().set_list().is_empty());
    assert_eq!(used_titles(&app), vec!["Hotel California", "Imagine"]);
    assert!(app.store().reset_available());

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(set_list_titles(&app), vec!["Hotel California", "Imagine"]);
    assert!(used_titles(&app).is_empty());
    assert!(!app.store().reset_available());
}

#[test]
fn reset_is_refused_while_set_list_has_songs() {
    let mut app = App::new(ROWS);
    type_song(&mut app, "Alive");
    type_song(&mut app, "Black");

    press(&mut app, KeyCode::Enter);
    assert_eq!(used_titles(&app), vec!["Alive"]);

    // Set list still has "Black", so the reset control is not offered.
    press(&mut app, KeyCode::Char('r'));
    assert_eq!(set_list_titles(&app), vec!["Black"]);
    assert_eq!(used_titles(&app), vec!["Alive"]);
}

#[test]
fn selection_follows_arrow_keys_and_stays_in_bounds() {
    let mut app = App::new(ROWS);
    type_song(&mut app, "One");
    type_song(&mut app, "Two");
    type_song(&mut app, "Three");

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down); // clamped at the last entry
    press(&mut app, KeyCode::Enter);
    assert_eq!(used_titles(&app), vec!["Three"]);

    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(used_titles(&app), vec!["Three", "One"]);
    assert_eq!(set_list_titles(&app), vec!["Two"]);
}

#[test]
fn focusing_the_input_raises_the_key_panel() {
    let mut app = App::new(ROWS);
    assert_eq!(app.sizer().keyboard_height(), 0);

    press(&mut app, KeyCode::Char('a'));
    assert!(app.sizer().keyboard_height() > 0);
    let shown_target = app.sizer().target_height(false);

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.sizer().keyboard_height(), 0);
    assert!(app.sizer().target_height(false) > shown_target);
}

#[test]
fn height_transition_eases_instead_of_jumping() {
    let mut app = App::new(ROWS);
    let resting = app.sizer().current_height();

    press(&mut app, KeyCode::Char('a'));
    let target = app.sizer().target_height(false);
    assert!(target < resting);

    // The first tick moves partway, not all the way.
    app.tick();
    let after_one = app.sizer().current_height();
    assert!(after_one < resting);
    assert!(after_one > target);

    for _ in 0..32 {
        app.tick();
    }
    assert_eq!(app.sizer().current_height(), target);
}
