use super::*;
use std::path::PathBuf;

fn app_with(names: &[&str]) -> App {
    App::new(
        names.iter().map(|s| s.to_string()).collect(),
        PathBuf::from("/tmp/tracks"),
    )
}

#[test]
fn cursor_moves_are_clamped_to_the_listing() {
    let mut app = app_with(&["a.mp3", "b.mp3", "c.mp3"]);
    assert_eq!(app.selected, 0);

    app.prev();
    assert_eq!(app.selected, 0);

    app.next();
    app.next();
    app.next();
    app.next();
    assert_eq!(app.selected, 2);
}

#[test]
fn cursor_is_inert_on_an_empty_listing() {
    let mut app = app_with(&[]);
    assert!(!app.has_tracks());
    app.next();
    app.prev();
    assert_eq!(app.selected, 0);
    assert_eq!(app.selected_name(), None);
    assert_eq!(app.selected_path(), None);
}

#[test]
fn selected_path_joins_library_dir_and_name() {
    let mut app = app_with(&["a.mp3", "b.mp3"]);
    app.next();
    assert_eq!(app.selected_name(), Some("b.mp3"));
    assert_eq!(app.selected_path(), Some(PathBuf::from("/tmp/tracks/b.mp3")));
}

#[test]
fn refresh_keeps_cursor_in_range() {
    let mut app = app_with(&["a.mp3", "b.mp3", "c.mp3"]);
    app.selected = 2;

    app.refresh_tracks(vec!["only.mp3".to_string()]);
    assert_eq!(app.selected, 0);

    app.refresh_tracks(Vec::new());
    assert_eq!(app.selected, 0);
    assert!(!app.has_tracks());
}

#[test]
fn import_prompt_edits_and_takes_the_buffer() {
    let mut app = app_with(&[]);

    app.enter_input_mode();
    assert!(app.input_mode);

    for c in "/tmp/song.mp3".chars() {
        app.push_input_char(c);
    }
    app.pop_input_char();
    assert_eq!(app.input_buffer, "/tmp/song.mp");

    let typed = app.take_input();
    assert_eq!(typed, "/tmp/song.mp");
    assert!(!app.input_mode);
    assert!(app.input_buffer.is_empty());
}

#[test]
fn exit_input_mode_discards_the_buffer() {
    let mut app = app_with(&[]);
    app.enter_input_mode();
    app.push_input_char('x');

    app.exit_input_mode();
    assert!(!app.input_mode);
    assert!(app.input_buffer.is_empty());
}
