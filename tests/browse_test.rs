//! End-to-end browsing scenarios driven through application state.

use pretty_assertions::assert_eq;
use topix::app::{App, Theme};

fn type_term(app: &mut App, term: &str) {
    app.search.start();
    for c in term.chars() {
        app.search.input(c);
        app.clamp_cursor();
    }
    app.search.accept();
}

#[test]
fn search_then_expand_then_clear() {
    let mut app = App::new(Theme::PurpleDark, true).unwrap();

    // Everything visible at startup, in id order.
    let ids: Vec<u32> = app.filtered_topics().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

    // Narrow to Arrays and expand it.
    type_term(&mut app, "array");
    let ids: Vec<u32> = app.filtered_topics().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);

    app.toggle_current();
    assert_eq!(app.expanded, Some(1));

    // Clearing the filter brings everything back, still expanded.
    app.dismiss(); // collapses
    app.dismiss(); // clears the filter
    assert_eq!(app.filtered_topics().len(), 8);
    assert_eq!(app.expanded, None);
}

#[test]
fn no_match_leaves_nothing_to_expand() {
    let mut app = App::new(Theme::PurpleDark, true).unwrap();

    type_term(&mut app, "xyz");
    assert!(app.filtered_topics().is_empty());
    assert!(app.current_topic().is_none());

    app.toggle_current();
    assert_eq!(app.expanded, None);
}

#[test]
fn moving_between_cards_moves_the_expansion() {
    let mut app = App::new(Theme::PurpleDark, true).unwrap();

    app.toggle_current();
    assert_eq!(app.expanded, Some(1));

    app.cursor_down();
    app.toggle_current();
    assert_eq!(app.expanded, Some(2));
}

#[test]
fn theme_round_trip_from_either_start() {
    for start in [Theme::PurpleDark, Theme::PurpleLight] {
        let mut app = App::new(start, true).unwrap();
        app.cycle_theme();
        app.cycle_theme();
        assert_eq!(app.theme, start);
    }
}

#[test]
fn expanding_with_effects_enabled_spawns_a_burst() {
    let mut app = App::new(Theme::PurpleDark, false).unwrap();
    app.toggle_current();
    assert!(!app.burst.is_idle());

    // The animation winds down on its own and never blocks collapse.
    app.toggle_current();
    assert_eq!(app.expanded, None);
    for _ in 0..32 {
        app.tick();
    }
    assert!(app.burst.is_idle());
}
