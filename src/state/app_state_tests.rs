//! Tests for viewer state transitions.

use super::*;

fn state_with(count: usize) -> AppState {
    AppState::new((0..count).map(TableId::new).collect(), false)
}

// ===== Table selection =====

#[test]
fn new_selects_first_table() {
    let state = state_with(3);
    assert_eq!(state.selected_index(), 0);
    assert_eq!(state.selected_table(), Some(TableId::new(0)));
}

#[test]
fn empty_state_has_no_selection() {
    let mut state = state_with(0);
    state.next_table();
    state.prev_table();
    assert_eq!(state.selected_table(), None);
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn next_table_wraps_around() {
    let mut state = state_with(2);
    state.next_table();
    assert_eq!(state.selected_index(), 1);
    state.next_table();
    assert_eq!(state.selected_index(), 0);
}

#[test]
fn prev_table_wraps_around() {
    let mut state = state_with(3);
    state.prev_table();
    assert_eq!(state.selected_index(), 2);
}

#[test]
fn switching_tables_resets_scroll() {
    let mut state = state_with(2);
    state.scroll = 7;
    state.next_table();
    assert_eq!(state.scroll, 0);
}

// ===== Scrolling =====

#[test]
fn scroll_clamps_at_both_ends() {
    let mut state = state_with(1);
    state.scroll_by(-3, 10);
    assert_eq!(state.scroll, 0);
    state.scroll_by(25, 10);
    assert_eq!(state.scroll, 10);
}

#[test]
fn navigate_pages_by_visible_rows() {
    let mut state = state_with(1);
    assert!(state.navigate(KeyAction::PageDown, 100, 20));
    assert_eq!(state.scroll, 20);
    assert!(state.navigate(KeyAction::PageUp, 100, 20));
    assert_eq!(state.scroll, 0);
}

#[test]
fn navigate_to_top() {
    let mut state = state_with(1);
    state.scroll = 4;
    assert!(state.navigate(KeyAction::ScrollToTop, 10, 5));
    assert_eq!(state.scroll, 0);
}

#[test]
fn navigate_ignores_sort_and_quit() {
    let mut state = state_with(2);
    let before = state.clone();
    assert!(!state.navigate(KeyAction::SortColumn(0), 10, 5));
    assert!(!state.navigate(KeyAction::Quit, 10, 5));
    assert_eq!(state, before);
}
