use deepwork::core::editor::EditorState;
use deepwork::models::daily_entry::DailyEntry;

mod common;
use common::date;

fn editor_at(hours: u8) -> EditorState {
    let d = date(2025, 11, 14);
    EditorState::open(d, Some(DailyEntry::new(d, hours)))
}

#[test]
fn test_opens_at_zero_without_stored_entry() {
    let ed = EditorState::open(date(2025, 11, 14), None);
    assert_eq!(ed.current_hours(), 0);
    assert_eq!(ed.date(), date(2025, 11, 14));
}

#[test]
fn test_opens_with_stored_hours() {
    assert_eq!(editor_at(3).current_hours(), 3);
}

#[test]
fn test_toggle_counted_hour_drops_total_by_one() {
    let mut ed = editor_at(2);
    ed.toggle(1);
    assert_eq!(ed.current_hours(), 1);

    let mut ed = editor_at(2);
    ed.toggle(2);
    assert_eq!(ed.current_hours(), 1);

    let mut ed = editor_at(1);
    ed.toggle(1);
    assert_eq!(ed.current_hours(), 0);

    let mut ed = editor_at(4);
    ed.toggle(1);
    assert_eq!(ed.current_hours(), 3);
}

#[test]
fn test_toggle_higher_hour_sets_it() {
    let mut ed = editor_at(2);
    ed.toggle(4);
    assert_eq!(ed.current_hours(), 4);

    let mut ed = editor_at(0);
    ed.toggle(3);
    assert_eq!(ed.current_hours(), 3);
}

#[test]
fn test_toggle_ignores_out_of_range_digits() {
    let mut ed = editor_at(2);
    ed.toggle(0);
    ed.toggle(5);
    assert_eq!(ed.current_hours(), 2);
}

#[test]
fn test_clear_resets_to_zero() {
    for start in 0..=4 {
        let mut ed = editor_at(start);
        ed.clear();
        assert_eq!(ed.current_hours(), 0);
    }
}

#[test]
fn test_entry_carries_final_hours_for_the_fixed_date() {
    let mut ed = editor_at(2);
    ed.toggle(4);
    ed.toggle(3);

    assert_eq!(ed.entry(), DailyEntry::new(date(2025, 11, 14), 3));
}

#[test]
fn test_render_shows_checked_and_unchecked_hours() {
    let screen = editor_at(2).render();

    assert!(screen.contains("LOG HOURS FOR TODAY: 2025-11-14"));
    assert!(screen.contains("Current: 2/4 hours"));
    assert!(screen.contains("☑ Hour 1"));
    assert!(screen.contains("☑ Hour 2"));
    assert!(screen.contains("☐ Hour 3"));
    assert!(screen.contains("☐ Hour 4"));
    assert!(screen.contains("[1-4] Toggle hour | [S]ave & back | [C]lear all"));
}
