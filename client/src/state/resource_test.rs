use super::*;

fn chapter(id: RecordId, name: &str, modified: &str) -> Chapter {
    Chapter { id, name: name.to_owned(), modified_on: Some(modified.to_owned()), ..Chapter::default() }
}

#[test]
fn finish_ok_replaces_rows_and_clears_error() {
    let mut state = ListState::<Chapter>::default();
    state.begin_load();
    assert!(state.loading);
    state.finish(Ok(vec![chapter(1, "Heart", "2024-01-01")]));
    assert!(!state.loading);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error, None);
}

#[test]
fn finish_err_keeps_previous_rows() {
    let mut state = ListState::<Chapter>::default();
    state.finish(Ok(vec![chapter(1, "Heart", "2024-01-01")]));
    state.begin_load();
    state.finish(Err("Session expired or unauthorized".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error.as_deref(), Some("Session expired or unauthorized"));
}

#[test]
fn page_view_spans_matching_rows() {
    let mut state = ListState::<Chapter>::default();
    let items = (1..=23).map(|i| chapter(i, &format!("Lung {i}"), &format!("2024-01-{i:02}"))).collect();
    state.finish(Ok(items));
    state.set_search("lung");
    let first = state.page();
    assert_eq!(first.total, 23);
    assert_eq!(first.page_count, 3);
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.rows[0].id, 23);
    assert!(!first.has_previous());

    state.set_page(9);
    let last = state.page();
    assert_eq!(last.page, 3);
    assert_eq!(last.rows.len(), 3);
    assert!(!last.has_next());
}

#[test]
fn search_change_returns_to_first_page() {
    let mut state = ListState::<Chapter>::default();
    state.set_page(2);
    state.set_search("x");
    assert_eq!(state.query.page, 1);
}

#[test]
fn exam_cells_follow_headers() {
    let exam = Exam { title: "Mock".to_owned(), total_marks: 12.0, ..Exam::default() };
    let cells = exam.cells();
    assert_eq!(cells.len(), Exam::HEADERS.len());
    assert_eq!(cells[3], "12");
    assert_eq!(cells[5], "—");
}

#[test]
fn long_descriptions_are_cut() {
    let track = Track { description: "x".repeat(120), ..Track::default() };
    let cell = &track.cells()[1];
    assert_eq!(cell.chars().count(), 81);
    assert!(cell.ends_with('…'));
}
