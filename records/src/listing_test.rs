use super::*;

#[derive(Debug, PartialEq)]
struct Row {
    name: String,
    description: String,
    created_on: Option<String>,
    modified_on: Option<String>,
    hidden: bool,
}

impl Listed for Row {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn created_on(&self) -> Option<&str> {
        self.created_on.as_deref()
    }

    fn modified_on(&self) -> Option<&str> {
        self.modified_on.as_deref()
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }
}

fn row(name: &str, modified_on: Option<&str>) -> Row {
    Row {
        name: name.to_owned(),
        description: String::new(),
        created_on: None,
        modified_on: modified_on.map(ToOwned::to_owned),
        hidden: false,
    }
}

fn numbered(count: usize, prefix: &str) -> Vec<Row> {
    (0..count)
        .map(|i| row(&format!("{prefix} {i:02}"), Some(&format!("2024-01-{:02}T00:00:00Z", i % 28 + 1))))
        .collect()
}

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(1), 1);
    assert_eq!(page_count(10), 1);
    assert_eq!(page_count(11), 2);
    assert_eq!(page_count(25), 3);
}

#[test]
fn search_is_case_insensitive_substring() {
    let item = Row { description: "Cardiac Physiology".to_owned(), ..row("Heart", None) };
    assert!(matches(&item, "physio"));
    assert!(matches(&item, "HEART"));
    assert!(matches(&item, "  "));
    assert!(!matches(&item, "renal"));
}

#[test]
fn matching_rows_paginate_at_ten_per_page() {
    let mut items = numbered(17, "Anatomy");
    items.extend(numbered(8, "Biology"));

    let mut query = ListQuery::default();
    query.set_search("anatomy");
    let first = paginate(&items, &query);
    assert_eq!(first.total, 17);
    assert_eq!(first.page_count, 2);
    assert_eq!(first.rows.len(), 10);
    assert!(first.has_next());
    assert!(!first.has_previous());

    query.set_page(2);
    let second = paginate(&items, &query);
    assert_eq!(second.rows.len(), 7);
    assert!(second.rows.iter().all(|r| r.name.starts_with("Anatomy")));
    assert!(!second.has_next());
}

#[test]
fn rows_sort_newest_first_with_undated_last() {
    let items = vec![
        row("old", Some("2023-01-01T00:00:00Z")),
        row("undated", None),
        Row { created_on: Some("2024-06-01T00:00:00Z".to_owned()), ..row("created-only", None) },
        row("new", Some("2024-02-01T00:00:00Z")),
    ];
    let names: Vec<&str> = filter_sorted(&items, "").iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["created-only", "new", "old", "undated"]);
}

#[test]
fn timestamps_compare_as_instants_across_offsets() {
    let items = vec![
        row("utc-evening", Some("2024-03-01T20:00:00Z")),
        row("ist-night", Some("2024-03-02T00:30:00+05:30")),
        row("fractional", Some("2024-03-01T20:00:00.5Z")),
        row("garbled", Some("yesterday")),
        row("undated", None),
    ];
    let names: Vec<&str> = filter_sorted(&items, "").iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["fractional", "utc-evening", "ist-night", "garbled", "undated"]);
}

#[test]
fn hidden_rows_never_show() {
    let items = vec![row("kept", None), Row { hidden: true, ..row("deleted", None) }];
    let page = paginate(&items, &ListQuery::default());
    assert_eq!(page.total, 1);
    assert_eq!(page.rows[0].name, "kept");
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let items = numbered(12, "Row");
    let query = ListQuery { search: String::new(), page: 9 };
    let page = paginate(&items, &query);
    assert_eq!(page.page, 2);
    assert_eq!(page.rows.len(), 2);
}

#[test]
fn empty_result_reports_zero_pages() {
    let items = numbered(3, "Row");
    let mut query = ListQuery::default();
    query.set_search("nothing");
    let page = paginate(&items, &query);
    assert_eq!(page.total, 0);
    assert_eq!(page.page_count, 0);
    assert_eq!(page.page, 1);
    assert!(page.rows.is_empty());
}

#[test]
fn changing_search_resets_page() {
    let mut query = ListQuery { search: "a".to_owned(), page: 3 };
    query.set_search("a");
    assert_eq!(query.page, 3);
    query.set_search("ab");
    assert_eq!(query.page, 1);
}
