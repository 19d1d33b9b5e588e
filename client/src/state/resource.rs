//! Generic list-screen state: fetched rows, load status and the table query.
//!
//! DESIGN
//! ======
//! Every list page (tracks, subjects, chapters, notes, videos, universities,
//! exams) holds one `RwSignal<ListState<T>>`. Rows are fetched whole and
//! searched, sorted and paged locally via `records::listing`.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use records::listing::{ListQuery, Listed, paginate};
use records::{Chapter, Exam, Note, RecordId, Subject, Track, University, Video};

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub query: ListQuery,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, query: ListQuery::default() }
    }
}

/// Owned page of rows for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl<T> PageView<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }
}

impl<T: Listed + Clone> ListState<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a fetch result. A failure keeps the previous rows so a retry
    /// does not blank the table.
    pub fn finish(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.set_search(search);
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.set_page(page);
    }

    #[must_use]
    pub fn page(&self) -> PageView<T> {
        let page = paginate(&self.items, &self.query);
        PageView {
            rows: page.rows.into_iter().cloned().collect(),
            page: page.page,
            page_count: page.page_count,
            total: page.total,
        }
    }
}

/// A row type the shared table component can render.
pub trait TableRecord: Listed + Clone + Send + Sync + 'static {
    /// Column headers after the thumbnail column.
    const HEADERS: &'static [&'static str];

    fn record_id(&self) -> RecordId;

    fn title(&self) -> &str;

    fn thumbnail(&self) -> Option<&str>;

    /// Cell text matching [`Self::HEADERS`].
    fn cells(&self) -> Vec<String>;
}

fn short_date(value: Option<&str>) -> String {
    value.map(|v| v.chars().take(10).collect()).unwrap_or_else(|| "—".to_owned())
}

fn excerpt(text: &str) -> String {
    const LIMIT: usize = 80;
    let text = text.trim();
    if text.chars().count() <= LIMIT {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(LIMIT).collect();
    cut.push('…');
    cut
}

impl TableRecord for Track {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Universities", "Created by", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            excerpt(&self.description),
            if self.has_university { "Yes" } else { "No" }.to_owned(),
            self.created_by.clone().unwrap_or_default(),
            short_date(self.recency()),
        ]
    }
}

impl TableRecord for Subject {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Chapters", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            excerpt(&self.description),
            self.chapters.len().to_string(),
            short_date(self.recency()),
        ]
    }
}

impl TableRecord for Chapter {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), excerpt(&self.description), short_date(self.recency())]
    }
}

impl TableRecord for Note {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), excerpt(&self.description), short_date(self.recency())]
    }
}

impl TableRecord for Video {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), excerpt(&self.description), short_date(self.recency())]
    }
}

impl TableRecord for University {
    const HEADERS: &'static [&'static str] = &["Name", "Description", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone(), excerpt(&self.description), short_date(self.recency())]
    }
}

impl TableRecord for Exam {
    const HEADERS: &'static [&'static str] = &["Title", "Type", "Questions", "Total marks", "Practice", "Updated"];

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.exam_type.label().to_owned(),
            self.question_count().to_string(),
            format!("{}", self.total_marks),
            if self.is_practice_exam { "Yes" } else { "No" }.to_owned(),
            short_date(self.recency()),
        ]
    }
}
