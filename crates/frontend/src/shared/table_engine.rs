//! Client-side table engine: free-text filter, single-column sort, pagination.
//!
//! The engine is generic over any record implementing [`TableRecord`] and
//! never mutates the source collection. Rows flow through three stages in a
//! fixed order: filter, then sort, then paginate.

use std::cmp::Ordering;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A single cell value as seen by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Empty,
}

impl FieldValue {
    /// String form used for searching and non-numeric comparison
    pub fn display(&self) -> String {
        match self {
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Empty => String::new(),
        }
    }

    /// Numbers compare by value; anything else compares by string form
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            _ => locale_compare(&self.display(), &other.display()),
        }
    }

    fn contains_lowercase(&self, needle_lower: &str) -> bool {
        self.display().to_lowercase().contains(needle_lower)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

/// Case-insensitive ordering with the raw string as tie-break
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Field access the engine needs from a record type
pub trait TableRecord {
    /// Value of the named field; unknown keys yield [`FieldValue::Empty`]
    fn field(&self, key: &str) -> FieldValue;

    /// Every value the free-text search looks at, including fields that are
    /// not displayed as columns
    fn search_values(&self) -> Vec<FieldValue>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub width: Option<&'static str>,
    pub sortable: bool,
}

impl Column {
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            width: None,
            sortable: true,
        }
    }

    pub const fn width(self, width: &'static str) -> Self {
        Self {
            width: Some(width),
            ..self
        }
    }

    pub const fn unsortable(self) -> Self {
        Self {
            sortable: false,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    pub searchable: bool,
    pub sortable: bool,
    pub page_size: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            searchable: false,
            sortable: false,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineOptions {
    fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// Transient table state: page (1-based), search term, sort
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    pub current_page: usize,
    pub search_term: String,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current_page: 1,
            search_term: String::new(),
            sort_column: None,
            sort_direction: SortDirection::Ascending,
        }
    }
}

impl EngineState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Select `key` for sorting. The active column flips direction, a new
    /// column starts ascending. Returns false when sorting is not allowed.
    pub fn toggle_sort(&mut self, key: &str, columns: &[Column], options: &EngineOptions) -> bool {
        if !options.sortable {
            return false;
        }
        if !columns.iter().any(|c| c.key == key && c.sortable) {
            return false;
        }

        if self.sort_column.as_deref() == Some(key) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_column = Some(key.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
        true
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = clamp_page(page, total_pages);
    }

    /// The sort column when it names a sortable column of `columns`
    pub fn active_sort<'c>(&self, columns: &'c [Column], options: &EngineOptions) -> Option<&'c Column> {
        if !options.sortable {
            return None;
        }
        let key = self.sort_column.as_deref()?;
        columns.iter().find(|c| c.key == key && c.sortable)
    }

    /// Arrow for the header of `key` when it is the active sort column
    pub fn sort_indicator(&self, key: &str) -> Option<&'static str> {
        (self.sort_column.as_deref() == Some(key)).then(|| self.sort_direction.arrow())
    }
}

/// Result of one engine pass
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedPage<'a, T> {
    pub visible_rows: Vec<&'a T>,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub current_page: usize,
}

pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Keep records where any field contains `term`, ignoring case
pub fn filter_records<'a, T: TableRecord>(records: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.search_values().iter().any(|v| v.contains_lowercase(&needle)))
        .collect()
}

/// Stable sort by one field
pub fn sort_records<T: TableRecord>(rows: &mut [&T], key: &str, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let cmp = a.field(key).compare(&b.field(key));
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

pub fn derive_page<'a, T: TableRecord>(
    records: &'a [T],
    columns: &[Column],
    state: &EngineState,
    options: &EngineOptions,
) -> DerivedPage<'a, T> {
    let mut rows = if options.searchable {
        filter_records(records, &state.search_term)
    } else {
        records.iter().collect()
    };

    if let Some(column) = state.active_sort(columns, options) {
        sort_records(&mut rows, column.key, state.sort_direction);
    }

    let page_size = options.effective_page_size();
    let filtered_count = rows.len();
    let total_pages = total_pages(filtered_count, page_size);
    let current_page = clamp_page(state.current_page, total_pages);

    let start = (current_page - 1) * page_size;
    let visible_rows = rows.into_iter().skip(start).take(page_size).collect();

    DerivedPage {
        visible_rows,
        total_pages,
        filtered_count,
        current_page,
    }
}
