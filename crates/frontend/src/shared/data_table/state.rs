use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::column::ACTIONS_KEY;
use super::delete_flow::DeleteFlow;
use super::spec::TableSpec;

/// Value of a categorical filter that disables it
pub const ALL: &str = "all";
pub const ROWS_PER_PAGE_OPTIONS: [usize; 3] = [5, 10, 15];
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
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

    /// Orient a comparator result; flipping the comparator keeps sorting stable
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    pub field: String,
    pub direction: SortDirection,
}

/// View-owned state of one table instance. Lives as long as the table is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub search_text: String,
    pub active_filters: BTreeMap<String, String>,
    pub sort: SortDescriptor,
    /// 1-based
    pub page: usize,
    pub rows_per_page: usize,
    pub visible_columns: BTreeSet<String>,
    pub delete: DeleteFlow,
}

impl ViewState {
    pub fn for_spec<T>(spec: &TableSpec<T>) -> Self {
        Self {
            search_text: String::new(),
            active_filters: spec
                .filters
                .iter()
                .map(|f| (f.key.to_string(), ALL.to_string()))
                .collect(),
            sort: SortDescriptor {
                field: spec.default_sort.to_string(),
                direction: SortDirection::Ascending,
            },
            page: 1,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            visible_columns: spec
                .default_visible_keys()
                .into_iter()
                .map(str::to_string)
                .collect(),
            delete: DeleteFlow::default(),
        }
    }

    pub fn filter_value(&self, key: &str) -> &str {
        self.active_filters.get(key).map(String::as_str).unwrap_or(ALL)
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn set_filter(&mut self, key: &str, value: impl Into<String>) {
        self.active_filters.insert(key.to_string(), value.into());
        self.page = 1;
    }

    /// Zero rows per page is ignored
    pub fn set_rows_per_page(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        self.rows_per_page = rows;
        self.page = 1;
    }

    /// Clicking the active column flips the direction, another column starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort.field == field {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortDescriptor {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            };
        }
    }

    /// `ceil(filtered_count / rows_per_page)`; zero for an empty set
    pub fn page_count(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.rows_per_page.max(1))
    }

    /// Page actually shown for `filtered_count` records
    pub fn effective_page(&self, filtered_count: usize) -> usize {
        self.page.clamp(1, self.page_count(filtered_count).max(1))
    }

    pub fn go_to_page(&mut self, page: usize, filtered_count: usize) {
        self.page = page;
        self.clamp_page(filtered_count);
    }

    pub fn next_page(&mut self, filtered_count: usize) {
        self.go_to_page(self.page.saturating_add(1), filtered_count);
    }

    pub fn previous_page(&mut self, filtered_count: usize) {
        self.go_to_page(self.page.saturating_sub(1), filtered_count);
    }

    /// Re-establish the page bounds after the record set changed
    pub fn clamp_page(&mut self, filtered_count: usize) {
        self.page = self.effective_page(filtered_count);
    }

    pub fn is_column_visible(&self, key: &str) -> bool {
        self.visible_columns.contains(key)
    }

    /// Show or hide a data column. The last visible data column cannot be hidden.
    pub fn toggle_column(&mut self, key: &str) -> bool {
        if self.visible_columns.contains(key) {
            let data_columns = self
                .visible_columns
                .iter()
                .filter(|k| k.as_str() != ACTIONS_KEY)
                .count();
            if data_columns <= 1 {
                return false;
            }
            self.visible_columns.remove(key);
        } else {
            self.visible_columns.insert(key.to_string());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{CellValue, Column, FilterDef};

    struct Row {
        id: u32,
        name: &'static str,
    }

    fn spec() -> TableSpec<Row> {
        TableSpec::new("Row", "Rows", "rows", |r: &Row| r.id.to_string())
            .column(Column::new("name", "Name", |r: &Row| CellValue::text(r.name)))
            .column(Column::new("id", "Id", |r: &Row| CellValue::Number(r.id as f64)).hidden())
            .filter(FilterDef::new("kind", "Kind", vec![("a", "A")], |_| None))
            .default_sort("name")
    }

    #[test]
    fn test_defaults() {
        let state = ViewState::for_spec(&spec());
        assert_eq!(state.page, 1);
        assert_eq!(state.rows_per_page, 5);
        assert_eq!(state.filter_value("kind"), ALL);
        assert_eq!(state.sort.field, "name");
        assert!(state.is_column_visible("name"));
        assert!(state.is_column_visible(ACTIONS_KEY));
        assert!(!state.is_column_visible("id"));
        assert!(state.delete.pending().is_none());
    }

    #[test]
    fn test_search_filter_and_rows_reset_page() {
        let mut state = ViewState::for_spec(&spec());
        state.go_to_page(3, 12);
        assert_eq!(state.page, 3);
        state.set_search("abc");
        assert_eq!(state.page, 1);

        state.go_to_page(2, 12);
        state.set_filter("kind", "a");
        assert_eq!(state.page, 1);

        state.go_to_page(2, 12);
        state.set_rows_per_page(10);
        assert_eq!(state.page, 1);
        assert_eq!(state.rows_per_page, 10);

        state.set_rows_per_page(0);
        assert_eq!(state.rows_per_page, 10);
    }

    #[test]
    fn test_page_is_clamped() {
        let mut state = ViewState::for_spec(&spec());
        assert_eq!(state.page_count(12), 3);
        assert_eq!(state.page_count(0), 0);

        state.go_to_page(9, 12);
        assert_eq!(state.page, 3);
        state.next_page(12);
        assert_eq!(state.page, 3);

        state.go_to_page(0, 12);
        assert_eq!(state.page, 1);
        state.previous_page(12);
        assert_eq!(state.page, 1);

        state.go_to_page(3, 12);
        state.clamp_page(0);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_toggle_sort() {
        let mut state = ViewState::for_spec(&spec());
        state.toggle_sort("name");
        assert_eq!(state.sort.direction, SortDirection::Descending);
        state.toggle_sort("id");
        assert_eq!(state.sort.field, "id");
        assert_eq!(state.sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_last_data_column_stays_visible() {
        let mut state = ViewState::for_spec(&spec());
        assert!(!state.toggle_column("name"));
        assert!(state.is_column_visible("name"));

        assert!(state.toggle_column("id"));
        assert!(state.toggle_column("name"));
        assert!(!state.is_column_visible("name"));
        assert!(!state.toggle_column("id"));
    }
}
