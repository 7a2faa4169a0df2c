//! Search -> filter -> sort -> paginate, as pure functions over a record slice

use super::column::CellValue;
use super::spec::TableSpec;
use super::state::{SortDescriptor, ViewState};

/// One page of the derived record set
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    pub rows: Vec<&'a T>,
    /// Records left after search and filters, across all pages
    pub filtered_count: usize,
    /// Page actually shown, clamped to the valid range
    pub page: usize,
    pub page_count: usize,
}

impl<T> TableSpec<T> {
    /// Case-insensitive substring search plus every active filter
    pub fn matches(&self, record: &T, state: &ViewState) -> bool {
        let needle = state.search_text.to_lowercase();
        if !needle.is_empty() {
            let found = self
                .search_text_of(record)
                .map(|text| text.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !found {
                return false;
            }
        }

        self.filters
            .iter()
            .all(|filter| filter.matches(record, state.filter_value(filter.key)))
    }

    pub fn filtered<'a>(&self, records: &'a [T], state: &ViewState) -> Vec<&'a T> {
        records
            .iter()
            .filter(|record| self.matches(record, state))
            .collect()
    }

    /// Stable sort. An unknown or unsortable field leaves the order untouched.
    pub fn sort_rows(&self, rows: &mut [&T], sort: &SortDescriptor) {
        let Some(column) = self.find_column(&sort.field).filter(|c| c.sortable) else {
            return;
        };
        rows.sort_by(|a, b| sort.direction.apply(column.value(a).compare(&column.value(b))));
    }

    pub fn filtered_sorted<'a>(&self, records: &'a [T], state: &ViewState) -> Vec<&'a T> {
        let mut rows = self.filtered(records, state);
        self.sort_rows(&mut rows, &state.sort);
        rows
    }

    /// Values of one row for the visible data columns, in display order
    pub fn visible_cells(&self, record: &T, state: &ViewState) -> Vec<CellValue> {
        self.columns
            .iter()
            .filter(|c| state.is_column_visible(c.key))
            .map(|c| c.value(record))
            .collect()
    }

    pub fn page<'a>(&self, records: &'a [T], state: &ViewState) -> PageView<'a, T> {
        let rows = self.filtered_sorted(records, state);
        let filtered_count = rows.len();
        let page = state.effective_page(filtered_count);
        let start = (page - 1) * state.rows_per_page;

        PageView {
            rows: rows
                .into_iter()
                .skip(start)
                .take(state.rows_per_page)
                .collect(),
            filtered_count,
            page,
            page_count: state.page_count(filtered_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::data_table::{
        CellValue, Column, FilterDef, FlagLabels, SortDirection, TableSpec, ViewState,
    };

    #[derive(Debug, PartialEq)]
    struct Item {
        id: u32,
        title: String,
        group: u32,
        remote: bool,
    }

    fn items(count: u32) -> Vec<Item> {
        (1..=count)
            .map(|id| Item {
                id,
                title: format!("Item {:02}", id),
                group: id % 3,
                remote: id % 2 == 0,
            })
            .collect()
    }

    fn spec() -> TableSpec<Item> {
        TableSpec::new("Item", "Items", "items", |i: &Item| i.id.to_string())
            .search("Search...", |i| Some(i.title.clone()))
            .column(Column::new("title", "Title", |i: &Item| CellValue::text(&i.title)))
            .column(Column::new("group", "Group", |i: &Item| CellValue::Number(i.group as f64)))
            .column(
                Column::new("remote", "Remote", |i: &Item| {
                    CellValue::Flag(i.remote, FlagLabels::new("Remote", "On-site"))
                })
                .unsortable(),
            )
            .filter(FilterDef::new(
                "remote",
                "Remote",
                vec![("remote", "Remote"), ("onsite", "On-site")],
                |i: &Item| Some(if i.remote { "remote" } else { "onsite" }.to_string()),
            ))
            .default_sort("title")
    }

    fn ids(rows: &[&Item]) -> Vec<u32> {
        rows.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_twelve_records_three_pages() {
        let spec = spec();
        let records = items(12);
        let mut state = ViewState::for_spec(&spec);

        let first = spec.page(&records, &state);
        assert_eq!(first.filtered_count, 12);
        assert_eq!(first.page_count, 3);
        assert_eq!(ids(&first.rows), vec![1, 2, 3, 4, 5]);

        state.go_to_page(3, first.filtered_count);
        let last = spec.page(&records, &state);
        assert_eq!(ids(&last.rows), vec![11, 12]);

        state.set_search("item 1");
        let searched = spec.page(&records, &state);
        assert_eq!(searched.page, 1);
        assert_eq!(ids(&searched.rows), vec![10, 11, 12]);

        state.go_to_page(2, 12);
        state.set_filter("remote", "remote");
        let two = spec.page(&records, &state);
        assert_eq!(two.page, 1);
        assert_eq!(two.page_count, 1);
        assert_eq!(ids(&two.rows), vec![10, 12]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let spec = spec();
        let records = items(12);
        let mut state = ViewState::for_spec(&spec);
        state.set_search("ITEM 07");
        assert_eq!(ids(&spec.filtered(&records, &state)), vec![7]);

        // Matched as typed, surrounding spaces included
        state.set_search(" 07");
        assert_eq!(ids(&spec.filtered(&records, &state)), vec![7]);
        state.set_search("  ");
        assert!(spec.filtered(&records, &state).is_empty());

        state.set_search("missing");
        let view = spec.page(&records, &state);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count, 0);
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_filters_combine_with_search() {
        let spec = spec();
        let records = items(12);
        let mut state = ViewState::for_spec(&spec);

        state.set_filter("remote", "onsite");
        assert_eq!(ids(&spec.filtered(&records, &state)), vec![1, 3, 5, 7, 9, 11]);

        state.set_search("item 1");
        assert_eq!(ids(&spec.filtered(&records, &state)), vec![11]);

        state.set_filter("remote", "all");
        state.clear_search();
        assert_eq!(spec.filtered(&records, &state).len(), 12);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let spec = spec();
        let records = items(12);
        let mut state = ViewState::for_spec(&spec);
        state.set_filter("remote", "remote");
        state.set_search("item");

        let once: Vec<Item> = spec
            .filtered(&records, &state)
            .into_iter()
            .map(|i| Item {
                id: i.id,
                title: i.title.clone(),
                group: i.group,
                remote: i.remote,
            })
            .collect();
        let twice = spec.filtered(&once, &state);
        assert_eq!(ids(&twice), once.iter().map(|i| i.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_sort_is_stable_both_ways() {
        let spec = spec();
        let records = items(9);
        let mut state = ViewState::for_spec(&spec);

        state.toggle_sort("group");
        let ascending = spec.filtered_sorted(&records, &state);
        assert_eq!(ids(&ascending), vec![3, 6, 9, 1, 4, 7, 2, 5, 8]);

        state.toggle_sort("group");
        assert_eq!(state.sort.direction, SortDirection::Descending);
        let descending = spec.filtered_sorted(&records, &state);
        assert_eq!(ids(&descending), vec![2, 5, 8, 1, 4, 7, 3, 6, 9]);
    }

    #[test]
    fn test_unsortable_or_unknown_field_keeps_order() {
        let spec = spec();
        let records = items(4);
        let mut state = ViewState::for_spec(&spec);

        state.toggle_sort("remote");
        assert_eq!(ids(&spec.filtered_sorted(&records, &state)), vec![1, 2, 3, 4]);

        state.toggle_sort("nope");
        assert_eq!(ids(&spec.filtered_sorted(&records, &state)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_title_sort_descending() {
        let spec = spec();
        let records = items(3);
        let mut state = ViewState::for_spec(&spec);
        state.toggle_sort("title");
        assert_eq!(ids(&spec.filtered_sorted(&records, &state)), vec![3, 2, 1]);
    }

    #[test]
    fn test_page_out_of_range_is_clamped() {
        let spec = spec();
        let records = items(12);
        let mut state = ViewState::for_spec(&spec);
        state.page = 7;
        let view = spec.page(&records, &state);
        assert_eq!(view.page, 3);
        assert_eq!(ids(&view.rows), vec![11, 12]);
    }

    #[test]
    fn test_visible_cells_follow_column_toggles() {
        let spec = spec();
        let record = &items(2)[1];
        let mut state = ViewState::for_spec(&spec);
        assert_eq!(
            spec.visible_cells(record, &state),
            vec![
                CellValue::text("Item 02"),
                CellValue::Number(2.0),
                CellValue::Flag(true, FlagLabels::new("Remote", "On-site")),
            ]
        );

        state.toggle_column("group");
        let cells = spec.visible_cells(record, &state);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].display(), "Remote");
    }
}
