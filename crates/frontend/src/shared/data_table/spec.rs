use super::column::{Column, ACTIONS_KEY};
use super::state::ALL;

/// Categorical filter shown as a drop-down above the table
pub struct FilterDef<T> {
    pub key: &'static str,
    pub label: &'static str,
    /// `(value, label)` pairs; the implicit "All" option is not listed
    pub options: Vec<(&'static str, &'static str)>,
    value_of: fn(&T) -> Option<String>,
}

impl<T> FilterDef<T> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        options: Vec<(&'static str, &'static str)>,
        value_of: fn(&T) -> Option<String>,
    ) -> Self {
        Self {
            key,
            label,
            options,
            value_of,
        }
    }

    /// Records without a value never match a concrete selection
    pub fn matches(&self, record: &T, selected: &str) -> bool {
        if selected == ALL {
            return true;
        }
        (self.value_of)(record)
            .map(|value| value.to_lowercase() == selected.to_lowercase())
            .unwrap_or(false)
    }
}

/// Everything a [`DataTable`](super::DataTable) needs to know about one entity
///
/// # Example
///
/// ```ignore
/// TableSpec::new("Plan", "Plans", "plans", |p: &Plan| p.id.clone())
///     .search("Search by plan name...", |p| Some(p.name.clone()))
///     .column(Column::new("name", "Plan Name", |p| CellValue::text(&p.name)))
///     .default_sort("name");
/// ```
pub struct TableSpec<T> {
    /// Singular name used in notifications ("Job")
    pub entity: &'static str,
    /// Plural name used for the sheet and the export file ("Jobs")
    pub entity_plural: &'static str,
    /// REST collection that owns the records (`DELETE <collection>/{id}`)
    pub collection: &'static str,
    pub search_placeholder: &'static str,
    pub columns: Vec<Column<T>>,
    pub filters: Vec<FilterDef<T>>,
    pub default_sort: &'static str,
    pub with_actions: bool,
    id_of: fn(&T) -> String,
    search_of: fn(&T) -> Option<String>,
    label_of: Option<fn(&T) -> String>,
}

impl<T> TableSpec<T> {
    pub fn new(
        entity: &'static str,
        entity_plural: &'static str,
        collection: &'static str,
        id_of: fn(&T) -> String,
    ) -> Self {
        Self {
            entity,
            entity_plural,
            collection,
            search_placeholder: "Search...",
            columns: Vec::new(),
            filters: Vec::new(),
            default_sort: "",
            with_actions: true,
            id_of,
            search_of: |_| None,
            label_of: None,
        }
    }

    /// Field matched against the search box
    pub fn search(mut self, placeholder: &'static str, search_of: fn(&T) -> Option<String>) -> Self {
        self.search_placeholder = placeholder;
        self.search_of = search_of;
        self
    }

    pub fn column(mut self, column: Column<T>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn filter(mut self, filter: FilterDef<T>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn default_sort(mut self, key: &'static str) -> Self {
        self.default_sort = key;
        self
    }

    /// Human readable name of a record for dialogs
    pub fn label(mut self, label_of: fn(&T) -> String) -> Self {
        self.label_of = Some(label_of);
        self
    }

    pub fn without_actions(mut self) -> Self {
        self.with_actions = false;
        self
    }

    pub fn id_of(&self, record: &T) -> String {
        (self.id_of)(record)
    }

    pub fn search_text_of(&self, record: &T) -> Option<String> {
        (self.search_of)(record)
    }

    pub fn label_of(&self, record: &T) -> String {
        match self.label_of {
            Some(label_of) => label_of(record),
            None => self.id_of(record),
        }
    }

    pub fn find_column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub fn is_sortable(&self, key: &str) -> bool {
        self.find_column(key).is_some_and(|c| c.sortable)
    }

    /// Keys shown on first render, actions included
    pub fn default_visible_keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = self
            .columns
            .iter()
            .filter(|c| c.visible_by_default)
            .map(|c| c.key)
            .collect();
        if self.with_actions {
            keys.push(ACTIONS_KEY);
        }
        keys
    }

    /// "Jobs" -> "JobsData.xlsx"
    pub fn export_file_name(&self) -> String {
        format!("{}Data.xlsx", self.entity_plural)
    }
}
