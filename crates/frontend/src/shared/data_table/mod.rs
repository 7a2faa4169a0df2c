//! Generic client-side data table
//!
//! A page describes its entity once with a [`TableSpec`] and renders
//! [`DataTable`] over the fetched records. The view owns a [`ViewState`]
//! and derives the visible page with a pure search -> filter -> sort ->
//! paginate pipeline, so the same code serves users, jobs, plans and
//! subscriptions.

pub mod cell;
pub mod column;
pub mod delete_flow;
pub mod pipeline;
pub mod spec;
pub mod state;
pub mod view;

pub use cell::render_cell;
pub use column::{CellValue, Column, FlagLabels, RawCell, Tone, ACTIONS_KEY, NOT_AVAILABLE};
pub use delete_flow::{execute_delete, DeleteFlow, DeleteTarget, RecordStore};
pub use pipeline::PageView;
pub use spec::{FilterDef, TableSpec};
pub use state::{
    SortDescriptor, SortDirection, ViewState, ALL, DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS,
};
pub use view::DataTable;
