//! "Add New" form of the jobs page
//!
//! - view_model.rs: form snapshot, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::AddJobForm;
pub use view_model::{JobForm, JobFormViewModel};
