//! Read-only card of one job posting, shown by the "View" row action

mod view;

pub use view::JobDetails;
