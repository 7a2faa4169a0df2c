pub mod api_utils;
pub mod charts;
pub mod components;
pub mod config;
pub mod data_table;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod loader;
pub mod modal;
pub mod notifications;
pub mod page_frame;
