pub mod d100_analytics;

pub use d100_analytics::ui::AnalyticsDashboard;
