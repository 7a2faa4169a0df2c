pub mod line_chart;
pub mod model;

pub use line_chart::LineChart;
pub use model::{counts, week_labels, GrowthIndicator, LineChartModel, Series};
