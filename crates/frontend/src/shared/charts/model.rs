//! Pure geometry of the dashboard line charts

use contracts::dashboards::d100_analytics::GroupedCount;

/// Drawing area of every chart, in SVG user units
pub const VIEW_WIDTH: f64 = 600.0;
pub const VIEW_HEIGHT: f64 = 280.0;
pub const PADDING_LEFT: f64 = 44.0;
pub const PADDING_RIGHT: f64 = 16.0;
pub const PADDING_TOP: f64 = 16.0;
pub const PADDING_BOTTOM: f64 = 36.0;
const Y_TICKS: usize = 4;

/// One line, with its stroke and fill colors as `(r, g, b)`
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    pub rgb: (u8, u8, u8),
}

impl Series {
    pub fn new(label: impl Into<String>, values: Vec<f64>, rgb: (u8, u8, u8)) -> Self {
        Self {
            label: label.into(),
            values,
            rgb,
        }
    }

    pub fn stroke(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({}, {}, {}, 1)", r, g, b)
    }

    pub fn fill(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({}, {}, {}, 0.2)", r, g, b)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineChartModel {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl LineChartModel {
    pub fn new(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self { labels, series }
    }

    /// Nothing to draw: no labels or every value is zero
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
            || self
                .series
                .iter()
                .all(|s| s.values.iter().all(|v| *v == 0.0))
    }

    /// Upper bound of the y axis
    pub fn y_max(&self) -> f64 {
        let max = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max);
        nice_ceiling(max)
    }

    fn plot_width(&self) -> f64 {
        VIEW_WIDTH - PADDING_LEFT - PADDING_RIGHT
    }

    fn plot_height(&self) -> f64 {
        VIEW_HEIGHT - PADDING_TOP - PADDING_BOTTOM
    }

    /// Horizontal position of the n-th label
    pub fn x_at(&self, index: usize) -> f64 {
        let slots = self.labels.len();
        if slots <= 1 {
            return PADDING_LEFT + self.plot_width() / 2.0;
        }
        PADDING_LEFT + self.plot_width() * index as f64 / (slots - 1) as f64
    }

    pub fn y_at(&self, value: f64) -> f64 {
        let baseline = VIEW_HEIGHT - PADDING_BOTTOM;
        baseline - self.plot_height() * (value.max(0.0) / self.y_max())
    }

    /// Points of one series; values beyond the label count are dropped
    pub fn points(&self, series: &Series) -> Vec<(f64, f64)> {
        series
            .values
            .iter()
            .take(self.labels.len())
            .enumerate()
            .map(|(i, v)| (self.x_at(i), self.y_at(*v)))
            .collect()
    }

    /// `points` attribute of an SVG polyline
    pub fn polyline(&self, series: &Series) -> String {
        self.points(series)
            .iter()
            .map(|(x, y)| format!("{:.1},{:.1}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed polygon between the line and the baseline
    pub fn area(&self, series: &Series) -> String {
        let points = self.points(series);
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return String::new();
        };
        let baseline = VIEW_HEIGHT - PADDING_BOTTOM;
        format!(
            "{:.1},{:.1} {} {:.1},{:.1}",
            first.0,
            baseline,
            self.polyline(series),
            last.0,
            baseline
        )
    }

    /// `(value, y)` of the horizontal grid lines, bottom to top
    pub fn y_ticks(&self) -> Vec<(f64, f64)> {
        let max = self.y_max();
        (0..=Y_TICKS)
            .map(|i| {
                let value = max * i as f64 / Y_TICKS as f64;
                (value, self.y_at(value))
            })
            .collect()
    }
}

/// Round up to 1, 2 or 5 times a power of ten. Zero maps to 1.
pub fn nice_ceiling(value: f64) -> f64 {
    if value <= 0.0 || !value.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let fraction = value / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `"Week <id>"` for every bucket
pub fn week_labels(buckets: &[GroupedCount]) -> Vec<String> {
    buckets.iter().map(|b| format!("Week {}", b.key)).collect()
}

pub fn counts(buckets: &[GroupedCount]) -> Vec<f64> {
    buckets.iter().map(|b| b.count as f64).collect()
}

/// Week-over-week growth badge
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthIndicator {
    pub rising: bool,
    pub text: String,
}

impl GrowthIndicator {
    pub fn new(percent: f64) -> Self {
        Self {
            rising: percent > 0.0,
            text: format!("{:.2}%", percent),
        }
    }

    pub fn icon_name(&self) -> &'static str {
        if self.rising {
            "trending-up"
        } else {
            "trending-down"
        }
    }

    pub fn class(&self) -> &'static str {
        if self.rising {
            "stat-card__change stat-card__change--up"
        } else {
            "stat-card__change stat-card__change--down"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_analytics::GroupKey;

    fn bucket(week: i64, count: u64) -> GroupedCount {
        GroupedCount {
            key: GroupKey::Number(week),
            count,
        }
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(12.0), 20.0);
        assert_eq!(nice_ceiling(45.0), 50.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(101.0), 200.0);
    }

    #[test]
    fn test_labels_and_counts() {
        let buckets = vec![bucket(10, 4), bucket(11, 9)];
        assert_eq!(week_labels(&buckets), vec!["Week 10", "Week 11"]);
        assert_eq!(counts(&buckets), vec![4.0, 9.0]);

        let text = GroupedCount {
            key: GroupKey::Text("2024-W07".into()),
            count: 1,
        };
        assert_eq!(week_labels(&[text]), vec!["Week 2024-W07"]);
    }

    #[test]
    fn test_points_span_the_plot() {
        let model = LineChartModel::new(
            vec!["Week 1".into(), "Week 2".into(), "Week 3".into()],
            vec![Series::new("Users", vec![0.0, 5.0, 10.0], (50, 150, 250))],
        );
        assert_eq!(model.y_max(), 10.0);

        let points = model.points(&model.series[0]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], (PADDING_LEFT, VIEW_HEIGHT - PADDING_BOTTOM));
        assert_eq!(points[2], (VIEW_WIDTH - PADDING_RIGHT, PADDING_TOP));

        let ticks = model.y_ticks();
        assert_eq!(ticks.first().map(|t| t.0), Some(0.0));
        assert_eq!(ticks.last().map(|t| t.0), Some(10.0));
        assert!(model.area(&model.series[0]).starts_with("44.0,244.0 "));
    }

    #[test]
    fn test_empty_or_flat_chart() {
        let empty = LineChartModel::new(vec![], vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.y_max(), 1.0);

        let flat = LineChartModel::new(
            vec!["Week 1".into()],
            vec![Series::new("Users", vec![0.0], (50, 150, 250))],
        );
        assert!(flat.is_empty());
        assert_eq!(flat.points(&flat.series[0])[0].1, VIEW_HEIGHT - PADDING_BOTTOM);
    }

    #[test]
    fn test_series_colors() {
        let s = Series::new("Resumes", vec![], (75, 192, 192));
        assert_eq!(s.stroke(), "rgba(75, 192, 192, 1)");
        assert_eq!(s.fill(), "rgba(75, 192, 192, 0.2)");
    }

    #[test]
    fn test_growth_indicator() {
        let up = GrowthIndicator::new(12.346);
        assert!(up.rising);
        assert_eq!(up.text, "12.35%");
        assert_eq!(up.icon_name(), "trending-up");

        let flat = GrowthIndicator::new(0.0);
        assert!(!flat.rising);
        assert_eq!(flat.text, "0.00%");
        assert!(flat.class().ends_with("--down"));
    }
}
