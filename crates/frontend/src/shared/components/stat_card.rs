use crate::shared::charts::GrowthIndicator;
use crate::shared::icons::icon;
use leptos::prelude::*;

fn format_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Extra modifier class, e.g. "stat-card--users"
    #[prop(optional, into)]
    accent: String,
    /// Primary value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<u64>>,
    /// Week-over-week growth in percent
    #[prop(optional, into)]
    growth: Signal<Option<f64>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "—".to_string(),
    };

    let change_view = move || {
        growth.get().map(|pct| {
            let indicator = GrowthIndicator::new(pct);
            view! {
                <span class=indicator.class()>
                    {icon(indicator.icon_name())}
                    {indicator.text.clone()}
                </span>
            }
        })
    };

    view! {
        <div class=format!("stat-card {}", accent)>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {change_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1200), "1,200");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }
}
