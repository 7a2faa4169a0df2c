use leptos::prelude::*;

use super::model::{LineChartModel, PADDING_BOTTOM, PADDING_LEFT, VIEW_HEIGHT, VIEW_WIDTH};

/// Line chart with filled areas, drawn as inline SVG
#[component]
pub fn LineChart(
    #[prop(into)] title: String,
    #[prop(into)] model: Signal<LineChartModel>,
) -> impl IntoView {
    let view_box = format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT);

    let body = move || {
        let model = model.get();
        if model.labels.is_empty() {
            return view! { <div class="chart__empty">"No data"</div> }.into_any();
        }

        let grid = model
            .y_ticks()
            .into_iter()
            .map(|(value, y)| {
                view! {
                    <line class="chart__grid" x1=PADDING_LEFT x2=VIEW_WIDTH y1=y y2=y />
                    <text class="chart__tick" x={PADDING_LEFT - 6.0} y={y + 4.0} text-anchor="end">
                        {format!("{}", value.round())}
                    </text>
                }
            })
            .collect_view();

        let x_labels = model
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <text
                        class="chart__label"
                        x=model.x_at(i)
                        y={VIEW_HEIGHT - PADDING_BOTTOM + 18.0}
                        text-anchor="middle"
                    >
                        {label.clone()}
                    </text>
                }
            })
            .collect_view();

        let lines = model
            .series
            .iter()
            .map(|series| {
                let dots = model
                    .points(series)
                    .into_iter()
                    .map(|(x, y)| {
                        view! { <circle cx=x cy=y r="3" fill=series.stroke() /> }
                    })
                    .collect_view();
                view! {
                    <polygon points=model.area(series) fill=series.fill() stroke="none" />
                    <polyline
                        points=model.polyline(series)
                        fill="none"
                        stroke=series.stroke()
                        stroke-width="2"
                    />
                    {dots}
                }
            })
            .collect_view();

        view! {
            <svg class="chart__svg" viewBox=view_box.clone() preserveAspectRatio="none" role="img">
                {grid}
                {x_labels}
                {lines}
            </svg>
        }
        .into_any()
    };

    let legend = move || {
        model
            .get()
            .series
            .into_iter()
            .map(|series| {
                let swatch = format!("background: {}; border-color: {};", series.fill(), series.stroke());
                view! {
                    <span class="chart__legend-item">
                        <span class="chart__swatch" style=swatch></span>
                        {series.label}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart card">
            <h3 class="chart__title">{title}</h3>
            <div class="chart__legend">{legend}</div>
            <div class="chart__body">{body}</div>
        </div>
    }
}
