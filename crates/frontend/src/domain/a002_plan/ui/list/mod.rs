use contracts::domain::a002_plan::Plan;
use leptos::prelude::*;

use crate::domain::a002_plan::api::{fetch_plans, PLANS_COLLECTION};
use crate::shared::data_table::{CellValue, Column, DataTable, FilterDef, FlagLabels, TableSpec};
use crate::shared::loader::use_loader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const ACTIVE: FlagLabels = FlagLabels::new("Active", "Inactive");

pub fn plan_table_spec() -> TableSpec<Plan> {
    TableSpec::new("Plan", "Plans", PLANS_COLLECTION, |p: &Plan| p.id.clone())
        .search("Search by plan name...", |p| Some(p.name.clone()))
        .label(|p| p.name.clone())
        .column(Column::new("name", "Plan Name", |p: &Plan| CellValue::text(&p.name)))
        .column(Column::new("description", "Description", |p: &Plan| {
            CellValue::text(&p.description)
        }))
        .column(Column::new("credits", "Credits", |p: &Plan| {
            CellValue::Number(p.credits as f64)
        }))
        .column(Column::new("price", "Price", |p: &Plan| CellValue::Number(p.price)))
        .column(Column::new("isActive", "Active", |p: &Plan| {
            CellValue::Flag(p.is_active, ACTIVE)
        }))
        .column(
            Column::new("features", "Features", |p: &Plan| CellValue::List(p.features.clone()))
                .unsortable(),
        )
        .filter(FilterDef::new(
            "status",
            "Status",
            vec![("active", "Active"), ("inactive", "Inactive")],
            |p: &Plan| Some(if p.is_active { "active" } else { "inactive" }.to_string()),
        ))
        .default_sort("name")
}

#[component]
pub fn PlanList() -> impl IntoView {
    let loader = use_loader("plans", fetch_plans);

    view! {
        <PageFrame
            page_id="a002_plan--list"
            category=PAGE_CAT_LIST
            title="Plans"
            error=loader.error
            loading=loader.loading
            on_refresh=loader.reload
        >
            <DataTable
                spec=plan_table_spec()
                records=loader.records
                loading=loader.loading
                on_changed=loader.reload
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::{SortDirection, ViewState};
    use crate::shared::export::build_sheet;

    fn plan(id: &str, name: &str, credits: i64, price: f64, active: bool) -> Plan {
        Plan {
            id: id.into(),
            name: name.into(),
            description: format!("{} plan", name),
            credits,
            price,
            is_active: active,
            features: vec!["PDF export".into(), "Cover letters".into()],
        }
    }

    fn sample() -> Vec<Plan> {
        vec![
            plan("p1", "Starter", 10, 4.99, true),
            plan("p2", "Pro", 100, 19.0, true),
            plan("p3", "Legacy", 50, 9.5, false),
        ]
    }

    #[test]
    fn test_sort_by_price_descending() {
        let spec = plan_table_spec();
        let mut state = ViewState::for_spec(&spec);
        state.toggle_sort("price");
        state.toggle_sort("price");
        assert_eq!(state.sort.direction, SortDirection::Descending);
        let ids: Vec<_> = spec
            .page(&sample(), &state)
            .rows
            .iter()
            .map(|p| p.id.clone())
            .collect();
        assert_eq!(ids, ["p2", "p3", "p1"]);
    }

    #[test]
    fn test_inactive_filter_and_badge() {
        let spec = plan_table_spec();
        let mut state = ViewState::for_spec(&spec);
        state.set_filter("status", "inactive");
        let records = sample();
        let page = spec.page(&records, &state);
        assert_eq!(page.filtered_count, 1);
        let cell = spec.find_column("isActive").unwrap().value(page.rows[0]);
        assert_eq!(cell.display(), "Inactive");
    }

    #[test]
    fn test_export_includes_every_filtered_plan() {
        let spec = plan_table_spec();
        let mut state = ViewState::for_spec(&spec);
        state.set_rows_per_page(1);
        let sheet = build_sheet(&spec, &sample(), &state);
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(
            sheet.headers,
            ["Plan Name", "Description", "Credits", "Price", "Active", "Features"]
        );
    }
}
