use contracts::domain::a003_subscription::Subscription;
use leptos::prelude::*;

use crate::domain::a003_subscription::api::{fetch_subscriptions, SUBSCRIPTIONS_COLLECTION};
use crate::shared::data_table::{CellValue, Column, DataTable, TableSpec};
use crate::shared::loader::use_loader;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// "Pro (9.5 USD)"; prices are always quoted in USD
fn plan_label(sub: &Subscription) -> CellValue {
    sub.plan
        .as_ref()
        .map_or(CellValue::Missing, |p| CellValue::Text(format!("{} ({} USD)", p.name, p.price)))
}

pub fn subscription_table_spec() -> TableSpec<Subscription> {
    TableSpec::new(
        "Subscription",
        "Subscriptions",
        SUBSCRIPTIONS_COLLECTION,
        |s: &Subscription| s.id.clone(),
    )
    .search("Search by user name...", |s| s.owner_name().map(String::from))
    .label(|s| match s.owner_name() {
        Some(name) => format!("subscription of {}", name),
        None => s.id.clone(),
    })
    .column(Column::new("userName", "User Name", |s: &Subscription| {
        CellValue::text_or_missing(s.owner_name())
    }))
    .column(Column::new("email", "Email", |s: &Subscription| {
        CellValue::text_or_missing(s.owner_email())
    }))
    .column(Column::new("plan", "Plan Name", plan_label))
    .column(Column::new("credits", "Credits", |s: &Subscription| {
        CellValue::Number(s.credits as f64)
    }))
    .column(Column::new("startDate", "Start Date", |s: &Subscription| {
        CellValue::date_or_missing(s.start_date.as_deref())
    }))
    .column(Column::new("endDate", "End Date", |s: &Subscription| {
        CellValue::date_or_missing(s.end_date.as_deref())
    }))
    .default_sort("userName")
}

#[component]
pub fn SubscriptionList() -> impl IntoView {
    let loader = use_loader("subscriptions", fetch_subscriptions);

    view! {
        <PageFrame
            page_id="a003_subscription--list"
            category=PAGE_CAT_LIST
            title="Subscriptions"
            error=loader.error
            loading=loader.loading
            on_refresh=loader.reload
        >
            <DataTable
                spec=subscription_table_spec()
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
    use crate::shared::data_table::{RawCell, ViewState};
    use crate::shared::export::build_sheet;
    use contracts::domain::a003_subscription::{SubscriptionOwner, SubscriptionPlan};

    fn sub(id: &str, owner: Option<(&str, &str)>) -> Subscription {
        Subscription {
            id: id.into(),
            owner: owner.map(|(name, email)| SubscriptionOwner {
                user_name: name.into(),
                email: email.into(),
            }),
            plan: Some(SubscriptionPlan {
                name: "Pro".into(),
                price: 9.5,
            }),
            credits: 40,
            start_date: Some("2024-03-01".into()),
            end_date: Some("2024-04-01".into()),
        }
    }

    #[test]
    fn test_null_user_renders_placeholder() {
        let spec = subscription_table_spec();
        let orphan = sub("s1", None);
        assert_eq!(spec.find_column("userName").unwrap().value(&orphan).display(), "N/A");
        assert_eq!(spec.find_column("email").unwrap().value(&orphan).display(), "N/A");
        assert_eq!(spec.label_of(&orphan), "s1");
    }

    #[test]
    fn test_plan_label() {
        let spec = subscription_table_spec();
        let mut record = sub("s1", Some(("ann", "ann@x.io")));
        assert_eq!(spec.find_column("plan").unwrap().value(&record).display(), "Pro (9.5 USD)");
        record.plan = None;
        assert_eq!(spec.find_column("plan").unwrap().value(&record).display(), "N/A");
    }

    #[test]
    fn test_search_skips_orphans_and_sorts_missing_first() {
        let spec = subscription_table_spec();
        let records = vec![
            sub("s1", Some(("zoe", "z@x.io"))),
            sub("s2", None),
            sub("s3", Some(("ann", "a@x.io"))),
        ];

        let mut state = ViewState::for_spec(&spec);
        let ids: Vec<_> = spec.page(&records, &state).rows.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["s2", "s3", "s1"]);

        state.set_search("o");
        let ids: Vec<_> = spec.page(&records, &state).rows.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["s1"]);
    }

    #[test]
    fn test_export_leaves_missing_owner_empty() {
        let spec = subscription_table_spec();
        let state = ViewState::for_spec(&spec);
        let sheet = build_sheet(&spec, &[sub("s1", None)], &state);
        assert_eq!(sheet.rows[0][0], RawCell::Empty);
        assert_eq!(sheet.rows[0][3], RawCell::Number(40.0));
    }
}
