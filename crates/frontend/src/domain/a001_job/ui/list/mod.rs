use contracts::domain::a001_job::{employment_type_key, Job};
use leptos::children::ToChildren;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::details::JobDetails;
use super::form::AddJobForm;
use crate::domain::a001_job::api::{fetch_jobs, JOBS_COLLECTION};
use crate::shared::data_table::{CellValue, Column, DataTable, FilterDef, FlagLabels, TableSpec, Tone};
use crate::shared::icons::icon;
use crate::shared::loader::use_loader;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const REMOTE: FlagLabels = FlagLabels::new("Remote", "On-site").with_off_tone(Tone::Neutral);

/// Columns, search and filters of the jobs table
pub fn job_table_spec() -> TableSpec<Job> {
    TableSpec::new("Job", "Jobs", JOBS_COLLECTION, |j: &Job| j.id.clone())
        .search("Search by job title...", |j| Some(j.title.clone()))
        .label(|j| j.title.clone())
        .column(Column::new("title", "Job Title", |j: &Job| {
            CellValue::text(&j.title)
        }))
        .column(Column::new("company", "Company", |j: &Job| {
            CellValue::text_or_missing(j.company.as_ref().map(|c| c.name.as_str()))
        }))
        .column(Column::new("location", "Location", |j: &Job| {
            CellValue::text_or_missing(j.company.as_ref().map(|c| c.location.as_str()))
        }))
        .column(Column::new("salary", "Salary", |j: &Job| {
            j.salary
                .as_ref()
                .and_then(|s| {
                    s.bounds().map(|(min, max)| CellValue::Money {
                        currency: s.currency.clone(),
                        min,
                        max,
                    })
                })
                .unwrap_or(CellValue::Missing)
        }))
        .column(Column::new("employmentType", "Type", |j: &Job| {
            CellValue::text(&j.employment_type)
        }))
        .column(Column::new("experienceLevel", "Experience", |j: &Job| {
            CellValue::text(&j.experience_level)
        }))
        .column(Column::new("isRemote", "Remote", |j: &Job| {
            CellValue::Flag(j.is_remote, REMOTE)
        }))
        .column(Column::new("postedDate", "Posted Date", |j: &Job| {
            CellValue::date_or_missing(j.posted_date.as_deref())
        }))
        .column(
            Column::new("deadline", "Deadline", |j: &Job| {
                CellValue::date_or_missing(j.deadline.as_deref())
            })
            .hidden(),
        )
        .column(
            Column::new("tags", "Tags", |j: &Job| CellValue::Joined(j.tags.clone(), ""))
                .unsortable()
                .hidden(),
        )
        .filter(FilterDef::new(
            "remote",
            "Remote",
            vec![("remote", "Remote"), ("onsite", "On-site")],
            |j: &Job| Some(if j.is_remote { "remote" } else { "onsite" }.to_string()),
        ))
        .filter(FilterDef::new(
            "employmentType",
            "Employment Type",
            vec![
                ("fulltime", "Full-time"),
                ("parttime", "Part-time"),
                ("contract", "Contract"),
            ],
            |j: &Job| Some(employment_type_key(&j.employment_type)),
        ))
        .filter(FilterDef::new(
            "active",
            "Status",
            vec![("active", "Active"), ("inactive", "Inactive")],
            |j: &Job| {
                j.is_active
                    .map(|active| if active { "active" } else { "inactive" }.to_string())
            },
        ))
        .default_sort("title")
}

#[component]
pub fn JobList() -> impl IntoView {
    let loader = use_loader("jobs", fetch_jobs);
    let adding = RwSignal::new(false);

    let on_created = Callback::new(move |_: ()| {
        adding.set(false);
        loader.reload.run(());
    });

    let toolbar = ChildrenFn::to_children(move || {
        view! {
            <Button appearance=ButtonAppearance::Primary on_click=move |_| adding.set(true)>
                {icon("plus")}
                " Add New"
            </Button>
        }
    });

    view! {
        <PageFrame
            page_id="a001_job--list"
            category=PAGE_CAT_LIST
            title="Jobs"
            error=loader.error
            loading=loader.loading
            on_refresh=loader.reload
        >
            <DataTable
                spec=job_table_spec()
                records=loader.records
                loading=loader.loading
                on_changed=loader.reload
                details=Callback::new(|job: Job| view! { <JobDetails job=job /> }.into_any())
                toolbar=toolbar
            />
            <Show when=move || adding.get()>
                <Modal
                    title="Create Job Listing"
                    class="modal--wide"
                    on_close=Callback::new(move |_| adding.set(false))
                >
                    <AddJobForm on_created=on_created />
                </Modal>
            </Show>
        </PageFrame>
    }
}
