use contracts::domain::a001_job::{CURRENCIES, EMPLOYMENT_TYPES, EXPERIENCE_LEVELS};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use super::view_model::JobFormViewModel;
use crate::shared::api_utils::use_api;
use crate::shared::components::ui::{CheckboxField, SelectField, TextArea, TextField};
use crate::shared::notifications::use_notifications;

fn options(values: &[&str]) -> Vec<(String, String)> {
    values
        .iter()
        .map(|v| (v.to_string(), v.to_string()))
        .collect()
}

#[component]
pub fn AddJobForm(
    /// Called once the backend accepted the new posting
    on_created: Callback<()>,
) -> impl IntoView {
    let api = use_api();
    let notices = use_notifications();
    let vm = JobFormViewModel::new();

    view! {
        <div class="form job-form">
            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__grid form__grid--2">
                <TextField label="Job Title" value=vm.title required=true id="job-title" />
                <TextField label="Company Name" value=vm.company_name required=true id="job-company" />
                <TextField label="Company Location" value=vm.company_location id="job-location" />
                <SelectField
                    label="Employment Type"
                    value=vm.employment_type
                    on_change=Callback::new(move |v: String| vm.employment_type.set(v))
                    options=options(EMPLOYMENT_TYPES)
                    id="job-employment-type"
                />
                <SelectField
                    label="Experience Level"
                    value=vm.experience_level
                    on_change=Callback::new(move |v: String| vm.experience_level.set(v))
                    options=options(EXPERIENCE_LEVELS)
                    id="job-experience-level"
                />
                <TextField
                    label="Application Deadline"
                    value=vm.deadline
                    input_type="date"
                    id="job-deadline"
                />
            </div>

            <TextArea label="Job Description" value=vm.job_description rows=4 id="job-description" />

            <div class="form__grid form__grid--2">
                <TextArea
                    label="Requirements"
                    hint="One per line"
                    value=vm.requirements
                    rows=4
                    id="job-requirements"
                />
                <TextArea
                    label="Responsibilities"
                    hint="One per line"
                    value=vm.responsibilities
                    rows=4
                    id="job-responsibilities"
                />
            </div>

            <div class="form__grid form__grid--3">
                <TextField
                    label="Minimum Salary"
                    value=vm.salary_min
                    input_type="number"
                    required=true
                    id="job-salary-min"
                />
                <TextField
                    label="Maximum Salary"
                    value=vm.salary_max
                    input_type="number"
                    required=true
                    id="job-salary-max"
                />
                <SelectField
                    label="Currency"
                    value=vm.salary_currency
                    on_change=Callback::new(move |v: String| vm.salary_currency.set(v))
                    options=options(CURRENCIES)
                    id="job-currency"
                />
            </div>

            <TextArea label="Benefits" hint="One per line" value=vm.benefits rows=3 id="job-benefits" />

            <div class="form__grid form__grid--2">
                <CheckboxField label="Remote Job" checked=vm.is_remote id="job-remote" />
                <TextField
                    label="Tags"
                    placeholder="rust, remote, senior"
                    value=vm.tags
                    id="job-tags"
                />
            </div>

            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(api.clone(), notices, on_created)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Create Job Listing" }}
                </Button>
            </div>
        </div>
    }
}
