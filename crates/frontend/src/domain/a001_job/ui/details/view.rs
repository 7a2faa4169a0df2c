use contracts::domain::a001_job::Job;
use leptos::prelude::*;

use crate::shared::components::ui::Badge;
use crate::shared::data_table::{Tone, NOT_AVAILABLE};
use crate::shared::date_utils::format_local_date;

fn bullet_list(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <section class="details__section">
                <h3 class="details__section-title">{title}</h3>
                <ul class="cell-list">
                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
                </ul>
            </section>
        }
    })
}

#[component]
pub fn JobDetails(job: Job) -> impl IntoView {
    let company = job
        .company
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let location = job
        .company
        .as_ref()
        .map(|c| c.location.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let salary = job
        .salary
        .as_ref()
        .and_then(|s| s.bounds().map(|(min, max)| format!("{} {} - {}", s.currency, min, max)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let deadline = job
        .deadline
        .as_deref()
        .map(format_local_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let (remote_tone, remote_label) = if job.is_remote {
        (Tone::Success, "Remote")
    } else {
        (Tone::Neutral, "On-site")
    };
    let description = job.job_description;
    let tags = job.tags;

    view! {
        <div class="job-details">
            <div class="job-details__header">
                <h2 class="job-details__title">{job.title}</h2>
                <Badge tone=remote_tone>{remote_label}</Badge>
            </div>
            <dl class="details">
                <div class="details__row">
                    <dt class="details__label">"Company"</dt>
                    <dd class="details__value">{company}</dd>
                </div>
                <div class="details__row">
                    <dt class="details__label">"Location"</dt>
                    <dd class="details__value">{location}</dd>
                </div>
                <div class="details__row">
                    <dt class="details__label">"Salary"</dt>
                    <dd class="details__value">{salary}</dd>
                </div>
                <div class="details__row">
                    <dt class="details__label">"Type"</dt>
                    <dd class="details__value">{job.employment_type}</dd>
                </div>
                <div class="details__row">
                    <dt class="details__label">"Experience"</dt>
                    <dd class="details__value">{job.experience_level}</dd>
                </div>
                <div class="details__row">
                    <dt class="details__label">"Deadline"</dt>
                    <dd class="details__value">{deadline}</dd>
                </div>
            </dl>
            {(!description.is_empty()).then(move || view! {
                <p class="job-details__description">{description}</p>
            })}
            {bullet_list("Requirements", job.requirements)}
            {bullet_list("Responsibilities", job.responsibilities)}
            {bullet_list("Benefits", job.benefits)}
            {(!tags.is_empty()).then(move || view! {
                <div class="job-details__tags">
                    {tags.into_iter().map(|tag| view! { <Badge tone=Tone::Neutral>{tag}</Badge> }).collect_view()}
                </div>
            })}
        </div>
    }
}
