use contracts::domain::a001_job::{CreateJobDto, Job, JobsResponse};

use crate::shared::api_utils::{ApiClient, ApiError};

/// REST collection of job postings
pub const JOBS_COLLECTION: &str = "jobs";

/// Fetch every job posting; the endpoint wraps the list in `{ jobs: [...] }`
pub async fn fetch_jobs(api: ApiClient) -> Result<Vec<Job>, ApiError> {
    let response: JobsResponse = api.get_json("/jobs/").await?;
    Ok(response.jobs)
}

pub async fn create_job(api: &ApiClient, dto: &CreateJobDto) -> Result<(), ApiError> {
    log::info!("POST /{} \"{}\"", JOBS_COLLECTION, dto.title);
    api.post_json(&format!("/{}", JOBS_COLLECTION), dto).await
}
