use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Company block embedded in a job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
}

/// Salary range of a job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub currency: String,
}

impl SalaryRange {
    pub fn new(min: f64, max: f64, currency: impl Into<String>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            currency: currency.into(),
        }
    }

    /// Both bounds, or `None` when the stored range is incomplete
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.min?, self.max?))
    }
}

/// Job posting as returned by `GET /jobs/`
///
/// Nested blocks are optional: older postings in the store may lack them and
/// the list must still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: Option<Company>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub employment_type: String,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub posted_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Envelope of the jobs list endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsResponse {
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// Payload of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub company: Company,
    pub job_description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub employment_type: String,
    pub experience_level: String,
    pub salary: SalaryRange,
    pub benefits: Vec<String>,
    pub is_remote: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub tags: Vec<String>,
}

pub const EMPLOYMENT_TYPES: &[&str] = &["Full-time", "Part-time", "Contract"];
pub const EXPERIENCE_LEVELS: &[&str] = &["Entry level", "Mid level", "Senior level"];
pub const CURRENCIES: &[&str] = &["USD", "EUR", "GBP"];

/// Normalised key of an employment type, as used by the list filter
/// ("Full-time" -> "fulltime").
pub fn employment_type_key(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_with_missing_nested_blocks_deserializes() {
        let json = r#"{ "_id": "j1", "title": "Rust dev", "company": null }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.id, "j1");
        assert!(job.company.is_none());
        assert!(job.salary.is_none());
        assert!(job.requirements.is_empty());
        assert!(!job.is_remote);
    }

    #[test]
    fn test_jobs_envelope() {
        let json = r#"{ "jobs": [
            { "_id": "a", "title": "One", "isRemote": true, "employmentType": "Full-time",
              "salary": { "min": 10, "max": 20, "currency": "USD" } }
        ] }"#;
        let response: JobsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.jobs.len(), 1);
        assert!(response.jobs[0].is_remote);
        assert_eq!(response.jobs[0].salary.as_ref().unwrap().max, Some(20.0));
    }

    #[test]
    fn test_partial_salary_keeps_the_list() {
        let json = r#"{ "jobs": [
            { "_id": "a", "title": "One", "salary": { "min": 10, "max": 20, "currency": "USD" } },
            { "_id": "b", "title": "Two", "salary": { "currency": "USD" } }
        ] }"#;
        let response: JobsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.jobs.len(), 2);
        let first = response.jobs[0].salary.as_ref().unwrap();
        let second = response.jobs[1].salary.as_ref().unwrap();
        assert_eq!(first.bounds(), Some((10.0, 20.0)));
        assert_eq!(second.bounds(), None);
        assert_eq!(second.currency, "USD");
    }

    #[test]
    fn test_create_dto_uses_backend_field_names() {
        let dto = CreateJobDto {
            title: "T".into(),
            company: Company { name: "C".into(), location: "L".into() },
            job_description: String::new(),
            requirements: vec![],
            responsibilities: vec![],
            employment_type: "Contract".into(),
            experience_level: "Mid level".into(),
            salary: SalaryRange::new(1.0, 2.0, "EUR"),
            benefits: vec![],
            is_remote: false,
            deadline: NaiveDate::from_ymd_opt(2025, 1, 31),
            tags: vec!["rust".into()],
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["jobDescription"], "");
        assert_eq!(value["employmentType"], "Contract");
        assert_eq!(value["isRemote"], false);
        assert_eq!(value["deadline"], "2025-01-31");
        assert_eq!(value["salary"]["min"], 1.0);
    }

    #[test]
    fn test_employment_type_key() {
        assert_eq!(employment_type_key("Full-time"), "fulltime");
        assert_eq!(employment_type_key("Part-time"), "parttime");
        assert_eq!(employment_type_key("Contract"), "contract");
    }
}
