use chrono::NaiveDate;
use contracts::domain::a001_job::{
    Company, CreateJobDto, SalaryRange, CURRENCIES, EMPLOYMENT_TYPES, EXPERIENCE_LEVELS,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_job::api::create_job;
use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::parse_date;
use crate::shared::notifications::NotificationService;

/// Plain snapshot of the create form, as typed by the user
#[derive(Debug, Clone, PartialEq)]
pub struct JobForm {
    pub title: String,
    pub company_name: String,
    pub company_location: String,
    pub job_description: String,
    /// One entry per line
    pub requirements: String,
    pub responsibilities: String,
    pub benefits: String,
    pub employment_type: String,
    pub experience_level: String,
    pub salary_min: String,
    pub salary_max: String,
    pub salary_currency: String,
    pub is_remote: bool,
    /// `YYYY-MM-DD` from the date input, empty when unset
    pub deadline: String,
    /// Comma separated
    pub tags: String,
}

impl Default for JobForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            company_name: String::new(),
            company_location: String::new(),
            job_description: String::new(),
            requirements: String::new(),
            responsibilities: String::new(),
            benefits: String::new(),
            employment_type: EMPLOYMENT_TYPES[0].to_string(),
            experience_level: EXPERIENCE_LEVELS[0].to_string(),
            salary_min: String::new(),
            salary_max: String::new(),
            salary_currency: CURRENCIES[0].to_string(),
            is_remote: false,
            deadline: String::new(),
            tags: String::new(),
        }
    }
}

fn split_lines(value: &str) -> Vec<String> {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn split_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

fn parse_salary(value: &str, which: &str) -> Result<i64, String> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("{} salary must be a whole number", which))
}

impl JobForm {
    /// Validate the input and build the request body
    pub fn assemble(&self) -> Result<CreateJobDto, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Job title is required".to_string());
        }
        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            return Err("Company name is required".to_string());
        }

        let min = parse_salary(&self.salary_min, "Minimum")?;
        let max = parse_salary(&self.salary_max, "Maximum")?;
        if min > max {
            return Err("Minimum salary cannot exceed maximum salary".to_string());
        }

        let deadline: Option<NaiveDate> = match self.deadline.trim() {
            "" => None,
            value => Some(parse_date(value).ok_or_else(|| "Deadline must be a valid date".to_string())?),
        };

        Ok(CreateJobDto {
            title: title.to_string(),
            company: Company {
                name: company_name.to_string(),
                location: self.company_location.trim().to_string(),
            },
            job_description: self.job_description.trim().to_string(),
            requirements: split_lines(&self.requirements),
            responsibilities: split_lines(&self.responsibilities),
            employment_type: self.employment_type.clone(),
            experience_level: self.experience_level.clone(),
            salary: SalaryRange::new(min as f64, max as f64, self.salary_currency.clone()),
            benefits: split_lines(&self.benefits),
            is_remote: self.is_remote,
            deadline,
            tags: split_tags(&self.tags),
        })
    }
}

/// Reactive state of the "Add New" modal
#[derive(Clone, Copy)]
pub struct JobFormViewModel {
    pub title: RwSignal<String>,
    pub company_name: RwSignal<String>,
    pub company_location: RwSignal<String>,
    pub job_description: RwSignal<String>,
    pub requirements: RwSignal<String>,
    pub responsibilities: RwSignal<String>,
    pub benefits: RwSignal<String>,
    pub employment_type: RwSignal<String>,
    pub experience_level: RwSignal<String>,
    pub salary_min: RwSignal<String>,
    pub salary_max: RwSignal<String>,
    pub salary_currency: RwSignal<String>,
    pub is_remote: RwSignal<bool>,
    pub deadline: RwSignal<String>,
    pub tags: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl JobFormViewModel {
    pub fn new() -> Self {
        let initial = JobForm::default();
        Self {
            title: RwSignal::new(initial.title),
            company_name: RwSignal::new(initial.company_name),
            company_location: RwSignal::new(initial.company_location),
            job_description: RwSignal::new(initial.job_description),
            requirements: RwSignal::new(initial.requirements),
            responsibilities: RwSignal::new(initial.responsibilities),
            benefits: RwSignal::new(initial.benefits),
            employment_type: RwSignal::new(initial.employment_type),
            experience_level: RwSignal::new(initial.experience_level),
            salary_min: RwSignal::new(initial.salary_min),
            salary_max: RwSignal::new(initial.salary_max),
            salary_currency: RwSignal::new(initial.salary_currency),
            is_remote: RwSignal::new(initial.is_remote),
            deadline: RwSignal::new(initial.deadline),
            tags: RwSignal::new(initial.tags),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn snapshot(&self) -> JobForm {
        JobForm {
            title: self.title.get_untracked(),
            company_name: self.company_name.get_untracked(),
            company_location: self.company_location.get_untracked(),
            job_description: self.job_description.get_untracked(),
            requirements: self.requirements.get_untracked(),
            responsibilities: self.responsibilities.get_untracked(),
            benefits: self.benefits.get_untracked(),
            employment_type: self.employment_type.get_untracked(),
            experience_level: self.experience_level.get_untracked(),
            salary_min: self.salary_min.get_untracked(),
            salary_max: self.salary_max.get_untracked(),
            salary_currency: self.salary_currency.get_untracked(),
            is_remote: self.is_remote.get_untracked(),
            deadline: self.deadline.get_untracked(),
            tags: self.tags.get_untracked(),
        }
    }

    /// Validate and POST; the modal stays open on failure
    pub fn save_command(&self, api: ApiClient, notices: NotificationService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = match self.snapshot().assemble() {
            Ok(dto) => dto,
            Err(message) => {
                self.error.set(Some(message));
                return;
            }
        };

        self.error.set(None);
        self.saving.set(true);
        let saving = self.saving;
        spawn_local(async move {
            match create_job(&api, &dto).await {
                Ok(()) => {
                    notices.success("Job created successfully!");
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create job: {}", e);
                    notices.error("Error creating job");
                }
            }
            saving.try_set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> JobForm {
        JobForm {
            title: "  Rust Engineer ".into(),
            company_name: "Acme".into(),
            company_location: " Berlin ".into(),
            job_description: "Build things".into(),
            requirements: "Rust\n\n  Tokio  \n".into(),
            responsibilities: "Ship code".into(),
            benefits: "".into(),
            salary_min: "50000".into(),
            salary_max: " 70000".into(),
            deadline: "2025-01-31".into(),
            tags: "rust, wasm, ,leptos".into(),
            is_remote: true,
            ..JobForm::default()
        }
    }

    #[test]
    fn test_assemble_splits_and_trims() {
        let dto = filled().assemble().unwrap();
        assert_eq!(dto.title, "Rust Engineer");
        assert_eq!(dto.company.location, "Berlin");
        assert_eq!(dto.requirements, ["Rust", "Tokio"]);
        assert_eq!(dto.responsibilities, ["Ship code"]);
        assert!(dto.benefits.is_empty());
        assert_eq!(dto.tags, ["rust", "wasm", "leptos"]);
        assert_eq!(dto.salary.bounds(), Some((50000.0, 70000.0)));
        assert_eq!(dto.salary.currency, "USD");
        assert_eq!(dto.employment_type, "Full-time");
        assert_eq!(dto.deadline, NaiveDate::from_ymd_opt(2025, 1, 31));
        assert!(dto.is_remote);
    }

    #[test]
    fn test_required_fields() {
        let form = JobForm {
            title: "   ".into(),
            ..filled()
        };
        assert_eq!(form.assemble().unwrap_err(), "Job title is required");

        let form = JobForm {
            company_name: String::new(),
            ..filled()
        };
        assert_eq!(form.assemble().unwrap_err(), "Company name is required");
    }

    #[test]
    fn test_salary_validation() {
        let form = JobForm {
            salary_min: "50k".into(),
            ..filled()
        };
        assert_eq!(
            form.assemble().unwrap_err(),
            "Minimum salary must be a whole number"
        );

        let form = JobForm {
            salary_min: "80000".into(),
            ..filled()
        };
        assert_eq!(
            form.assemble().unwrap_err(),
            "Minimum salary cannot exceed maximum salary"
        );
    }

    #[test]
    fn test_deadline_is_optional() {
        let form = JobForm {
            deadline: String::new(),
            ..filled()
        };
        assert_eq!(form.assemble().unwrap().deadline, None);

        let form = JobForm {
            deadline: "31.01.2025".into(),
            ..filled()
        };
        assert!(form.assemble().is_err());
    }
}
