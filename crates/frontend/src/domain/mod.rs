pub mod a001_job;
pub mod a002_plan;
pub mod a003_subscription;
