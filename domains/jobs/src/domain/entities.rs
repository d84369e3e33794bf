//! Domain entities for the jobs domain
//!
//! Jobs and redirect stats, plus a lightweight company read model over
//! the accounts-owned table so listings always return fully populated
//! aggregates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use uuid::Uuid;

/// Job sectors.
///
/// Fixed set; the wire values are the display strings. Unknown values
/// are rejected at the serde and sqlx boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_sector")]
pub enum JobSector {
    #[serde(rename = "Renewable Energy")]
    #[sqlx(rename = "Renewable Energy")]
    RenewableEnergy,
    #[serde(rename = "Sustainability Consulting")]
    #[sqlx(rename = "Sustainability Consulting")]
    SustainabilityConsulting,
    Conservation,
    #[serde(rename = "ESG")]
    #[sqlx(rename = "ESG")]
    Esg,
    #[serde(rename = "Non-Profit")]
    #[sqlx(rename = "Non-Profit")]
    NonProfit,
    #[serde(rename = "Green Tech")]
    #[sqlx(rename = "Green Tech")]
    GreenTech,
}

/// Work arrangement for a job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "work_type")]
pub enum WorkType {
    Remote,
    Hybrid,
    #[serde(rename = "On-site")]
    #[sqlx(rename = "On-site")]
    OnSite,
}

/// Job entity.
///
/// The salary range is stored as-is; a minimum above the maximum is not
/// rejected anywhere. `redirect_url` is present iff the posting is
/// third-party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub sector: JobSector,
    pub work_type: WorkType,
    pub salary_min: f64,
    pub salary_max: f64,
    pub posted_date: DateTime<Utc>,
    pub description: String,
    pub responsibilities: Json<Vec<String>>,
    pub qualifications: Json<Vec<String>>,
    pub is_third_party: bool,
    pub redirect_url: Option<String>,
    pub company_id: Uuid,
}

/// Lightweight company read model.
///
/// The accounts domain owns the `companies` table; listings only need
/// the public fields, read here CQRS-style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub website: String,
    pub is_verified: bool,
}

/// A job with its owning company eagerly joined
#[derive(Debug, Clone, PartialEq)]
pub struct JobWithCompany {
    pub job: Job,
    pub company: Company,
}

/// Redirect click counter for a third-party posting.
///
/// One row per job, created lazily on the first click. The title is a
/// snapshot captured at that first click and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RedirectStat {
    pub id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub clicks: i64,
}

/// Optional listing filters, combined conjunctively.
///
/// Title and location are case-insensitive substring matches; sector
/// and work type are exact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilters {
    pub title: Option<String>,
    pub location: Option<String>,
    pub sector: Option<JobSector>,
    pub work_type: Option<WorkType>,
}
