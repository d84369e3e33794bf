//! Job listing API handlers
//!
//! Implements:
//! - GET /api/jobs - Filtered job listing
//! - GET /api/jobs/featured - Newest jobs, capped at four
//! - GET /api/jobs/{job_id} - Single job with company
//! - GET /api/companies/{company_id} - Company page payload
//! - POST /api/jobs/{job_id}/track-redirect - Count a click-through
//! - GET /api/employer/jobs - Listing scoped to the caller's company

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use greenjobs_auth::EmployerUser;
use greenjobs_common::{Error, Result};

use crate::api::middleware::JobsState;
use crate::domain::entities::{Company, JobFilters, JobSector, JobWithCompany, WorkType};

/// Company payload nested in job responses
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub website: String,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            logo: company.logo,
            description: company.description,
            website: company.website,
            is_verified: company.is_verified,
        }
    }
}

/// Job response DTO.
///
/// The camelCase field names are the wire contract and must not change.
#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub id: Uuid,
    pub title: String,
    pub location: String,
    pub sector: JobSector,
    #[serde(rename = "workType")]
    pub work_type: WorkType,
    #[serde(rename = "salaryRange")]
    pub salary_range: [f64; 2],
    #[serde(rename = "postedDate")]
    pub posted_date: DateTime<Utc>,
    pub description: String,
    pub responsibilities: Vec<String>,
    pub qualifications: Vec<String>,
    #[serde(rename = "isThirdParty")]
    pub is_third_party: bool,
    #[serde(rename = "redirectUrl")]
    pub redirect_url: Option<String>,
    pub company: CompanyResponse,
}

impl From<JobWithCompany> for JobResponse {
    fn from(entry: JobWithCompany) -> Self {
        let JobWithCompany { job, company } = entry;
        Self {
            id: job.id,
            title: job.title,
            location: job.location,
            sector: job.sector,
            work_type: job.work_type,
            salary_range: [job.salary_min, job.salary_max],
            posted_date: job.posted_date,
            description: job.description,
            responsibilities: job.responsibilities.0,
            qualifications: job.qualifications.0,
            is_third_party: job.is_third_party,
            redirect_url: job.redirect_url,
            company: company.into(),
        }
    }
}

/// Query parameters for listing jobs.
///
/// All optional and ANDed together; unknown sector or work-type strings
/// are rejected by the extractor with 400.
#[derive(Debug, Deserialize)]
pub struct ListJobsParams {
    pub title: Option<String>,
    pub location: Option<String>,
    pub sector: Option<JobSector>,
    #[serde(rename = "workType")]
    pub work_type: Option<WorkType>,
}

impl From<ListJobsParams> for JobFilters {
    fn from(params: ListJobsParams) -> Self {
        JobFilters {
            title: params.title,
            location: params.location,
            sector: params.sector,
            work_type: params.work_type,
        }
    }
}

/// GET /api/jobs - Filtered job listing, newest first
pub async fn list_jobs(
    State(state): State<JobsState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<Vec<JobResponse>>> {
    let jobs = state.repos.jobs.list(&params.into()).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// GET /api/jobs/featured - Newest jobs, capped at four
pub async fn featured_jobs(State(state): State<JobsState>) -> Result<Json<Vec<JobResponse>>> {
    let jobs = state.repos.jobs.featured().await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// GET /api/jobs/{job_id} - Single job with company
pub async fn get_job(
    State(state): State<JobsState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobResponse>> {
    let job = state
        .repos
        .jobs
        .find_with_company(job_id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

    Ok(Json(job.into()))
}

/// GET /api/companies/{company_id} - Company page payload
pub async fn get_company(
    State(state): State<JobsState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<CompanyResponse>> {
    let company = state
        .repos
        .companies
        .find(company_id)
        .await?
        .ok_or_else(|| Error::NotFound("Company not found".to_string()))?;

    Ok(Json(company.into()))
}

/// POST /api/jobs/{job_id}/track-redirect - Count a click-through
///
/// The counter update is a single atomic upsert; concurrent clicks on
/// the same job all land.
pub async fn track_redirect(
    State(state): State<JobsState>,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode> {
    let job = state
        .repos
        .jobs
        .find(job_id)
        .await?
        .ok_or_else(|| Error::NotFound("Job not found".to_string()))?;

    state
        .repos
        .redirect_stats
        .record_click(job.id, &job.title)
        .await?;

    tracing::debug!(job_id = %job.id, "Redirect click recorded");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/employer/jobs - Listing scoped to the caller's company
///
/// An employer with no associated company gets an empty listing, not an
/// error.
pub async fn employer_jobs(
    EmployerUser(auth_context): EmployerUser,
    State(state): State<JobsState>,
) -> Result<Json<Vec<JobResponse>>> {
    let Some(company_id) = auth_context.user.company_id else {
        return Ok(Json(Vec::new()));
    };

    let jobs = state.repos.jobs.list_for_company(company_id).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}
