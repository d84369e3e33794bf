//! Admin stats API handler
//!
//! Implements:
//! - GET /api/admin/stats - Aggregate counters plus redirect clicks

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use greenjobs_auth::AdminUser;
use greenjobs_common::Result;

use crate::api::middleware::JobsState;
use crate::domain::entities::RedirectStat;

/// Redirect stat payload for the admin dashboard
#[derive(Debug, Serialize)]
pub struct RedirectStatResponse {
    #[serde(rename = "jobId")]
    pub job_id: Uuid,
    #[serde(rename = "jobTitle")]
    pub job_title: String,
    pub clicks: i64,
}

impl From<RedirectStat> for RedirectStatResponse {
    fn from(stat: RedirectStat) -> Self {
        Self {
            job_id: stat.job_id,
            job_title: stat.job_title,
            clicks: stat.clicks,
        }
    }
}

/// Response shape for `GET /api/admin/stats`
#[derive(Debug, Serialize)]
pub struct AdminStatsResponse {
    #[serde(rename = "totalJobs")]
    pub total_jobs: i64,
    #[serde(rename = "totalCompanies")]
    pub total_companies: i64,
    #[serde(rename = "totalUsers")]
    pub total_users: i64,
    pub redirects: Vec<RedirectStatResponse>,
}

/// GET /api/admin/stats - Aggregate counters plus redirect clicks
pub async fn admin_stats(
    AdminUser(_auth_context): AdminUser,
    State(state): State<JobsState>,
) -> Result<Json<AdminStatsResponse>> {
    let total_jobs = state.repos.stats.count_jobs().await?;
    let total_companies = state.repos.stats.count_companies().await?;
    let total_users = state.repos.stats.count_users().await?;
    let redirects = state.repos.redirect_stats.list().await?;

    Ok(Json(AdminStatsResponse {
        total_jobs,
        total_companies,
        total_users,
        redirects: redirects
            .into_iter()
            .map(RedirectStatResponse::from)
            .collect(),
    }))
}
