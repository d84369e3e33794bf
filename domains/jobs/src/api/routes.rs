//! Route definitions for the jobs domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{admin, jobs};
use super::middleware::JobsState;

/// Create job listing routes
fn job_routes() -> Router<JobsState> {
    Router::new()
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/featured", get(jobs::featured_jobs))
        .route("/api/jobs/{job_id}", get(jobs::get_job))
        .route(
            "/api/jobs/{job_id}/track-redirect",
            post(jobs::track_redirect),
        )
        .route("/api/companies/{company_id}", get(jobs::get_company))
        .route("/api/employer/jobs", get(jobs::employer_jobs))
}

/// Create admin routes
fn admin_routes() -> Router<JobsState> {
    Router::new().route("/api/admin/stats", get(admin::admin_stats))
}

/// Create all jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new().merge(job_routes()).merge(admin_routes())
}
