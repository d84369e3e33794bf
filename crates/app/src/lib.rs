//! Green Jobs application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use greenjobs_accounts::{AccountsRepositories, AccountsState};
use greenjobs_auth::{AuthBackend, AuthConfig};
use greenjobs_common::Config;
use greenjobs_jobs::{JobsRepositories, JobsState};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // One auth backend shared by every domain
    let auth = AuthBackend::new(pool.clone(), AuthConfig::from_config(&config));

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: auth.clone(),
    };

    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth,
    };

    // Build router: compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Green Jobs API v0.1.0" }),
        )
        .merge(greenjobs_accounts::routes().with_state(accounts_state))
        .merge(greenjobs_jobs::routes().with_state(jobs_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
