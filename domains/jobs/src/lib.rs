//! Jobs domain: job listings, filtering, redirect tracking, admin stats

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
// Re-export repository types
pub use repository::{
    CompanyRepository, JobRepository, JobsRepositories, RedirectStatRepository, StatsRepository,
};

// Re-export API types
pub use api::routes;
pub use api::JobsState;
