//! Repository implementations for the jobs domain

pub mod companies;
pub mod jobs;
pub mod redirect_stats;
pub mod stats;

use sqlx::PgPool;

pub use companies::CompanyRepository;
pub use jobs::JobRepository;
pub use redirect_stats::RedirectStatRepository;
pub use stats::StatsRepository;

/// Combined repository access for the jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pub jobs: JobRepository,
    pub companies: CompanyRepository,
    pub redirect_stats: RedirectStatRepository,
    pub stats: StatsRepository,
}

impl JobsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            jobs: JobRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool.clone()),
            redirect_stats: RedirectStatRepository::new(pool.clone()),
            stats: StatsRepository::new(pool),
        }
    }
}
