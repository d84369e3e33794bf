//! Repository implementations for the accounts domain

pub mod companies;
pub mod users;

use sqlx::PgPool;

pub use companies::CompanyRepository;
pub use users::UserRepository;

/// Combined repository access for the accounts domain
#[derive(Clone)]
pub struct AccountsRepositories {
    pub users: UserRepository,
    pub companies: CompanyRepository,
}

impl AccountsRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            companies: CompanyRepository::new(pool),
        }
    }
}
