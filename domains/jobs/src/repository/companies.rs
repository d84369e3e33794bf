//! Company read-model queries
//!
//! The accounts domain owns the `companies` table; this repository only
//! reads the public fields needed by job listings and the company page.

use crate::domain::entities::Company;
use greenjobs_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a company by ID
    pub async fn find(&self, id: Uuid) -> Result<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT id, name, logo, description, website, is_verified
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(company)
    }
}
