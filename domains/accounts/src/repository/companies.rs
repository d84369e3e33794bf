//! Company repository

use crate::domain::entities::Company;
use greenjobs_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new company (inline creation during employer registration)
    pub async fn create(&self, company: &Company) -> Result<Company> {
        let row = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (id, name, logo, description, website, is_verified, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, logo, description, website, is_verified, created_at
            "#,
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.logo)
        .bind(&company.description)
        .bind(&company.website)
        .bind(company.is_verified)
        .bind(company.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
