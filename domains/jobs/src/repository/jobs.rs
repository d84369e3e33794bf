//! Job repository
//!
//! All listing queries eagerly join the owning company so callers
//! always receive fully populated aggregates. Ordering is newest-first
//! by posted date with the insertion sequence as a stable tie-break.

use crate::domain::entities::{Company, Job, JobFilters, JobSector, JobWithCompany, WorkType};
use chrono::{DateTime, Utc};
use greenjobs_common::Result;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// How many jobs the featured listing returns
const FEATURED_LIMIT: i64 = 4;

/// Flat row for the jobs-with-company join
#[derive(sqlx::FromRow)]
struct JobWithCompanyRow {
    id: Uuid,
    title: String,
    location: String,
    sector: JobSector,
    work_type: WorkType,
    salary_min: f64,
    salary_max: f64,
    posted_date: DateTime<Utc>,
    description: String,
    responsibilities: Json<Vec<String>>,
    qualifications: Json<Vec<String>>,
    is_third_party: bool,
    redirect_url: Option<String>,
    company_id: Uuid,
    company_name: String,
    company_logo: String,
    company_description: String,
    company_website: String,
    company_is_verified: bool,
}

impl From<JobWithCompanyRow> for JobWithCompany {
    fn from(row: JobWithCompanyRow) -> Self {
        JobWithCompany {
            job: Job {
                id: row.id,
                title: row.title,
                location: row.location,
                sector: row.sector,
                work_type: row.work_type,
                salary_min: row.salary_min,
                salary_max: row.salary_max,
                posted_date: row.posted_date,
                description: row.description,
                responsibilities: row.responsibilities,
                qualifications: row.qualifications,
                is_third_party: row.is_third_party,
                redirect_url: row.redirect_url,
                company_id: row.company_id,
            },
            company: Company {
                id: row.company_id,
                name: row.company_name,
                logo: row.company_logo,
                description: row.company_description,
                website: row.company_website,
                is_verified: row.company_is_verified,
            },
        }
    }
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List jobs with optional conjunctive filters.
    ///
    /// Title and location match case-insensitive substrings; sector and
    /// work type match exactly. Fully materialized before return.
    pub async fn list(&self, filters: &JobFilters) -> Result<Vec<JobWithCompany>> {
        let rows: Vec<JobWithCompanyRow> = sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.location, j.sector, j.work_type,
                   j.salary_min, j.salary_max, j.posted_date, j.description,
                   j.responsibilities, j.qualifications, j.is_third_party, j.redirect_url,
                   j.company_id,
                   c.name AS company_name, c.logo AS company_logo,
                   c.description AS company_description, c.website AS company_website,
                   c.is_verified AS company_is_verified
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            WHERE ($1::text IS NULL OR j.title ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR j.location ILIKE '%' || $2 || '%')
              AND ($3::job_sector IS NULL OR j.sector = $3)
              AND ($4::work_type IS NULL OR j.work_type = $4)
            ORDER BY j.posted_date DESC, j.seq ASC
            "#,
        )
        .bind(&filters.title)
        .bind(&filters.location)
        .bind(filters.sector)
        .bind(filters.work_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobWithCompany::from).collect())
    }

    /// The newest jobs, capped for the landing page
    pub async fn featured(&self) -> Result<Vec<JobWithCompany>> {
        let rows: Vec<JobWithCompanyRow> = sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.location, j.sector, j.work_type,
                   j.salary_min, j.salary_max, j.posted_date, j.description,
                   j.responsibilities, j.qualifications, j.is_third_party, j.redirect_url,
                   j.company_id,
                   c.name AS company_name, c.logo AS company_logo,
                   c.description AS company_description, c.website AS company_website,
                   c.is_verified AS company_is_verified
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            ORDER BY j.posted_date DESC, j.seq ASC
            LIMIT $1
            "#,
        )
        .bind(FEATURED_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobWithCompany::from).collect())
    }

    /// Find a job with its company by ID
    pub async fn find_with_company(&self, id: Uuid) -> Result<Option<JobWithCompany>> {
        let row: Option<JobWithCompanyRow> = sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.location, j.sector, j.work_type,
                   j.salary_min, j.salary_max, j.posted_date, j.description,
                   j.responsibilities, j.qualifications, j.is_third_party, j.redirect_url,
                   j.company_id,
                   c.name AS company_name, c.logo AS company_logo,
                   c.description AS company_description, c.website AS company_website,
                   c.is_verified AS company_is_verified
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            WHERE j.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(JobWithCompany::from))
    }

    /// Find a bare job by ID (no join)
    pub async fn find(&self, id: Uuid) -> Result<Option<Job>> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, location, sector, work_type,
                   salary_min, salary_max, posted_date, description,
                   responsibilities, qualifications, is_third_party, redirect_url,
                   company_id
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(job)
    }

    /// List all jobs belonging to one company, newest first
    pub async fn list_for_company(&self, company_id: Uuid) -> Result<Vec<JobWithCompany>> {
        let rows: Vec<JobWithCompanyRow> = sqlx::query_as(
            r#"
            SELECT j.id, j.title, j.location, j.sector, j.work_type,
                   j.salary_min, j.salary_max, j.posted_date, j.description,
                   j.responsibilities, j.qualifications, j.is_third_party, j.redirect_url,
                   j.company_id,
                   c.name AS company_name, c.logo AS company_logo,
                   c.description AS company_description, c.website AS company_website,
                   c.is_verified AS company_is_verified
            FROM jobs j
            INNER JOIN companies c ON c.id = j.company_id
            WHERE j.company_id = $1
            ORDER BY j.posted_date DESC, j.seq ASC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(JobWithCompany::from).collect())
    }
}
