//! Redirect stat repository
//!
//! The click counter is incremented with a single atomic upsert so
//! concurrent clicks on the same job never lose updates.

use crate::domain::entities::RedirectStat;
use greenjobs_common::Result;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct RedirectStatRepository {
    pool: PgPool,
}

impl RedirectStatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record one click for a job.
    ///
    /// First click creates the row with `clicks = 1` and the title
    /// snapshot; later clicks only increment the counter. The title is
    /// never rewritten, even if the job is renamed.
    pub async fn record_click(&self, job_id: Uuid, job_title: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO redirect_stats (id, job_id, job_title, clicks)
            VALUES ($1, $2, $3, 1)
            ON CONFLICT (job_id)
            DO UPDATE SET clicks = redirect_stats.clicks + 1
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(job_id)
        .bind(job_title)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// List all redirect stats
    pub async fn list(&self) -> Result<Vec<RedirectStat>> {
        let stats = sqlx::query_as::<_, RedirectStat>(
            r#"
            SELECT id, job_id, job_title, clicks
            FROM redirect_stats
            ORDER BY job_title ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stats)
    }

    /// Find the stat row for one job
    pub async fn find_by_job(&self, job_id: Uuid) -> Result<Option<RedirectStat>> {
        let stat = sqlx::query_as::<_, RedirectStat>(
            r#"
            SELECT id, job_id, job_title, clicks
            FROM redirect_stats
            WHERE job_id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(stat)
    }
}
