use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::handlers::jobs::PostJobInput;
use crate::prelude::Result;

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: &PostJobInput, posted_by: i32) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, description, salary, location, company, posted_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, salary, location, company, posted_by, created_at
            "#,
        )
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.salary)
        .bind(&job.location)
        .bind(&job.company)
        .bind(posted_by)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
