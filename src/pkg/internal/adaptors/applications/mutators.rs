use sqlx::PgConnection;

use crate::pkg::internal::adaptors::applications::spec::ApplicationEntry;
use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    /// Inserts the application; the UNIQUE (job_id, user_id) constraint
    /// rejects a duplicate that raced past the caller's existence check.
    pub async fn create(&mut self, job_id: i32, user_id: i32) -> Result<ApplicationEntry> {
        let row = sqlx::query_as::<_, ApplicationEntry>(
            r#"
            INSERT INTO applications (job_id, user_id)
            VALUES ($1, $2)
            RETURNING id, job_id, user_id, created_at
            "#,
        )
        .bind(job_id)
        .bind(user_id)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
