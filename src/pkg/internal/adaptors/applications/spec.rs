use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug)]
pub struct ApplicationEntry {
    pub id: i32,
    pub job_id: i32,
    pub user_id: i32,
    pub created_at: chrono::NaiveDateTime,
}
