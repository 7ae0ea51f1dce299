use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub salary: String,
    pub location: String,
    pub company: String,
    pub posted_by: i32,
    pub created_at: chrono::NaiveDateTime,
}
