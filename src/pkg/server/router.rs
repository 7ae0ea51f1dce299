use axum::middleware::from_fn_with_state;
use axum::routing::post;
use axum::{Router, routing::get};

use super::handlers::applications::apply;
use super::handlers::auth::{login, login_page, logout, register, register_page};
use super::handlers::dashboard::dashboard;
use super::handlers::jobs::{index, job_detail, list_jobs, post_job, post_job_page};
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes(state: AppState) -> Result<Router> {
    let app = Router::new()
        .route("/logout", get(logout))
        .route("/dashboard", get(dashboard))
        .route("/post_job", get(post_job_page).post(post_job))
        .route("/apply/:job_id", post(apply))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        .route("/", get(index))
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/jobs", get(list_jobs))
        .route("/job/:job_id", get(job_detail))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[tokio::test]
    #[traced_test]
    async fn test_router_builds() -> Result<()> {
        let state = AppState::new().await?;
        let _ = build_routes(state).await?;
        Ok(())
    }
}
