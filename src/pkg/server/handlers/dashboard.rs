use std::sync::Arc;

use askama::Template;
use axum::{Extension, extract::State, response::Html};
use axum_extra::extract::CookieJar;

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::selectors::JobSelector,
            auth::{Role, User},
        },
        server::{
            flash,
            state::{AppState, GetTxn},
            uispec::Dashboard,
        },
    },
    prelude::Result,
};

/// Employers see their own postings; job seekers see everything.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = match user.role {
        Role::Employer => JobSelector::new(&mut tx).get_by_poster(user.id).await?,
        Role::Jobseeker => JobSelector::new(&mut tx).get_all().await?,
    };
    tracing::debug!("dashboard for {}: {} jobs", &user.username, jobs.len());
    let (jar, notice) = flash::take(jar);
    let template = Dashboard {
        username: &user.username,
        employer: user.role == Role::Employer,
        jobs,
        notice,
    };
    Ok((jar, Html(template.render()?)))
}
