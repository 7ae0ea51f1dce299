use std::sync::Arc;

use askama::Template;
use axum::{
    Extension, Form,
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::Error,
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector},
            auth::{Role, User},
        },
        server::{
            flash::{self, Notice},
            state::{AppState, GetTxn},
            uispec::{Index, JobDetail, Jobs, PostJob},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct PostJobInput {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    pub company: String,
    #[validate(length(min = 1, message = "Description cannot be empty"))]
    pub description: String,
    pub salary: String,
    pub location: String,
}

pub async fn index(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut tx).get_all().await?;
    let (jar, notice) = flash::take(jar);
    let template = Index { jobs, notice };
    Ok((jar, Html(template.render()?)))
}

pub async fn list_jobs(State(state): State<AppState>) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut tx).get_all().await?;
    let template = Jobs { jobs };
    Ok(Html(template.render()?))
}

pub async fn job_detail(
    State(state): State<AppState>,
    Path(job_id): Path<i32>,
) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobSelector::new(&mut tx)
        .get_by_id(job_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("job {} does not exist", job_id)))?;
    let template = JobDetail { job };
    Ok(Html(template.render()?))
}

pub async fn post_job_page(
    Extension(user): Extension<Arc<User>>,
    jar: CookieJar,
) -> Result<(CookieJar, Html<String>)> {
    if user.role != Role::Employer {
        return Err(Error::Authorization("Only employers can post jobs.".into()));
    }
    let (jar, notice) = flash::take(jar);
    let template = PostJob { notice };
    Ok((jar, Html(template.render()?)))
}

pub async fn post_job(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    jar: CookieJar,
    Form(input): Form<PostJobInput>,
) -> Result<(CookieJar, Redirect)> {
    if user.role != Role::Employer {
        return Err(Error::Authorization("Only employers can post jobs.".into()));
    }
    input
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;
    let mut tx = state.db_pool.begin_txn().await?;
    let job = JobMutator::new(&mut tx).create(&input, user.id).await?;
    tx.commit().await?;
    tracing::info!("job {} posted by {}", job.id, &user.username);
    Ok((
        flash::set(jar, Notice::success("Job posted successfully!")),
        Redirect::to("/dashboard"),
    ))
}
