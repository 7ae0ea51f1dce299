use std::sync::Arc;

use axum::{
    Extension,
    extract::{Path, State},
    response::Redirect,
};
use axum_extra::extract::CookieJar;

use crate::{
    errors::Error,
    pkg::{
        internal::{
            adaptors::{
                applications::{mutators::ApplicationMutator, selectors::ApplicationSelector},
                jobs::selectors::JobSelector,
            },
            auth::{Role, User},
        },
        server::{
            flash::{self, Notice},
            state::{AppState, GetTxn},
        },
    },
    prelude::Result,
};

pub async fn apply(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    jar: CookieJar,
    Path(job_id): Path<i32>,
) -> Result<(CookieJar, Redirect)> {
    if user.role != Role::Jobseeker {
        return Err(Error::Authorization("Only job seekers can apply.".into()));
    }
    let mut tx = state.db_pool.begin_txn().await?;
    if JobSelector::new(&mut tx).get_by_id(job_id).await?.is_none() {
        return Err(Error::NotFound(format!("job {} does not exist", job_id)));
    }
    if ApplicationSelector::new(&mut tx)
        .get_by_job_and_user(job_id, user.id)
        .await?
        .is_some()
    {
        return Ok((
            flash::set(jar, Notice::warning("You already applied for this job.")),
            Redirect::to("/dashboard"),
        ));
    }
    let notice = match ApplicationMutator::new(&mut tx).create(job_id, user.id).await {
        Ok(application) => {
            tx.commit().await?;
            tracing::info!("user {} applied to job {}", user.id, application.job_id);
            Notice::success("Application submitted successfully!")
        }
        // a concurrent duplicate loses to the unique constraint
        Err(Error::Conflict(_)) => Notice::warning("You already applied for this job."),
        Err(e) => return Err(e),
    };
    Ok((flash::set(jar, notice), Redirect::to("/dashboard")))
}
