use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::pkg::server::flash::Notice;

#[derive(Template)]
#[template(path = "index.html")]
pub struct Index {
    pub jobs: Vec<JobEntry>,
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct Jobs {
    pub jobs: Vec<JobEntry>,
}

#[derive(Template)]
#[template(path = "job_detail.html")]
pub struct JobDetail {
    pub job: JobEntry,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct Register {
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct Login {
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "post_job.html")]
pub struct PostJob {
    pub notice: Option<Notice>,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct Dashboard<'a> {
    pub username: &'a str,
    pub employer: bool,
    pub jobs: Vec<JobEntry>,
    pub notice: Option<Notice>,
}
