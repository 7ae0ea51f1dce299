use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pkg::server::flash::Notice;

#[derive(Debug, Error)]
pub enum Error {
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid credentials")]
    Auth,

    #[error("authentication required")]
    Unauthenticated,

    #[error("forbidden: {0}")]
    Authorization(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("password hash error: {0}")]
    Hash(String),

    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return Error::Conflict("record already exists".into());
            }
            if db.is_foreign_key_violation() {
                return Error::NotFound("referenced record does not exist".into());
            }
        }
        Error::Database(err)
    }
}

fn redirect_with_notice(to: &str, notice: Notice) -> Response {
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, to.to_string()),
            (header::SET_COOKIE, notice.into_cookie().to_string()),
        ],
    )
        .into_response()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Conflict(msg) => redirect_with_notice("/register", Notice::danger(msg)),
            Error::Auth => redirect_with_notice("/login", Notice::danger("Invalid credentials")),
            Error::Unauthenticated => {
                redirect_with_notice("/login", Notice::warning("Please log in to continue"))
            }
            Error::Authorization(msg) => redirect_with_notice("/dashboard", Notice::danger(msg)),
            Error::NotFound(msg) => {
                tracing::debug!("not found: {}", &msg);
                (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>")).into_response()
            }
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            err => {
                tracing::error!("unhandled error: {}", &err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{LOCATION, SET_COOKIE};

    #[test]
    fn test_taxonomy_maps_to_documented_responses() {
        let resp = Error::NotFound("job 9".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = Error::Auth.into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

        let resp = Error::Unauthenticated.into_response();
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");

        let resp = Error::Authorization("employers only".into()).into_response();
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/dashboard");

        let resp = Error::Conflict("email taken".into()).into_response();
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/register");

        let resp = Error::Validation("bad role".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_redirects_carry_flash_cookie() {
        let resp = Error::Auth.into_response();
        let cookie = resp
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(cookie.starts_with("flash="));
        assert!(cookie.contains("danger"));
    }
}
