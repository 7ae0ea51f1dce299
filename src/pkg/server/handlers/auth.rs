use std::str::FromStr;
use std::sync::Arc;

use askama::Template;
use axum::{
    Extension, Form,
    extract::State,
    response::{Html, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use validator::Validate;

use crate::{
    errors::Error,
    pkg::{
        internal::auth::{Role, Session, User},
        server::{
            flash::{self, Notice},
            middlewares::authn::SESSION_COOKIE,
            state::AppState,
            uispec::{Login, Register},
        },
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Username cannot be empty"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: String,
}

#[derive(Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub async fn register_page(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, notice) = flash::take(jar);
    let template = Register { notice };
    Ok((jar, Html(template.render()?)))
}

pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<RegisterInput>,
) -> Result<(CookieJar, Redirect)> {
    input
        .validate()
        .map_err(|e| Error::Validation(e.to_string()))?;
    let role = Role::from_str(&input.role)?;
    if User::retrieve(&state, &input.email).await?.is_some() {
        return Err(Error::Conflict("Email already registered".into()));
    }
    let user = User::create(&state, &input.username, &input.email, &input.password, role).await?;
    tracing::info!("registered {} as {}", &user.username, &user.role);
    Ok((
        flash::set(jar, Notice::success("Registration successful! Please login.")),
        Redirect::to("/login"),
    ))
}

pub async fn login_page(jar: CookieJar) -> Result<(CookieJar, Html<String>)> {
    let (jar, notice) = flash::take(jar);
    let template = Login { notice };
    Ok((jar, Html(template.render()?)))
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginInput>,
) -> Result<(CookieJar, Redirect)> {
    let user = match User::retrieve(&state, &input.email).await? {
        Some(user) if user.verify_password(&input.password) => user,
        _ => return Err(Error::Auth),
    };
    let session = Session::open(&state, &user).await?;
    tracing::info!("user {} logged in", &user.username);
    let cookie = Cookie::build((SESSION_COOKIE, session.token.to_string()))
        .path("/")
        .http_only(true)
        .build();
    let jar = flash::set(jar.add(cookie), Notice::success("Logged in successfully!"));
    Ok((jar, Redirect::to("/dashboard")))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<Arc<User>>,
    jar: CookieJar,
) -> Result<(CookieJar, Redirect)> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        Session::close(&state, cookie.value()).await?;
    }
    tracing::info!("user {} logged out", &user.username);
    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    let jar = flash::set(jar.remove(removal), Notice::success("Logged out successfully"));
    Ok((jar, Redirect::to("/")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_input_validation() {
        let ok = RegisterInput {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "pw123456".into(),
            role: "employer".into(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterInput {
            email: "not-an-email".into(),
            ..ok_input()
        };
        assert!(bad_email.validate().is_err());

        let short_password = RegisterInput {
            password: "pw".into(),
            ..ok_input()
        };
        assert!(short_password.validate().is_err());

        let blank_username = RegisterInput {
            username: "".into(),
            ..ok_input()
        };
        assert!(blank_username.validate().is_err());
    }

    fn ok_input() -> RegisterInput {
        RegisterInput {
            username: "alice".into(),
            email: "a@x.com".into(),
            password: "pw123456".into(),
            role: "jobseeker".into(),
        }
    }
}
