use std::fmt;
use std::str::FromStr;

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use serde::{Deserialize, Serialize};
use sqlx::prelude::{FromRow, Type};
use uuid::Uuid;

use crate::{errors::Error, pkg::server::state::AppState, prelude::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Jobseeker,
    Employer,
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "jobseeker" => Ok(Role::Jobseeker),
            "employer" => Ok(Role::Employer),
            _ => Err(Error::Validation(
                "role must be jobseeker or employer".into(),
            )),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Jobseeker => write!(f, "jobseeker"),
            Role::Employer => write!(f, "employer"),
        }
    }
}

#[derive(FromRow, Debug, Clone)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl User {
    pub async fn create(
        state: &AppState,
        username: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Self> {
        let hash = Self::hash_password(password)?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, password_hash, role)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, password_hash, role
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(&hash)
        .bind(role)
        .fetch_one(&*state.db_pool)
        .await?;
        Ok(user)
    }

    pub async fn retrieve(state: &AppState, email: &str) -> Result<Option<Self>> {
        Ok(sqlx::query_as::<_, User>(
            "select id, username, email, password_hash, role from users where email = $1",
        )
        .bind(email)
        .fetch_optional(&*state.db_pool)
        .await?)
    }

    pub fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    /// Constant-time by construction: the argon2 verifier recomputes the
    /// hash over the stored salt before comparing.
    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[derive(FromRow, Debug)]
pub struct Session {
    pub token: Uuid,
    pub user_id: i32,
}

impl Session {
    /// Binds a fresh opaque token to the given user. The token value is the
    /// only thing the client ever holds.
    pub async fn open(state: &AppState, user: &User) -> Result<Self> {
        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (token, user_id) VALUES ($1, $2) RETURNING token, user_id",
        )
        .bind(Uuid::new_v4())
        .bind(user.id)
        .fetch_one(&*state.db_pool)
        .await?;
        Ok(session)
    }

    /// Resolves a client-held token to its principal, or to anonymous.
    pub async fn resolve(state: &AppState, token: &str) -> Result<Option<User>> {
        let token = match token.parse::<Uuid>() {
            Ok(token) => token,
            Err(_) => return Ok(None),
        };
        Ok(sqlx::query_as::<_, User>(
            r#"
            select u.id, u.username, u.email, u.password_hash, u.role
            from users u join sessions s on s.user_id = u.id
            where s.token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&*state.db_pool)
        .await?)
    }

    pub async fn close(state: &AppState, token: &str) -> Result<()> {
        if let Ok(token) = token.parse::<Uuid>() {
            sqlx::query("DELETE FROM sessions WHERE token = $1")
                .bind(token)
                .execute(&*state.db_pool)
                .await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing_is_closed() {
        assert_eq!(Role::from_str("jobseeker").unwrap(), Role::Jobseeker);
        assert_eq!(Role::from_str("employer").unwrap(), Role::Employer);
        assert!(Role::from_str("admin").is_err());
        assert!(Role::from_str("Employer").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_display_matches_wire_values() {
        assert_eq!(Role::Jobseeker.to_string(), "jobseeker");
        assert_eq!(Role::Employer.to_string(), "employer");
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = User::hash_password("pw123456").unwrap();
        let user = User {
            id: 1,
            username: "alice".into(),
            email: "a@x.com".into(),
            password_hash: hash.clone(),
            role: Role::Employer,
        };
        assert!(user.verify_password("pw123456"));
        assert!(!user.verify_password("pw12345"));
        assert!(!user.verify_password(""));

        // salted: hashing the same password twice yields distinct strings
        let again = User::hash_password("pw123456").unwrap();
        assert_ne!(hash, again);
    }
}
