use std::fmt;

use axum_extra::extract::cookie::{Cookie, CookieJar};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Danger,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Danger => "danger",
        }
    }

    fn parse(s: &str) -> Option<Level> {
        match s {
            "success" => Some(Level::Success),
            "warning" => Some(Level::Warning),
            "danger" => Some(Level::Danger),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transient notice set on one response and consumed by the next page
/// render, carried in a short-lived cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Warning,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Notice {
            level: Level::Danger,
            message: message.into(),
        }
    }

    fn encode(&self) -> String {
        format!("{}:{}", self.level, urlencoding::encode(&self.message))
    }

    fn decode(raw: &str) -> Option<Notice> {
        let (level, message) = raw.split_once(':')?;
        Some(Notice {
            level: Level::parse(level)?,
            message: urlencoding::decode(message).ok()?.into_owned(),
        })
    }

    pub fn into_cookie(self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE, self.encode()))
            .path("/")
            .http_only(true)
            .build()
    }
}

pub fn set(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(notice.into_cookie())
}

/// Reads and clears the pending notice, if any.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    match jar.get(FLASH_COOKIE) {
        Some(cookie) => {
            let notice = Notice::decode(cookie.value());
            let removal = Cookie::build((FLASH_COOKIE, "")).path("/").build();
            (jar.remove(removal), notice)
        }
        None => (jar, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_roundtrip() {
        let notice = Notice::warning("héllo: wörld; 100% done");
        let decoded = Notice::decode(&notice.encode()).unwrap();
        assert_eq!(decoded, notice);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Notice::decode("no-separator").is_none());
        assert!(Notice::decode("shouting:loudly").is_none());
    }

    #[test]
    fn test_take_clears_the_cookie() {
        let jar = set(CookieJar::new(), Notice::success("saved"));
        let (jar, notice) = take(jar);
        assert_eq!(notice.unwrap().message, "saved");
        let (_, notice) = take(jar);
        assert!(notice.is_none());
    }
}
