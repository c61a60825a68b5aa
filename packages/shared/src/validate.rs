//! Structural response validation.
//!
//! Decoding a body into its DTO already enforces the declared shape (field
//! presence, `Uuid` and RFC 3339 date-time formats). [`Validate`] covers the
//! constraints serde cannot express.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use thiserror::Error;

/// A response value that does not match its declared type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid response at `{path}`: {reason}")]
pub struct ValidationError {
    pub path: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Prefixes the failing path with the enclosing field or index.
    pub fn within(self, parent: &str) -> Self {
        let path = if self.path.starts_with('[') {
            format!("{}{}", parent, self.path)
        } else {
            format!("{}.{}", parent, self.path)
        };
        Self { path, ..self }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// Checks the declared constraints of a decoded response.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

impl Validate for () {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> ValidationResult {
        for (index, item) in self.iter().enumerate() {
            item.validate()
                .map_err(|e| e.within(&format!("[{}]", index)))?;
        }
        Ok(())
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self) -> ValidationResult {
        match self {
            Some(value) => value.validate(),
            None => Ok(()),
        }
    }
}

const EMAIL_PATTERN: &str =
    r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)+$";
const UUID_PATTERN: &str =
    r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
}

fn uuid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(UUID_PATTERN).expect("uuid pattern is a valid regex"))
}

pub fn is_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Hyphenated form only, the one the API emits.
pub fn is_uuid(value: &str) -> bool {
    uuid_pattern().is_match(value)
}

pub fn non_empty(path: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(path, "must not be empty"));
    }
    Ok(())
}

pub fn email(path: &str, value: &str) -> ValidationResult {
    if !is_email(value) {
        return Err(ValidationError::new(path, format!("`{}` is not an email address", value)));
    }
    Ok(())
}

pub fn max_len(path: &str, value: &str, max: usize) -> ValidationResult {
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::new(path, format!("length {} exceeds {}", len, max)));
    }
    Ok(())
}

pub fn non_negative(path: &str, value: i64) -> ValidationResult {
    if value < 0 {
        return Err(ValidationError::new(path, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

pub fn http_url(path: &str, value: &str) -> ValidationResult {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(ValidationError::new(path, format!("`{}` is not an http(s) URL", value)));
    }
    Ok(())
}

/// `later` must not precede `earlier`.
pub fn chronological(
    path: &str,
    earlier: &DateTime<Utc>,
    later: &DateTime<Utc>,
) -> ValidationResult {
    if later < earlier {
        return Err(ValidationError::new(
            path,
            format!("{} precedes {}", later.to_rfc3339(), earlier.to_rfc3339()),
        ));
    }
    Ok(())
}
