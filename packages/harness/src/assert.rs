//! Scenario-level expectations.
//!
//! Each helper takes a label describing the property under test; it only
//! shows up in the failure message.

use std::fmt::{Debug, Display};
use std::future::Future;

use shared::{Page, PageRequest};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    #[error("{label}: expected {expected}, got {actual}")]
    NotEqual {
        label: String,
        expected: String,
        actual: String,
    },

    #[error("{label}: condition does not hold")]
    Predicate { label: String },

    #[error("{label}: expected the call to fail, but it succeeded")]
    UnexpectedSuccess { label: String },
}

pub fn assert_equals<T>(label: &str, expected: T, actual: T) -> Result<(), AssertionError>
where
    T: PartialEq + Debug,
{
    if expected != actual {
        return Err(AssertionError::NotEqual {
            label: label.to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        });
    }
    Ok(())
}

pub fn assert_predicate(label: &str, condition: bool) -> Result<(), AssertionError> {
    if !condition {
        return Err(AssertionError::Predicate {
            label: label.to_string(),
        });
    }
    Ok(())
}

/// Await `call` and require it to fail.
///
/// The error is handed back for logging only; its status or message is not
/// part of the expectation.
pub async fn expect_error<T, E, F>(label: &str, call: F) -> Result<E, AssertionError>
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match call.await {
        Ok(_) => Err(AssertionError::UnexpectedSuccess {
            label: label.to_string(),
        }),
        Err(error) => {
            debug!(label, %error, "call failed as expected");
            Ok(error)
        }
    }
}

/// Pagination contract of a search answer for `request`.
pub fn assert_page<T>(
    label: &str,
    page: &Page<T>,
    request: &PageRequest,
) -> Result<(), AssertionError> {
    if let Some(limit) = request.limit {
        assert_equals(
            &format!("{}: pagination.limit", label),
            limit,
            page.pagination.limit,
        )?;
        assert_predicate(
            &format!("{}: at most {} items", label, limit),
            page.data.len() <= limit as usize,
        )?;
    }
    if let Some(current) = request.page {
        assert_equals(
            &format!("{}: pagination.current", label),
            current,
            page.pagination.current,
        )?;
    }
    Ok(())
}
