//! Data contract of the discussion-board API as seen by the E2E suite.
//!
//! Every type here mirrors a request or response body of the external
//! backend. Response types implement [`validate::Validate`] so the harness can
//! check them structurally right after each client call.

pub mod models;
pub mod validate;

pub use models::pagination::{Page, PageRequest, Pagination};
pub use validate::{Validate, ValidationError, ValidationResult};
