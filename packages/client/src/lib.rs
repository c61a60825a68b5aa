//! Typed client for the discussion-board REST API.
//!
//! Every backend operation is an async method on [`Connection`]. A call makes
//! exactly one attempt and either decodes the declared response type or
//! returns an [`ApiError`]; deciding whether a failure was expected is left to
//! the caller.

mod connection;
mod error;

pub mod administrators;
pub mod appeals;
pub mod attachments;
pub mod auth;
pub mod boards;
pub mod comments;
pub mod engagement;
pub mod moderation;
pub mod notifications;
pub mod posts;
pub mod reports;
pub mod social_accounts;
pub mod threads;
pub mod topics;
pub mod votes;

pub use connection::Connection;
pub use error::{ApiError, ApiResult};
