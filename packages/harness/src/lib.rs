//! Building blocks for discussion-board E2E scenarios.
//!
//! - [`fixtures`] and [`payloads`]: random, schema-valid request data
//! - [`assert`]: equality, predicate and expected-failure assertions
//! - [`Actor`]: an authenticated identity and its session
//! - [`compose`]: response validation and bounded fixture fan-out
//! - [`scenario`]: the scenario registry, runner and outcomes

pub mod actor;
pub mod assert;
pub mod compose;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod payloads;
pub mod scenario;

pub use actor::Actor;
pub use assert::{assert_equals, assert_page, assert_predicate, expect_error, AssertionError};
pub use compose::{fan_out, fan_out_bounded, validated};
pub use config::{ConfigError, Credentials, E2EConfig};
pub use error::{ScenarioError, ScenarioResult};
pub use scenario::{run_all, run_scenario, Category, Scenario, ScenarioOutcome, TestTimer};
