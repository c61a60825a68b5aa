use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use tracing::{info, info_span, warn, Instrument};

use crate::config::E2EConfig;
use crate::error::{ScenarioError, ScenarioResult};

/// Scenario groups, one per API area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Auth,
    Boards,
    Topics,
    Threads,
    Posts,
    Comments,
    Votes,
    Attachments,
    Moderation,
    Appeals,
    Notifications,
    Engagement,
    Administrators,
    SocialAccounts,
}

impl Category {
    pub const ALL: [Category; 14] = [
        Category::Auth,
        Category::Boards,
        Category::Topics,
        Category::Threads,
        Category::Posts,
        Category::Comments,
        Category::Votes,
        Category::Attachments,
        Category::Moderation,
        Category::Appeals,
        Category::Notifications,
        Category::Engagement,
        Category::Administrators,
        Category::SocialAccounts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Auth => "auth",
            Category::Boards => "boards",
            Category::Topics => "topics",
            Category::Threads => "threads",
            Category::Posts => "posts",
            Category::Comments => "comments",
            Category::Votes => "votes",
            Category::Attachments => "attachments",
            Category::Moderation => "moderation",
            Category::Appeals => "appeals",
            Category::Notifications => "notifications",
            Category::Engagement => "engagement",
            Category::Administrators => "administrators",
            Category::SocialAccounts => "social-accounts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
                format!(
                    "unknown category `{}` (expected one of: {})",
                    s,
                    known.join(", ")
                )
            })
    }
}

pub type ScenarioFuture = BoxFuture<'static, ScenarioResult<()>>;

/// A registered scenario function.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub category: Category,
    pub run: fn(E2EConfig) -> ScenarioFuture,
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

/// Helper to measure scenario execution time
pub struct TestTimer {
    start_time: Instant,
}

impl TestTimer {
    pub fn start() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn check_within(&self, budget: Duration) -> ScenarioResult<()> {
        let elapsed = self.elapsed();
        if elapsed > budget {
            return Err(ScenarioError::OverBudget { elapsed, budget });
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub category: Category,
    pub elapsed: Duration,
    /// Rendered cause when the scenario failed.
    pub failure: Option<String>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Run one scenario to completion and record how long it took. Each
/// scenario checks its own time budget before returning.
pub async fn run_scenario(scenario: &Scenario, config: &E2EConfig) -> ScenarioOutcome {
    let span = info_span!("scenario", name = scenario.name, category = %scenario.category);
    async {
        let timer = TestTimer::start();
        let result = (scenario.run)(config.clone()).await;
        let elapsed = timer.elapsed();

        let failure = match result {
            Ok(()) => {
                info!(?elapsed, "passed");
                None
            }
            Err(error) => {
                warn!(?elapsed, %error, "failed");
                Some(error.to_string())
            }
        };
        ScenarioOutcome {
            name: scenario.name,
            category: scenario.category,
            elapsed,
            failure,
        }
    }
    .instrument(span)
    .await
}

/// Run `scenarios` with up to `config.max_concurrency` at a time. Outcomes
/// are returned in completion order.
pub async fn run_all(scenarios: &[Scenario], config: &E2EConfig) -> Vec<ScenarioOutcome> {
    stream::iter(scenarios)
        .map(|scenario| run_scenario(scenario, config))
        .buffer_unordered(config.max_concurrency.max(1))
        .collect()
        .await
}
