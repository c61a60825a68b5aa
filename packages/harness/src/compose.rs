use std::future::Future;

use client::ApiResult;
use futures::stream::{self, StreamExt};
use shared::Validate;

use crate::error::ScenarioResult;

/// Concurrent fixture creations per fan-out unless stated otherwise.
pub const DEFAULT_FAN_OUT: usize = 4;

/// Await a client call and check the response against its declared type.
pub async fn validated<T, F>(call: F) -> ScenarioResult<T>
where
    F: Future<Output = ApiResult<T>>,
    T: Validate,
{
    let value = call.await?;
    value.validate()?;
    Ok(value)
}

/// Create `count` fixtures concurrently.
///
/// See [`fan_out_bounded`].
pub async fn fan_out<T, F, Fut>(count: usize, factory: F) -> ScenarioResult<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = ScenarioResult<T>>,
{
    fan_out_bounded(count, DEFAULT_FAN_OUT, factory).await
}

/// Run `factory(0..count)` with at most `concurrency` in flight.
///
/// Every future is driven to completion before anything is returned, so the
/// caller never sees a partial set. Results keep index order; the first
/// failure by index is reported.
pub async fn fan_out_bounded<T, F, Fut>(
    count: usize,
    concurrency: usize,
    factory: F,
) -> ScenarioResult<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = ScenarioResult<T>>,
{
    let results: Vec<ScenarioResult<T>> = stream::iter((0..count).map(factory))
        .buffered(concurrency.max(1))
        .collect()
        .await;
    results.into_iter().collect()
}
