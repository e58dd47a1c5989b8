//! Future combinators behind the promises page.
//!
//! Each demo takes the operation it runs as a factory so the page can feed
//! it timer backed futures while tests feed it ready ones.

use std::future::Future;

use futures::future::{select, try_join_all, Either};
use gloo_timers::future::TimeoutFuture;

pub const OPERATION_SUCCEEDED: &str = "Operation completed successfully!";
pub const SIMULATED_DELAY_MS: u32 = 2_000;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Operation failed!")]
pub struct OperationFailed;

/// Resolves or rejects after a delay.
pub async fn simulate(should_succeed: bool, delay_ms: u32) -> Result<String, OperationFailed> {
    TimeoutFuture::new(delay_ms).await;

    match should_succeed {
        true => Ok(OPERATION_SUCCEEDED.to_owned()),
        false => Err(OperationFailed),
    }
}

/// The second step only starts once the first one resolved.
pub async fn chain<F, Fut>(op: F, progress: impl Fn(String)) -> Result<String, OperationFailed>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<String, OperationFailed>>,
{
    let first = format!("Step 1: {}", op().await?);
    progress(first.clone());

    let second = op().await?;
    Ok(format!("{first}\nStep 2: {second}"))
}

/// Runs `count` operations concurrently, any failure rejects the whole set.
pub async fn all<F, Fut>(op: F, count: usize) -> Result<String, OperationFailed>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<String, OperationFailed>>,
{
    let results = try_join_all((0..count).map(|_| op())).await?;
    Ok(results.join("\n"))
}

pub async fn sequential<F, Fut>(
    op: F,
    progress: impl Fn(String),
) -> Result<String, OperationFailed>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<String, OperationFailed>>,
{
    let first = format!("First await: {}", op().await?);
    progress(first.clone());

    let second = op().await?;
    Ok(format!("{first}\nSecond await: {second}"))
}

/// Whichever future finishes first wins, the other one is dropped.
pub async fn race<A, B>(fast: A, slow: B) -> String
where
    A: Future<Output = String>,
    B: Future<Output = String>,
{
    let winner = match select(Box::pin(fast), Box::pin(slow)).await {
        Either::Left((winner, _)) => winner,
        Either::Right((winner, _)) => winner,
    };
    format!("Winner: {winner}")
}

pub async fn delayed(label: &'static str, delay_ms: u32) -> String {
    TimeoutFuture::new(delay_ms).await;
    label.to_owned()
}
