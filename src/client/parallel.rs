//! Concurrent fan-out for independent API requests.
//!
//! Every key gets its own request future; all of them are in flight at once
//! and the caller only sees results after the last one completes.

use std::future::Future;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

/// One finished unit of work from [`fan_out`]
#[derive(Debug, Clone, PartialEq)]
pub struct Completed<K, T> {
    /// Position of the key in the submitted list
    pub index: usize,
    /// The key the work was issued for
    pub key: K,
    /// Whatever the fetch future resolved to
    pub value: T,
}

/// Run `fetch` for every key concurrently and wait for all of them.
///
/// There is no concurrency bound: each key becomes one future, and they are
/// all registered before the first is polled. `fetch` must encode failure in
/// `T` (typically a `Result` or an outcome enum); a failing key never cancels
/// its siblings.
///
/// Returns exactly one [`Completed`] per key, in completion order. Duplicate
/// keys are fetched independently.
///
/// # Example
///
/// ```ignore
/// let done = fan_out(ids, |id| {
///     let client = &client;
///     async move { client.get_repository(&id).await }
/// })
/// .await;
/// assert_eq!(done.len(), submitted);
/// ```
pub async fn fan_out<K, T, F, Fut>(keys: Vec<K>, fetch: F) -> Vec<Completed<K, T>>
where
    K: Clone,
    F: Fn(K) -> Fut,
    Fut: Future<Output = T>,
{
    let total = keys.len();
    if total == 0 {
        return Vec::new();
    }

    debug!("Fanning out {} requests", total);

    let mut pending: FuturesUnordered<_> = keys
        .into_iter()
        .enumerate()
        .map(|(index, key)| {
            let work = fetch(key.clone());
            async move {
                let value = work.await;
                Completed { index, key, value }
            }
        })
        .collect();

    let mut completed = Vec::with_capacity(total);
    while let Some(done) = pending.next().await {
        debug!(
            "Request {} finished ({}/{})",
            done.index,
            completed.len() + 1,
            total
        );
        completed.push(done);
    }

    debug!("All {} requests finished", total);
    completed
}
