use std::future::Future;

use futures_util::stream::{self, StreamExt};

/// Run `worker` over every item with at most `max_concurrent` futures in flight.
///
/// A new item is started as soon as any in-flight future settles. Results come
/// back 1:1 in input order regardless of completion order. Workers report
/// failure through their output (typically a `Result`), so one failing item
/// never cancels its siblings. Every future is driven to completion inside
/// this call; nothing is detached. A limit of zero is treated as one.
pub async fn run_bounded<I, T, R, F, Fut>(items: I, max_concurrent: usize, mut worker: F) -> Vec<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = R>,
{
    let limit = max_concurrent.max(1);

    let mut indexed: Vec<(usize, R)> = stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| {
            let fut = worker(item);
            async move { (index, fut.await) }
        })
        .buffer_unordered(limit)
        .collect()
        .await;

    indexed.sort_unstable_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, result)| result).collect()
}
