//! Bounded-concurrency batch execution of async operations.
//!
//! [`run_batched`] drives one async operation per input item while keeping at
//! most [`BatchSize`] operations in flight. Items are split positionally into
//! consecutive chunks; every operation of a chunk is created before any of them
//! is awaited, and the next chunk only starts after the current one has fully
//! resolved. Results are returned in input order, independent of the order in
//! which the operations complete.
//!
//! The crate has no knowledge of what the operations do, so it can be tested on
//! timing and ordering alone.

use std::{fmt, future::Future, num::NonZeroUsize, ops::Range};

use futures::future::join_all;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("Invalid batch size: {0} (must be at least 1)")]
    InvalidBatchSize(usize),
}

/// Maximum number of operations in flight at once. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchSize(NonZeroUsize);

impl BatchSize {
    /// Cap used by the inventory detail pipelines.
    pub const DEFAULT: BatchSize = match NonZeroUsize::new(3) {
        Some(size) => BatchSize(size),
        None => unreachable!(),
    };

    pub fn new(size: usize) -> Result<Self, BatchError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(BatchError::InvalidBatchSize(size))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = BatchError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<NonZeroUsize> for BatchSize {
    fn from(size: NonZeroUsize) -> Self {
        Self(size)
    }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index ranges of the chunks `run_batched` forms for `len` items.
///
/// The ranges are consecutive, non-overlapping and cover `0..len` exactly; only
/// the last one may be shorter than `batch_size`.
pub fn chunk_plan(len: usize, batch_size: BatchSize) -> Vec<Range<usize>> {
    let size = batch_size.get();
    (0..len)
        .step_by(size)
        .map(|start| start..(start + size).min(len))
        .collect()
}

/// Runs `fetch` over `items` in sequential chunks of `batch_size`.
///
/// Within a chunk the operations run concurrently and the chunk is always
/// awaited to completion. If any of them failed, the error of the
/// lowest-index failing item is returned, no further chunk is started and no
/// partial output is produced. Operations that already succeeded are not
/// undone.
///
/// An empty `items` never invokes `fetch`.
pub async fn run_batched<I, T, D, E, F, Fut>(
    batch_size: BatchSize,
    items: I,
    mut fetch: F,
) -> Result<Vec<D>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = Result<D, E>>,
{
    let mut items = items.into_iter();
    let mut results = Vec::with_capacity(items.size_hint().0);

    loop {
        // Futures are lazy: nothing of this chunk runs until join_all polls it,
        // and nothing of the next chunk exists until this one has resolved.
        let chunk: Vec<Fut> = items
            .by_ref()
            .take(batch_size.get())
            .map(&mut fetch)
            .collect();
        if chunk.is_empty() {
            break;
        }

        for outcome in join_all(chunk).await {
            results.push(outcome?);
        }
    }

    Ok(results)
}
