//! Fan-out/fan-in task dispatch.
//!
//! Neighbour computation is split into independent units that each write a
//! disjoint slice of a pre-sized output buffer. A [`Dispatch`] runs those
//! units and returns only after every unit has completed, so callers never
//! observe a partially written buffer.
//!
//! Two strategies are provided:
//!
//! - [`Sequential`]: runs units in order on the calling thread.
//! - [`RayonDispatch`]: runs units on a rayon work-stealing pool, either the
//!   global pool or a dedicated one.

use crate::error::GridError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Execution strategy for independent units of neighbour work.
///
/// Each unit receives its ordinal and exclusive access to its output slice.
/// Units must not depend on each other's output; implementations are free
/// to run them in any order or concurrently, but must join all of them
/// before returning.
pub trait Dispatch: Send + Sync {
    /// Split `output` into consecutive chunks of `chunk_len` elements and run
    /// `unit(chunk_ordinal, chunk)` for each.
    ///
    /// `batch` is a grouping hint: the minimum number of units a worker
    /// should take at once. The last chunk may be shorter if `chunk_len`
    /// does not divide `output.len()`. A `chunk_len` of zero runs nothing.
    fn for_each_chunk<T, F>(&self, output: &mut [T], chunk_len: usize, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync;

    /// Run `unit(segment_ordinal, segment)` for each of the given disjoint,
    /// possibly differently sized, segments.
    fn for_each_segment<T, F>(&self, segments: Vec<&mut [T]>, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync;
}

impl<D: Dispatch> Dispatch for &D {
    fn for_each_chunk<T, F>(&self, output: &mut [T], chunk_len: usize, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        (**self).for_each_chunk(output, chunk_len, batch, unit);
    }

    fn for_each_segment<T, F>(&self, segments: Vec<&mut [T]>, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        (**self).for_each_segment(segments, batch, unit);
    }
}

/// Single-threaded fallback: units run in ordinal order on the caller's thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

impl Dispatch for Sequential {
    fn for_each_chunk<T, F>(&self, output: &mut [T], chunk_len: usize, _batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        if chunk_len == 0 {
            return;
        }
        for (i, chunk) in output.chunks_mut(chunk_len).enumerate() {
            unit(i, chunk);
        }
    }

    fn for_each_segment<T, F>(&self, segments: Vec<&mut [T]>, _batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        for (i, segment) in segments.into_iter().enumerate() {
            unit(i, segment);
        }
    }
}

/// Data-parallel dispatch on a rayon thread pool.
///
/// By default units run on rayon's global pool. Use
/// [`with_pool`](Self::with_pool) or [`with_threads`](Self::with_threads)
/// to isolate grid work on a dedicated pool.
#[derive(Clone, Debug, Default)]
pub struct RayonDispatch {
    pool: Option<Arc<ThreadPool>>,
}

impl RayonDispatch {
    /// Dispatch onto rayon's global pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Dispatch onto an existing pool.
    pub fn with_pool(pool: Arc<ThreadPool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Build a dedicated pool with `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("hexlat-worker-{i}"))
            .build()?;
        Ok(Self::with_pool(Arc::new(pool)))
    }

    /// Number of worker threads units may spread across.
    pub fn current_num_threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }
}

impl Dispatch for RayonDispatch {
    fn for_each_chunk<T, F>(&self, output: &mut [T], chunk_len: usize, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        if chunk_len == 0 {
            return;
        }
        self.install(|| {
            output
                .par_chunks_mut(chunk_len)
                .with_min_len(batch.max(1))
                .enumerate()
                .for_each(|(i, chunk)| unit(i, chunk));
        });
    }

    fn for_each_segment<T, F>(&self, segments: Vec<&mut [T]>, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        self.install(|| {
            segments
                .into_par_iter()
                .with_min_len(batch.max(1))
                .enumerate()
                .for_each(|(i, segment)| unit(i, segment));
        });
    }
}

/// Cooperative cancellation flag, checked before a query dispatches work.
///
/// Once units are dispatched they always run to completion; cancelling only
/// prevents queries that have not started yet. Clones share the same flag.
#[derive(Clone, Debug, Default)]
pub struct Cancellation {
    flag: Arc<AtomicBool>,
}

impl Cancellation {
    /// A fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every query holding this token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// `Err(GridError::Cancelled)` once cancelled.
    pub fn check(&self) -> Result<(), GridError> {
        if self.is_cancelled() {
            Err(GridError::Cancelled)
        } else {
            Ok(())
        }
    }
}
