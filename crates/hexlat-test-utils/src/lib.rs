//! Test utilities and mock types for hexlat development.
//!
//! Provides instrumented implementations of [`Dispatch`] and the fixed
//! grids and expected outputs used by the scenario tests in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use hexlat_core::{Dispatch, Sequential};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Wraps another dispatcher and counts what passes through it.
///
/// `calls` counts `for_each_chunk`/`for_each_segment` invocations; `units`
/// counts the units those calls ran. The last batch hint seen is kept for
/// assertions on grouping.
#[derive(Debug, Default)]
pub struct CountingDispatch<D = Sequential> {
    inner: D,
    calls: AtomicUsize,
    units: AtomicUsize,
    last_batch: AtomicUsize,
}

impl<D: Dispatch> CountingDispatch<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            units: AtomicUsize::new(0),
            last_batch: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn units(&self) -> usize {
        self.units.load(Ordering::SeqCst)
    }

    pub fn last_batch(&self) -> usize {
        self.last_batch.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.calls.store(0, Ordering::SeqCst);
        self.units.store(0, Ordering::SeqCst);
        self.last_batch.store(0, Ordering::SeqCst);
    }

    fn record(&self, batch: usize) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_batch.store(batch, Ordering::SeqCst);
    }
}

impl<D: Dispatch> Dispatch for CountingDispatch<D> {
    fn for_each_chunk<T, F>(&self, output: &mut [T], chunk_len: usize, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        self.record(batch);
        self.inner.for_each_chunk(output, chunk_len, batch, |i, chunk| {
            self.units.fetch_add(1, Ordering::SeqCst);
            unit(i, chunk);
        });
    }

    fn for_each_segment<T, F>(&self, segments: Vec<&mut [T]>, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        self.record(batch);
        self.inner.for_each_segment(segments, batch, |i, segment| {
            self.units.fetch_add(1, Ordering::SeqCst);
            unit(i, segment);
        });
    }
}

/// Runs bulk chunk work sequentially but panics on any segment dispatch,
/// so grid construction succeeds and every ring or disk query of range
/// above one fails inside its worker.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanickingDispatch;

impl Dispatch for PanickingDispatch {
    fn for_each_chunk<T, F>(&self, output: &mut [T], chunk_len: usize, batch: usize, unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        Sequential.for_each_chunk(output, chunk_len, batch, unit);
    }

    fn for_each_segment<T, F>(&self, segments: Vec<&mut [T]>, _batch: usize, _unit: F)
    where
        T: Send,
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        panic!("injected dispatch failure ({} segments)", segments.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_dispatch_counts_calls_and_units() {
        let d = CountingDispatch::new(Sequential);
        let mut out = vec![0u32; 12];
        d.for_each_chunk(&mut out, 4, 8, |i, c| c.fill(i as u32));
        assert_eq!(d.calls(), 1);
        assert_eq!(d.units(), 3);
        assert_eq!(d.last_batch(), 8);
        assert_eq!(out, vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2]);

        d.reset();
        assert_eq!((d.calls(), d.units()), (0, 0));
    }

    #[test]
    #[should_panic(expected = "injected dispatch failure")]
    fn panicking_dispatch_panics_on_segments() {
        let mut out = vec![0u8; 2];
        PanickingDispatch.for_each_chunk(&mut out, 1, 1, |i, c| c[0] = i as u8);
        assert_eq!(out, vec![0, 1]);
        PanickingDispatch.for_each_segment(vec![out.as_mut_slice()], 1, |_, _| {});
    }
}
