//! Background ring/disk queries and deferred disposal.
//!
//! Two ways to run queries off the calling thread:
//!
//! - **Scoped**: [`Grid::scope`] hands out a [`QueryScope`] whose queries
//!   borrow the grid. Every query is joined before `scope` returns, so the
//!   grid cannot be dropped or mutated while one is running.
//! - **Shared**: an `Arc<Grid>` spawns `'static` queries returning
//!   [`QueryHandle`]s. [`Grid::dispose_after`] drains a set of handles and
//!   only then lets go of the grid.
//!
//! Arguments are validated on the calling thread; a spawned query can only
//! fail by panicking, which surfaces as [`GridError::WorkerPanicked`] on
//! join. Scoped workers catch their own panics, so a [`ScopedQuery`]
//! dropped without joining never re-panics out of [`Grid::scope`].

use crate::grid::Grid;
use hexlat_core::{CellIndex, Dispatch, GridCoord, GridError};
use hexlat_space::Topology;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle, Scope, ScopedJoinHandle};

fn joined<R>(result: thread::Result<R>) -> Result<R, GridError> {
    result.map_err(|_| {
        tracing::warn!("background neighbour query panicked");
        GridError::WorkerPanicked
    })
}

fn guarded<R>(work: impl FnOnce() -> R) -> Result<R, GridError> {
    joined(panic::catch_unwind(AssertUnwindSafe(work)))
}

// ── Scoped queries ──────────────────────────────────────────────

/// Spawns queries that borrow a grid for the duration of [`Grid::scope`].
pub struct QueryScope<'scope, 'env: 'scope, T, Topo: Topology, D: Dispatch> {
    scope: &'scope Scope<'scope, 'env>,
    grid: &'env Grid<T, Topo, D>,
}

impl<'scope, 'env, T: Sync, Topo: Topology, D: Dispatch> QueryScope<'scope, 'env, T, Topo, D> {
    /// The grid the queries run against.
    pub fn grid(&self) -> &'env Grid<T, Topo, D> {
        self.grid
    }

    /// Start [`Grid::neighbors_at_range`] on a scoped thread.
    pub fn spawn_neighbors_at_range(
        &self,
        coord: GridCoord,
        range: i32,
    ) -> Result<ScopedQuery<'scope>, GridError> {
        let range = self.grid.check_ring(coord, range)?;
        let grid = self.grid;
        Ok(ScopedQuery {
            handle: self.scope.spawn(move || guarded(|| grid.ring(coord, range))),
        })
    }

    /// Start [`Grid::neighbors_within_range`] on a scoped thread.
    pub fn spawn_neighbors_within_range(
        &self,
        coord: GridCoord,
        range: i32,
    ) -> Result<ScopedQuery<'scope>, GridError> {
        let range = self.grid.check_disk(coord, range)?;
        let grid = self.grid;
        Ok(ScopedQuery {
            handle: self.scope.spawn(move || guarded(|| grid.disk(coord, range))),
        })
    }
}

/// A query running inside a [`QueryScope`].
///
/// Dropping it without joining discards the result, including a
/// [`GridError::WorkerPanicked`].
pub struct ScopedQuery<'scope> {
    handle: ScopedJoinHandle<'scope, Result<Vec<CellIndex>, GridError>>,
}

impl ScopedQuery<'_> {
    /// Wait for the raw slots.
    pub fn join(self) -> Result<Vec<CellIndex>, GridError> {
        joined(self.handle.join()).and_then(|slots| slots)
    }

    /// Whether the query has finished running.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T: Sync, Topo: Topology, D: Dispatch> Grid<T, Topo, D> {
    /// Run `f` with a [`QueryScope`] borrowing this grid.
    ///
    /// Returns after `f` and every query it spawned have finished. A query
    /// that panics is reported by its [`ScopedQuery::join`]; unjoined ones
    /// are dropped silently.
    ///
    /// ```
    /// use hexlat_core::GridCoord;
    /// use hexlat_grid::HexGrid;
    /// use hexlat_space::HexOffset;
    ///
    /// let grid: HexGrid<f32> = HexGrid::new(8, 8, HexOffset::new(true)).unwrap();
    /// let (ring, disk) = grid.scope(|s| {
    ///     let ring = s.spawn_neighbors_at_range(GridCoord::new(4, 4), 2).unwrap();
    ///     let disk = s.spawn_neighbors_within_range(GridCoord::new(4, 4), 3).unwrap();
    ///     (ring.join().unwrap(), disk.join().unwrap())
    /// });
    /// assert_eq!(ring.len(), 12);
    /// assert_eq!(disk.len(), 36);
    /// ```
    pub fn scope<'env, F, R>(&'env self, f: F) -> R
    where
        F: for<'scope> FnOnce(&QueryScope<'scope, 'env, T, Topo, D>) -> R,
    {
        thread::scope(|scope| f(&QueryScope { scope, grid: self }))
    }
}

// ── Shared queries ──────────────────────────────────────────────

/// A query running on its own thread against an `Arc<Grid>`.
#[derive(Debug)]
pub struct QueryHandle {
    handle: JoinHandle<Vec<CellIndex>>,
}

impl QueryHandle {
    /// Wait for the raw slots.
    pub fn join(self) -> Result<Vec<CellIndex>, GridError> {
        joined(self.handle.join())
    }

    /// Whether the query has finished running.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Outcome of a [`Disposal`].
#[derive(Debug)]
pub struct DisposalReport {
    /// Results of the drained queries, in the order they were handed over.
    pub drained: Vec<Result<Vec<CellIndex>, GridError>>,
    /// Whether this disposal dropped the last reference and freed the
    /// grid's buffers.
    pub released: bool,
}

/// Deferred release of a shared grid. See [`Grid::dispose_after`].
#[derive(Debug)]
pub struct Disposal {
    handle: JoinHandle<DisposalReport>,
}

impl Disposal {
    /// Block until every pending query has drained and the grid reference
    /// has been released.
    pub fn wait(self) -> Result<DisposalReport, GridError> {
        joined(self.handle.join())
    }

    /// Whether draining and release have completed.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T, Topo, D> Grid<T, Topo, D>
where
    T: Send + Sync + 'static,
    Topo: Topology,
    D: Dispatch + 'static,
{
    /// Start [`Grid::neighbors_at_range`] on a new thread holding a clone
    /// of the `Arc`.
    pub fn spawn_neighbors_at_range(
        self: &Arc<Self>,
        coord: GridCoord,
        range: i32,
    ) -> Result<QueryHandle, GridError> {
        let range = self.check_ring(coord, range)?;
        let grid = Arc::clone(self);
        Ok(QueryHandle {
            handle: thread::spawn(move || grid.ring(coord, range)),
        })
    }

    /// Start [`Grid::neighbors_within_range`] on a new thread holding a
    /// clone of the `Arc`.
    pub fn spawn_neighbors_within_range(
        self: &Arc<Self>,
        coord: GridCoord,
        range: i32,
    ) -> Result<QueryHandle, GridError> {
        let range = self.check_disk(coord, range)?;
        let grid = Arc::clone(self);
        Ok(QueryHandle {
            handle: thread::spawn(move || grid.disk(coord, range)),
        })
    }

    /// Give up this reference once every handle in `pending` has finished.
    ///
    /// The returned [`Disposal`] drains `pending` in order, then drops
    /// `self`. If that was the last reference the grid is
    /// [`dispose`](Grid::dispose)d and its buffers freed.
    pub fn dispose_after(self: Arc<Self>, pending: Vec<QueryHandle>) -> Disposal {
        tracing::debug!(pending = pending.len(), "deferred disposal scheduled");
        let handle = thread::spawn(move || {
            let drained: Vec<_> = pending.into_iter().map(QueryHandle::join).collect();
            let released = match Arc::try_unwrap(self) {
                Ok(grid) => {
                    grid.dispose();
                    true
                }
                Err(_shared) => false,
            };
            tracing::debug!(drained = drained.len(), released, "deferred disposal complete");
            DisposalReport { drained, released }
        });
        Disposal { handle }
    }
}
