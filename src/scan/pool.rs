use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

use crate::scan::scanner::Scanner;

/// Pool configuration for cached scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScannerPoolOpts {
    /// Maximum number of idle scanners retained. `0` disables pooling.
    pub max_retained: usize,
}

impl Default for ScannerPoolOpts {
    fn default() -> Self {
        Self { max_retained: 32 }
    }
}

/// Pool counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScannerPoolStats {
    /// Idle scanners currently held.
    pub retained: usize,
    /// Scanners allocated because no pooled one was large enough.
    pub allocated: u64,
    /// Acquisitions served from the pool.
    pub reused: u64,
    /// Releases dropped because the pool was full or disabled.
    pub dropped_on_release: u64,
}

#[derive(Default)]
struct PoolState {
    // Sorted by capacity, ascending.
    free: Vec<Scanner>,
    stats: ScannerPoolStats,
}

/// Shared free list of [`Scanner`]s.
///
/// `acquire` hands out the smallest pooled scanner whose capacity covers the request (linear scan
/// over the sorted free list) or allocates a new one; `release` puts a scanner back in capacity
/// order. A single lock guards the list and is held only for the search/splice, never while a
/// scanner is in use.
pub struct ScannerPool {
    opts: ScannerPoolOpts,
    state: Mutex<PoolState>,
}

impl ScannerPool {
    /// Create an empty pool.
    pub fn new(opts: ScannerPoolOpts) -> Self {
        Self {
            opts,
            state: Mutex::new(PoolState::default()),
        }
    }

    /// Pool configuration.
    pub fn opts(&self) -> ScannerPoolOpts {
        self.opts
    }

    /// Snapshot of the pool counters.
    pub fn stats(&self) -> ScannerPoolStats {
        self.lock().stats
    }

    /// Take a scanner with `capacity() >= min_height`.
    pub fn acquire(&self, min_height: usize) -> Scanner {
        let mut state = self.lock();
        if let Some(i) = state.free.iter().position(|s| s.capacity() >= min_height) {
            let scanner = state.free.remove(i);
            state.stats.retained = state.free.len();
            state.stats.reused = state.stats.reused.saturating_add(1);
            tracing::trace!(min_height, capacity = scanner.capacity(), "scanner reused");
            return scanner;
        }
        state.stats.allocated = state.stats.allocated.saturating_add(1);
        drop(state);

        tracing::trace!(min_height, "scanner allocated");
        Scanner::with_capacity(min_height)
    }

    /// Return a scanner to the pool.
    pub fn release(&self, scanner: Scanner) {
        let mut state = self.lock();
        if state.free.len() >= self.opts.max_retained {
            state.stats.dropped_on_release = state.stats.dropped_on_release.saturating_add(1);
            tracing::trace!(capacity = scanner.capacity(), "scanner dropped on release");
            return;
        }

        let cap = scanner.capacity();
        let at = state.free.partition_point(|s| s.capacity() <= cap);
        state.free.insert(at, scanner);
        state.stats.retained = state.free.len();
    }

    /// Acquire a scanner that goes back to the pool when the lease is dropped.
    pub fn lease(&self, min_height: usize) -> ScannerLease<'_> {
        ScannerLease {
            pool: self,
            scanner: Some(self.acquire(min_height)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PoolState> {
        // The state stays consistent across a panicking holder: every mutation is a single
        // splice or counter bump.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for ScannerPool {
    fn default() -> Self {
        Self::new(ScannerPoolOpts::default())
    }
}

impl std::fmt::Debug for ScannerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScannerPool")
            .field("opts", &self.opts)
            .field("stats", &self.stats())
            .finish()
    }
}

/// A pooled [`Scanner`] returned to its pool on drop.
pub struct ScannerLease<'a> {
    pool: &'a ScannerPool,
    scanner: Option<Scanner>,
}

impl Deref for ScannerLease<'_> {
    type Target = Scanner;

    fn deref(&self) -> &Scanner {
        self.scanner.as_ref().expect("lease holds a scanner until drop")
    }
}

impl DerefMut for ScannerLease<'_> {
    fn deref_mut(&mut self) -> &mut Scanner {
        self.scanner.as_mut().expect("lease holds a scanner until drop")
    }
}

impl Drop for ScannerLease<'_> {
    fn drop(&mut self) {
        if let Some(scanner) = self.scanner.take() {
            self.pool.release(scanner);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scan/pool.rs"]
mod tests;
