//! Validity-window cache for leap-second-aware clock reads.
//!
//! ## Purpose
//!
//! Converting an OS timestamp to engine ticks goes through the platform's
//! leap-second handling ([`SystemClock::file_time_to_utc_ticks`]), which
//! can be expensive. Because the mapping is affine over any span without a
//! leap-second boundary, `utc_now`-style reads cache one `(os_base,
//! utc_base)` pair and extrapolate while the OS timestamp stays inside a
//! fixed validity window, then recompute.
//!
//! ## Concurrency
//!
//! The snapshot is the engine's only shared mutable state. It is published
//! as an immutable boxed value through a single `AtomicPtr` swap
//! (Release), and readers take one Acquire load: they observe the old or
//! the new snapshot in full, never a torn mix. Retired snapshots are
//! leaked — a concurrent reader may still hold one, and one swap per
//! validity window bounds the retired memory to a few words per second.

use crate::clock::SystemClock;
use crate::constants::{MAX_TICKS, TICKS_PER_MILLISECOND};
use once_cell::sync::Lazy;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use tracing::trace;

/// OS-tick span a snapshot stays valid for (300 ms).
const VALIDITY_WINDOW_TICKS: u64 = 300 * TICKS_PER_MILLISECOND as u64;

/// One published affine mapping: engine ticks = utc_base + (os - os_base).
struct Snapshot {
    os_base: u64,
    utc_base: u64,
}

/// Atomically swapped snapshot holder.
pub struct LeapSecondCache {
    head: AtomicPtr<Snapshot>,
}

impl LeapSecondCache {
    /// An empty cache; the first read populates it.
    pub const fn new() -> Self {
        LeapSecondCache {
            head: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Current engine UTC ticks according to `clock`.
    ///
    /// Served by extrapolation while the OS timestamp is inside the
    /// snapshot's validity window; otherwise the mapping is recomputed
    /// through the clock's conversion hook and republished.
    pub fn utc_ticks(&self, clock: &dyn SystemClock) -> u64 {
        let os_now = clock.os_ticks_now();
        let head = self.head.load(Ordering::Acquire);
        if !head.is_null() {
            // Snapshots are immutable after publication and never freed
            // while the process runs, so the reference stays valid.
            let snap = unsafe { &*head };
            if os_now >= snap.os_base && os_now - snap.os_base < VALIDITY_WINDOW_TICKS {
                return (snap.utc_base + (os_now - snap.os_base)).min(MAX_TICKS as u64);
            }
        }
        self.refresh(clock, os_now)
    }

    fn refresh(&self, clock: &dyn SystemClock, os_now: u64) -> u64 {
        let utc_base = clock
            .file_time_to_utc_ticks(os_now)
            .unwrap_or(MAX_TICKS as u64);
        let fresh = Box::into_raw(Box::new(Snapshot {
            os_base: os_now,
            utc_base,
        }));
        // Swap-publish; the previous snapshot is retired by leaking.
        self.head.swap(fresh, Ordering::AcqRel);
        trace!(os_base = os_now, "republished clock snapshot");
        utc_base
    }
}

impl Default for LeapSecondCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LeapSecondCache {
    fn drop(&mut self) {
        // Exclusive access: only the currently published snapshot remains.
        let head = *self.head.get_mut();
        if !head.is_null() {
            drop(unsafe { Box::from_raw(head) });
        }
    }
}

/// Cache instance behind the process-wide default clock.
pub(crate) static GLOBAL_CLOCK_CACHE: Lazy<LeapSecondCache> = Lazy::new(LeapSecondCache::new);
