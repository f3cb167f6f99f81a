//! Boundary allocation audit.
//!
//! Counts live network handles, live engine-allocated output buffers, and
//! `infer` boundary calls so tests can assert that a full run leaves zero
//! outstanding allocations and that early-exit paths release everything they
//! acquired.
//!
//! Active only when the in-process stand-in engine is compiled in; with the
//! `ncnn-runtime` feature the helpers compile down to no-ops (the real
//! engine's allocations are not observable from this side of the boundary).
//!
//! Counters are process-global: tests that assert on them must serialize.

#[cfg(not(feature = "ncnn-runtime"))]
pub use inner::*;

#[cfg(not(feature = "ncnn-runtime"))]
mod inner {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static LIVE_NETS: AtomicUsize = AtomicUsize::new(0);
    static LIVE_OUTPUT_BUFFERS: AtomicUsize = AtomicUsize::new(0);
    static INFER_CALLS: AtomicUsize = AtomicUsize::new(0);

    pub(crate) fn record_net_loaded() {
        LIVE_NETS.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_net_released() {
        LIVE_NETS.fetch_sub(1, Ordering::Relaxed);
    }

    pub(crate) fn record_output_allocated() {
        LIVE_OUTPUT_BUFFERS.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_output_released() {
        LIVE_OUTPUT_BUFFERS.fetch_sub(1, Ordering::Relaxed);
    }

    pub(crate) fn record_infer_call() {
        INFER_CALLS.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of loaded networks not yet released.
    pub fn live_nets() -> usize {
        LIVE_NETS.load(Ordering::Acquire)
    }

    /// Number of engine-allocated output buffers not yet freed.
    pub fn live_output_buffers() -> usize {
        LIVE_OUTPUT_BUFFERS.load(Ordering::Acquire)
    }

    /// Total `infer` boundary calls made by this process.
    pub fn infer_calls() -> usize {
        INFER_CALLS.load(Ordering::Acquire)
    }
}

// No-op helpers when the real engine is linked.
#[cfg(feature = "ncnn-runtime")]
#[allow(dead_code)]
pub(crate) fn record_output_allocated() {}
#[cfg(feature = "ncnn-runtime")]
pub(crate) fn record_output_released() {}
#[cfg(feature = "ncnn-runtime")]
pub fn live_nets() -> usize {
    0
}
#[cfg(feature = "ncnn-runtime")]
pub fn live_output_buffers() -> usize {
    0
}
#[cfg(feature = "ncnn-runtime")]
pub fn infer_calls() -> usize {
    0
}
