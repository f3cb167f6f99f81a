//! FFI declarations for the native colornet engine (ncnn + OpenCV).
//!
//! This module contains the raw FFI bindings. Use the safe wrappers
//! in the `model` and `buffer` modules instead of calling these directly.
//!
//! # Ownership contract
//!
//! - `load_model` returns an engine-owned net; release it exactly once with
//!   `unload_model`, never use it afterwards.
//! - `infer` only reads the input buffer; the caller keeps ownership of its
//!   backing storage for the whole call and releases it afterwards.
//! - On success `infer` returns a buffer whose `data` was allocated with the
//!   C allocator; ownership transfers to the caller, who must release it
//!   exactly once with `libc::free`. On failure `data` is null and `size` is
//!   zero, and nothing was allocated.
//! - The format string is read-only for the engine and not retained past the
//!   call.

use std::ffi::c_void;
use std::os::raw::c_char;
use std::ptr;

/// Opaque handle to a loaded network.
pub type NetHandle = *mut c_void;

/// A contiguous byte region crossing the engine boundary.
///
/// `data == null` and `size == 0` together form the canonical empty/invalid
/// state; the engine never returns one without the other.
#[repr(C)]
pub struct RawBuffer {
    pub data: *const u8,
    pub size: usize,
}

impl RawBuffer {
    /// The canonical empty/failure buffer.
    pub const fn empty() -> Self {
        Self {
            data: ptr::null(),
            size: 0,
        }
    }
}

extern "C" {
    /// Load a network from a weight blob (`model_path`) and a topology
    /// descriptor (`param_path`). Returns null on any parse or I/O failure;
    /// details go to the engine's stderr.
    pub fn load_model(model_path: *const c_char, param_path: *const c_char) -> NetHandle;

    /// Release a loaded network. Not idempotent: call exactly once per
    /// successful `load_model`.
    pub fn unload_model(net: NetHandle);

    /// Run one synchronous inference. Returns the empty buffer on failure.
    pub fn infer(input: *const RawBuffer, net: NetHandle, format: *const c_char) -> RawBuffer;
}
