//! Ownership-tagged buffers for the engine boundary.
//!
//! The engine crosses raw pointer+length pairs in both directions; the two
//! directions have opposite ownership rules, so each gets its own type:
//!
//! - [`InputBuffer`] is a caller-owned view. The engine only reads it, and the
//!   borrow guarantees the backing storage outlives the call. No copy is made.
//! - [`OutputBuffer`] owns an engine allocation. It is move-only and frees the
//!   allocation exactly once, with the deallocator paired to the engine's
//!   allocator (`libc::free` for its `malloc`).
//!
//! Releasing an input buffer from the callee side, double-freeing an output
//! buffer, or leaking one are all unrepresentable through these types.

use std::ffi::c_void;
use std::slice;

use super::audit;
use super::ffi;
use crate::error::{ColornetError, Result};

/// Caller-owned view over the source image bytes, passed into the engine.
///
/// Construction rejects empty input, so a zero-length buffer never reaches
/// the boundary.
#[derive(Debug)]
pub struct InputBuffer<'a> {
    bytes: &'a [u8],
}

impl<'a> InputBuffer<'a> {
    /// Wrap the source bytes without copying.
    ///
    /// # Errors
    ///
    /// Returns [`ColornetError::EmptyInput`] if `bytes` is empty.
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(ColornetError::EmptyInput);
        }
        Ok(Self { bytes })
    }

    /// Length of the wrapped image in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer is empty. Always false for a constructed buffer.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The boundary representation. Valid for as long as `self` is borrowed.
    pub(super) fn as_raw(&self) -> ffi::RawBuffer {
        ffi::RawBuffer {
            data: self.bytes.as_ptr(),
            size: self.bytes.len(),
        }
    }
}

/// An engine-allocated result buffer owned by this process.
///
/// Freed exactly once on drop via `libc::free`, pairing the engine's
/// `malloc`. Not `Clone`: there is exactly one owner at any instant.
#[derive(Debug)]
pub struct OutputBuffer {
    data: *mut u8,
    size: usize,
}

impl OutputBuffer {
    /// Take ownership of a buffer returned by the engine.
    ///
    /// Returns `None` for the engine's empty failure signal. A null `data`
    /// always arrives with `size == 0` (and the reverse); a zero-size
    /// allocation would violate that invariant and is released here rather
    /// than surfaced.
    ///
    /// # Safety
    ///
    /// `raw` must be a buffer returned by the engine's `infer`, not yet
    /// owned elsewhere. When `data` is non-null it must point to a live
    /// C-allocator allocation of `size` bytes.
    pub(super) unsafe fn from_raw(raw: ffi::RawBuffer) -> Option<Self> {
        if raw.data.is_null() {
            debug_assert_eq!(raw.size, 0, "engine returned null data with nonzero size");
            return None;
        }
        if raw.size == 0 {
            libc::free(raw.data as *mut c_void);
            audit::record_output_released();
            return None;
        }
        Some(Self {
            data: raw.data as *mut u8,
            size: raw.size,
        })
    }

    /// The encoded result bytes.
    pub fn as_slice(&self) -> &[u8] {
        // SAFETY: `data` points to a live allocation of `size` bytes owned by
        // this buffer (from_raw contract), never aliased mutably.
        unsafe { slice::from_raw_parts(self.data, self.size) }
    }

    /// Length of the encoded result in bytes. Always nonzero.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the buffer is empty. Always false for a constructed buffer.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl Drop for OutputBuffer {
    fn drop(&mut self) {
        // SAFETY: `data` came from the engine's C allocator and this is the
        // single owner; `free` is the paired deallocator.
        unsafe { libc::free(self.data as *mut c_void) };
        audit::record_output_released();
    }
}
