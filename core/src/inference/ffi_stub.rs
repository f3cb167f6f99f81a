//! In-process stand-in for the native colornet engine.
//!
//! Compiled when the `ncnn-runtime` feature is off, with the same symbol
//! surface as `ffi.rs`, so the safe wrappers and the full boundary protocol
//! can be exercised without ncnn/OpenCV installed. Failure reporting matches
//! the native engine: diagnostics on stderr, the empty buffer as the only
//! failure signal.
//!
//! The stand-in does not decode or colorize pixels (that is the real engine's
//! concern); it validates the model artifacts and the input's container
//! signature, then returns a deterministic copy of the payload allocated with
//! the C allocator, so the caller's `free` pairing is exercised for real.

#![allow(missing_docs)]

use std::ffi::{c_void, CStr};
use std::fs;
use std::os::raw::c_char;
use std::ptr;

use super::audit;

/// Opaque handle to a loaded network.
pub type NetHandle = *mut c_void;

/// A contiguous byte region crossing the engine boundary.
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

/// Stand-in network state. Only the artifact sizes are retained.
#[allow(dead_code)]
struct StubNet {
    param_bytes: usize,
    weight_bytes: usize,
}

/// ncnn text param files start with this magic line.
const NCNN_PARAM_MAGIC: &[u8] = b"7767517";

unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

pub unsafe extern "C" fn load_model(
    model_path: *const c_char,
    param_path: *const c_char,
) -> NetHandle {
    let (Some(model_path), Some(param_path)) =
        (cstr_to_str(model_path), cstr_to_str(param_path))
    else {
        eprintln!("colornet: model and param paths are required");
        return ptr::null_mut();
    };

    let params = match fs::read(param_path) {
        Ok(bytes) if bytes.starts_with(NCNN_PARAM_MAGIC) => bytes,
        _ => {
            eprintln!("colornet: failed to load model params");
            return ptr::null_mut();
        }
    };

    let weights = match fs::read(model_path) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        _ => {
            eprintln!("colornet: failed to load model");
            return ptr::null_mut();
        }
    };

    let net = Box::new(StubNet {
        param_bytes: params.len(),
        weight_bytes: weights.len(),
    });
    audit::record_net_loaded();
    Box::into_raw(net) as NetHandle
}

pub unsafe extern "C" fn unload_model(net: NetHandle) {
    if net.is_null() {
        return;
    }
    drop(Box::from_raw(net as *mut StubNet));
    audit::record_net_released();
}

pub unsafe extern "C" fn infer(
    input: *const RawBuffer,
    net: NetHandle,
    format: *const c_char,
) -> RawBuffer {
    audit::record_infer_call();

    if net.is_null() {
        eprintln!("colornet: load a model before inference");
        return RawBuffer::empty();
    }

    let Some(format) = cstr_to_str(format) else {
        eprintln!("colornet: format string is required and must be one of png, jpg");
        return RawBuffer::empty();
    };
    if format != "jpg" && format != "png" {
        eprintln!("colornet: unsupported output format: {format}");
        return RawBuffer::empty();
    }

    if input.is_null() {
        eprintln!("colornet: input buffer is required");
        return RawBuffer::empty();
    }
    let input = &*input;
    if input.data.is_null() || input.size == 0 {
        eprintln!("colornet: input buffer is empty");
        return RawBuffer::empty();
    }

    let bytes = std::slice::from_raw_parts(input.data, input.size);
    if !is_complete_image(bytes) {
        eprintln!("colornet: failed to decode image");
        return RawBuffer::empty();
    }

    // Deterministic passthrough standing in for decode -> colorize -> encode.
    // Allocated with the C allocator so the caller's `free` pairing holds.
    let out = libc::malloc(bytes.len()) as *mut u8;
    if out.is_null() {
        eprintln!("colornet: failed to allocate output buffer");
        return RawBuffer::empty();
    }
    ptr::copy_nonoverlapping(bytes.as_ptr(), out, bytes.len());
    audit::record_output_allocated();

    RawBuffer {
        data: out,
        size: bytes.len(),
    }
}

/// Container-signature sniff standing in for the engine's image decode.
///
/// Accepts a JPEG with both SOI and EOI markers or a PNG with its signature
/// and IEND trailer; truncated payloads fail the trailer check.
fn is_complete_image(bytes: &[u8]) -> bool {
    const JPEG_SOI: [u8; 2] = [0xFF, 0xD8];
    const JPEG_EOI: [u8; 2] = [0xFF, 0xD9];
    const PNG_SIG: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    const PNG_IEND: [u8; 8] = [b'I', b'E', b'N', b'D', 0xAE, 0x42, 0x60, 0x82];

    if bytes.len() >= 4 && bytes.starts_with(&JPEG_SOI) && bytes.ends_with(&JPEG_EOI) {
        return true;
    }
    bytes.len() >= 16 && bytes.starts_with(&PNG_SIG) && bytes.ends_with(&PNG_IEND)
}
