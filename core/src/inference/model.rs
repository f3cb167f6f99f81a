//! Safe wrappers for the native colorization engine.
//!
//! This module provides the type-safe Rust layer over the C FFI: loading and
//! releasing the network, and the single synchronous colorize call.

use std::ffi::CString;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::buffer::{InputBuffer, OutputBuffer};
use super::ffi;
use crate::error::{ColornetError, Result};

/// Output encoding for the colorized image.
///
/// Passed to the engine as a short textual tag by copy; the engine neither
/// retains nor frees it. There is no hidden default: the call site always
/// names the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JPEG container.
    Jpeg,
    /// PNG container.
    Png,
}

impl OutputFormat {
    /// The tag the engine expects.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ColornetError;

    /// Parse a format tag like "jpg", "jpeg", or "png".
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            other => Err(ColornetError::Format(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A loaded colorization network.
///
/// Owns the engine-side resource exclusively: the type is move-only, the raw
/// handle is never exposed, and the resource is released exactly once when
/// the value drops, on every exit path including early-return failures.
/// Inference after release is unrepresentable.
///
/// The engine's thread safety is unspecified, so `ColorNet` is deliberately
/// neither `Send` nor `Sync`; wrap it in external synchronization before
/// sharing across threads.
///
/// # Example
///
/// ```ignore
/// use colornet_rs::{ColorNet, InputBuffer, OutputFormat};
///
/// let net = ColorNet::load("siggraph17.param", "siggraph17.bin")?;
/// let source = std::fs::read("photo.jpg")?;
/// let input = InputBuffer::new(&source)?;
/// let colorized = net.colorize(&input, OutputFormat::Jpeg)?;
/// std::fs::write("photo_color.jpg", colorized.as_slice())?;
/// ```
pub struct ColorNet {
    handle: ffi::NetHandle,
}

impl ColorNet {
    /// Load a network from its topology descriptor and weight blob.
    ///
    /// # Arguments
    ///
    /// * `param_path` - Path to the `.param` topology descriptor
    /// * `weights_path` - Path to the `.bin` weight blob
    ///
    /// # Errors
    ///
    /// Returns an error if either path is missing or the engine rejects the
    /// artifacts. The engine reports the cause on its stderr; only the
    /// null-handle signal crosses the boundary.
    pub fn load(param_path: impl AsRef<Path>, weights_path: impl AsRef<Path>) -> Result<Self> {
        let param_path = param_path.as_ref();
        let weights_path = weights_path.as_ref();
        if !param_path.exists() {
            return Err(ColornetError::FileNotFound(param_path.to_path_buf()));
        }
        if !weights_path.exists() {
            return Err(ColornetError::FileNotFound(weights_path.to_path_buf()));
        }

        let param_cstr = CString::new(param_path.to_string_lossy().as_ref())
            .map_err(|_| ColornetError::model_load("Invalid param path encoding"))?;
        let weights_cstr = CString::new(weights_path.to_string_lossy().as_ref())
            .map_err(|_| ColornetError::model_load("Invalid weights path encoding"))?;

        // The engine takes the weight blob first, the topology second.
        let handle = unsafe { ffi::load_model(weights_cstr.as_ptr(), param_cstr.as_ptr()) };

        if handle.is_null() {
            Err(ColornetError::model_load(format!(
                "engine rejected {} / {} (see engine diagnostics on stderr)",
                param_path.display(),
                weights_path.display()
            )))
        } else {
            Ok(Self { handle })
        }
    }

    /// Run one synchronous colorization pass.
    ///
    /// The engine only reads `input`; its backing storage stays owned by the
    /// caller. On success the returned [`OutputBuffer`] owns the encoded
    /// result and frees it when dropped. Repeated calls against the same
    /// network are supported and deterministic for identical input bytes;
    /// nothing is cached between calls.
    ///
    /// # Errors
    ///
    /// Returns [`ColornetError::Inference`] when the engine signals failure
    /// (unreadable image payload, unsupported format, internal error). No
    /// partial output ever escapes the boundary.
    pub fn colorize(&self, input: &InputBuffer<'_>, format: OutputFormat) -> Result<OutputBuffer> {
        let format_cstr = CString::new(format.as_tag())
            .map_err(|_| ColornetError::inference("Invalid format string"))?;

        let raw_input = input.as_raw();
        // SAFETY: `self.handle` is live (post-load, pre-drop by construction),
        // `raw_input` points into storage borrowed for this call, and the
        // format tag outlives the call. The engine reads both and retains
        // neither.
        let raw_output = unsafe { ffi::infer(&raw_input, self.handle, format_cstr.as_ptr()) };

        // SAFETY: `raw_output` came from `infer` and no one else owns it.
        match unsafe { OutputBuffer::from_raw(raw_output) } {
            Some(output) => Ok(output),
            None => Err(ColornetError::inference(format!(
                "engine produced no {format} output (see engine diagnostics on stderr)"
            ))),
        }
    }
}

impl Drop for ColorNet {
    fn drop(&mut self) {
        // SAFETY: the handle is live and this is its single release.
        unsafe { ffi::unload_model(self.handle) };
    }
}
