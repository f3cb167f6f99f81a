//! Colorization inference module.
//!
//! Raw FFI bindings to the native colornet engine plus the safe wrappers
//! that own every resource crossing the boundary.

pub mod audit;
mod buffer;
/// Raw engine bindings, linked against `libcolornet` when the `ncnn-runtime`
/// feature is on; otherwise an in-process stand-in with the same surface.
#[cfg(feature = "ncnn-runtime")]
mod ffi;
#[cfg(not(feature = "ncnn-runtime"))]
#[path = "ffi_stub.rs"]
mod ffi;
mod model;

pub use buffer::{InputBuffer, OutputBuffer};
pub use model::{ColorNet, OutputFormat};
