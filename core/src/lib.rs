//! colornet-rs: colorize grayscale photos through the native ncnn siggraph17 engine.
//!
//! This crate provides a Rust interface for the colornet inference engine: a
//! C++ library that decodes an image, runs the siggraph17 colorization
//! network with ncnn, and encodes the result. The crate owns the boundary
//! (model lifecycle, buffer ownership in both directions, and cleanup on
//! every exit path) while decode/inference/encode stay inside the engine.
//!
//! # Features
//!
//! - **ncnn-runtime**: Link against the real `libcolornet` (requires ncnn and
//!   OpenCV). Without it the crate compiles an in-process stand-in engine
//!   with the same boundary surface, so the wrapper layer builds and tests
//!   anywhere.
//!
//! # Example
//!
//! ```ignore
//! use colornet_rs::{ColorNet, InputBuffer, OutputFormat};
//!
//! // Load the network from its two artifacts
//! let net = ColorNet::load("siggraph17.param", "siggraph17.bin")?;
//!
//! // Wrap the source bytes (no copy) and run one inference
//! let source = std::fs::read("photo.jpg")?;
//! let input = InputBuffer::new(&source)?;
//! let colorized = net.colorize(&input, OutputFormat::Jpeg)?;
//!
//! std::fs::write("photo_color.jpg", colorized.as_slice())?;
//! // Output buffer, input storage, and network all release on drop.
//! ```
//!
//! # Building
//!
//! The default build needs no native libraries. For the real engine, build
//! `libcolornet` and point the build script at it:
//!
//! ```bash
//! COLORNET_LIB_DIR=/opt/colornet/lib cargo build --release --features ncnn-runtime
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod inference;

// Re-export commonly used types
pub use error::{ColornetError, Result};
pub use inference::{ColorNet, InputBuffer, OutputBuffer, OutputFormat};
