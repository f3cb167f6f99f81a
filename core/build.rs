//! Build script for colornet-rs.
//!
//! With the `ncnn-runtime` feature this links the native colornet engine
//! (`libcolornet`, which itself carries ncnn, OpenCV, and the Vulkan loader).
//! Without it the crate compiles the in-process stand-in engine and no native
//! libraries are required, so the script does nothing.
//!
//! # Environment Variables
//!
//! - `COLORNET_LIB_DIR`: Directory containing `libcolornet` (optional; the
//!   system linker paths are used when unset)

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=COLORNET_LIB_DIR");

    if env::var_os("CARGO_FEATURE_NCNN_RUNTIME").is_none() {
        return;
    }

    match env::var("COLORNET_LIB_DIR") {
        Ok(dir) => {
            let dir = PathBuf::from(dir);
            if !dir.exists() {
                panic!(
                    "COLORNET_LIB_DIR points at {}, which does not exist",
                    dir.display()
                );
            }
            println!("cargo:rustc-link-search=native={}", dir.display());
        }
        Err(_) => {
            println!(
                "cargo:warning=COLORNET_LIB_DIR is unset; relying on system linker paths for libcolornet"
            );
        }
    }

    println!("cargo:rustc-link-lib=dylib=colornet");
}
