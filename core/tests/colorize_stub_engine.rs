//! End-to-end boundary tests against the in-process stand-in engine.
//!
//! The stand-in shares the real engine's surface and allocation discipline
//! (C-allocator output buffers, null-on-failure), so these tests exercise the
//! full ownership protocol: scoped handle release, caller-owned input, exactly
//! one free per output buffer, and clean early exits.
//!
//! The audit counters are process-global, so every test serializes on
//! `ENGINE`.

#![cfg(not(feature = "ncnn-runtime"))]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tempfile::TempDir;

use colornet_rs::inference::audit;
use colornet_rs::{ColorNet, ColornetError, InputBuffer, OutputFormat};

static ENGINE: Mutex<()> = Mutex::new(());

fn lock() -> std::sync::MutexGuard<'static, ()> {
    ENGINE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Write a plausible .param / .bin artifact pair into `dir`.
fn write_artifacts(dir: &TempDir) -> (PathBuf, PathBuf) {
    let param = dir.path().join("siggraph17_color_sim.param");
    let weights = dir.path().join("siggraph17_color_sim.bin");
    fs::write(
        &param,
        "7767517\n2 2\nInput      input  0 1 input\nConvolution conv1 1 1 input conv1\n",
    )
    .unwrap();
    fs::write(&weights, vec![0u8; 256]).unwrap();
    (param, weights)
}

/// A small grayscale-encoded JPEG payload: SOI, JFIF APP0, scan bytes, EOI.
fn jpeg_fixture() -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
    bytes.extend_from_slice(b"JFIF\0");
    bytes.extend(std::iter::repeat(0x5A).take(64));
    bytes.extend_from_slice(&[0xFF, 0xD9]);
    bytes
}

#[test]
fn load_and_release_leave_no_live_net() -> Result<()> {
    let _guard = lock();
    let dir = tempfile::tempdir()?;
    let (param, weights) = write_artifacts(&dir);

    let nets_before = audit::live_nets();
    {
        let _net = ColorNet::load(&param, &weights)?;
        assert_eq!(audit::live_nets(), nets_before + 1);
    }
    assert_eq!(audit::live_nets(), nets_before);
    Ok(())
}

#[test]
fn rejected_artifacts_leave_nothing_behind() -> Result<()> {
    let _guard = lock();
    let dir = tempfile::tempdir()?;

    let nets_before = audit::live_nets();

    // Missing files fail before any boundary call.
    let missing = dir.path().join("missing.param");
    let err = ColorNet::load(&missing, dir.path().join("missing.bin")).unwrap_err();
    assert!(matches!(err, ColornetError::FileNotFound(_)));

    // A param file without the ncnn magic is rejected by the engine.
    let bad_param = dir.path().join("net.param");
    let weights = dir.path().join("net.bin");
    fs::write(&bad_param, "not a param file\n")?;
    fs::write(&weights, vec![0u8; 16])?;
    let err = ColorNet::load(&bad_param, &weights).unwrap_err();
    assert!(matches!(err, ColornetError::ModelLoad(_)));

    assert_eq!(audit::live_nets(), nets_before);
    Ok(())
}

#[test]
fn empty_input_never_reaches_the_engine() {
    let _guard = lock();
    let calls_before = audit::infer_calls();

    let err = InputBuffer::new(&[]).unwrap_err();
    assert!(matches!(err, ColornetError::EmptyInput));

    assert_eq!(audit::infer_calls(), calls_before);
}

#[test]
fn full_run_releases_every_allocation() -> Result<()> {
    let _guard = lock();
    let dir = tempfile::tempdir()?;
    let (param, weights) = write_artifacts(&dir);

    let nets_before = audit::live_nets();
    let buffers_before = audit::live_output_buffers();

    {
        let net = ColorNet::load(&param, &weights)?;
        let source = jpeg_fixture();
        let input = InputBuffer::new(&source)?;

        let output = net.colorize(&input, OutputFormat::Jpeg)?;
        assert!(!output.is_empty());
        let encoded = output.as_slice();
        assert_eq!(&encoded[..2], &[0xFF, 0xD8], "output must open with SOI");
        assert_eq!(
            &encoded[encoded.len() - 2..],
            &[0xFF, 0xD9],
            "output must close with EOI"
        );
        assert_eq!(audit::live_output_buffers(), buffers_before + 1);
        // Input storage is still caller-owned and untouched after the call.
        assert_eq!(input.len(), source.len());
    }

    assert_eq!(audit::live_output_buffers(), buffers_before);
    assert_eq!(audit::live_nets(), nets_before);
    Ok(())
}

#[test]
fn truncated_image_fails_without_leaking() -> Result<()> {
    let _guard = lock();
    let dir = tempfile::tempdir()?;
    let (param, weights) = write_artifacts(&dir);

    let nets_before = audit::live_nets();
    let buffers_before = audit::live_output_buffers();

    {
        let net = ColorNet::load(&param, &weights)?;

        let mut truncated = jpeg_fixture();
        truncated.truncate(truncated.len() - 2);
        let input = InputBuffer::new(&truncated)?;

        let err = net.colorize(&input, OutputFormat::Jpeg).unwrap_err();
        assert!(matches!(err, ColornetError::Inference(_)));
        assert_eq!(audit::live_output_buffers(), buffers_before);

        // The handle survives a failed invocation.
        let source = jpeg_fixture();
        let input = InputBuffer::new(&source)?;
        let output = net.colorize(&input, OutputFormat::Jpeg)?;
        assert!(!output.is_empty());
    }

    assert_eq!(audit::live_output_buffers(), buffers_before);
    assert_eq!(audit::live_nets(), nets_before);
    Ok(())
}

#[test]
fn identical_invocations_produce_identical_bytes() -> Result<()> {
    let _guard = lock();
    let dir = tempfile::tempdir()?;
    let (param, weights) = write_artifacts(&dir);

    let net = ColorNet::load(&param, &weights)?;
    let source = jpeg_fixture();
    let input = InputBuffer::new(&source)?;

    let first = net.colorize(&input, OutputFormat::Jpeg)?;
    let second = net.colorize(&input, OutputFormat::Jpeg)?;

    assert_eq!(first.as_slice(), second.as_slice());
    // Distinct allocations, each owned and freed independently.
    assert_ne!(first.as_slice().as_ptr(), second.as_slice().as_ptr());
    Ok(())
}

#[test]
fn png_output_format_is_accepted() -> Result<()> {
    let _guard = lock();
    let dir = tempfile::tempdir()?;
    let (param, weights) = write_artifacts(&dir);

    let net = ColorNet::load(&param, &weights)?;
    let source = jpeg_fixture();
    let input = InputBuffer::new(&source)?;

    let output = net.colorize(&input, OutputFormat::Png)?;
    assert!(!output.is_empty());
    Ok(())
}
