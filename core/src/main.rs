//! CLI entry point for colornet-rs.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use colornet_rs::cli::{Cli, Commands};
use colornet_rs::config::Config;
use colornet_rs::{ColorNet, InputBuffer, OutputFormat};

/// Resolve the two model artifact paths from CLI flags and config.
///
/// CLI flags win; the config file supplies defaults. There is no built-in
/// installation path.
fn resolve_artifacts(
    param: Option<PathBuf>,
    weights: Option<PathBuf>,
    config: &Config,
) -> Result<(PathBuf, PathBuf)> {
    let param = param
        .or_else(|| config.model.param_path.as_ref().map(PathBuf::from))
        .context("model param path required (--param or config file)")?;
    let weights = weights
        .or_else(|| config.model.weights_path.as_ref().map(PathBuf::from))
        .context("model weights path required (--weights or config file)")?;
    Ok((param, weights))
}

/// Load the optional config file, defaulting when none is given.
fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::from_yaml_file(&path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Colorize {
            input,
            output,
            param,
            weights,
            format,
            config,
        } => {
            let config = load_config(config)?;
            let (param, weights) = resolve_artifacts(param, weights, &config)?;

            let format: OutputFormat = format
                .as_deref()
                .unwrap_or(&config.output.format)
                .parse()?;

            info!("Loading model: {} / {}", param.display(), weights.display());
            let net = ColorNet::load(&param, &weights)?;
            info!("Model loaded successfully");

            let source = fs::read(&input)
                .with_context(|| format!("Failed to read input: {}", input.display()))?;
            info!("Read input: {} ({} bytes)", input.display(), source.len());

            // Zero-length input is rejected here, before any boundary call.
            let input_buffer = InputBuffer::new(&source)
                .with_context(|| format!("Rejected input: {}", input.display()))?;
            info!("Running inference...");
            let colorized = net.colorize(&input_buffer, format)?;
            info!("Inference complete: {} bytes of {}", colorized.len(), format);

            fs::write(&output, colorized.as_slice())
                .with_context(|| format!("Failed to write output: {}", output.display()))?;
            println!("Colorized image written to {}", output.display());
        }

        Commands::Check {
            param,
            weights,
            config,
        } => {
            let config = load_config(config)?;
            let (param, weights) = resolve_artifacts(param, weights, &config)?;

            println!("colornet-rs v{}", env!("CARGO_PKG_VERSION"));
            println!("Param:   {}", param.display());
            println!("Weights: {}", weights.display());

            // Load to verify the artifacts parse; released on drop.
            info!("Loading model...");
            let _net = ColorNet::load(&param, &weights)?;
            println!("Status: OK (model loaded successfully)");
        }
    }

    Ok(())
}
