//! Command-line interface for colornet-rs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Colorize grayscale photos with the siggraph17 network.
#[derive(Parser, Debug)]
#[command(name = "colornet-rs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Colorize an image file.
    Colorize {
        /// Path to the input image (JPEG or PNG).
        input: PathBuf,

        /// Path to write the colorized image to.
        #[arg(short, long)]
        output: PathBuf,

        /// Path to the .param topology descriptor.
        ///
        /// Falls back to the config file when omitted.
        #[arg(short, long)]
        param: Option<PathBuf>,

        /// Path to the .bin weight blob.
        ///
        /// Falls back to the config file when omitted.
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Output encoding (jpg, png). Falls back to the config file, then jpg.
        #[arg(short, long)]
        format: Option<String>,

        /// Path to an optional YAML config file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Load the model artifacts to verify they parse, then release them.
    Check {
        /// Path to the .param topology descriptor.
        #[arg(short, long)]
        param: Option<PathBuf>,

        /// Path to the .bin weight blob.
        #[arg(short, long)]
        weights: Option<PathBuf>,

        /// Path to an optional YAML config file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
