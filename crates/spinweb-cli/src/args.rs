//! Command-line argument definitions for the Spinweb CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control input/output paths,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Spinweb diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input TOML file with the title and level selections
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output PNG file
    #[arg(short, long, default_value = "spiderweb.png")]
    pub output: String,

    /// Also write the SVG document to this path
    #[arg(long)]
    pub svg: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
