//! Command-line argument definitions for the Branchline CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the view mode, the
//! viewport floor, configuration file selection, and logging verbosity.

use clap::Parser;

use branchline_core::node::ViewMode;

/// Command-line arguments for the Branchline timeline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input JSON document (workbook, sheet, or node array)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output JSON file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// View mode (vertical, horizontal, timeline); the configured mode when omitted
    #[arg(short, long)]
    pub mode: Option<ViewMode>,

    /// Name of the sheet to render; the first sheet when omitted
    #[arg(long)]
    pub sheet: Option<String>,

    /// Minimum canvas width
    #[arg(long, default_value_t = 0.0)]
    pub viewport_width: f32,

    /// Minimum canvas height
    #[arg(long, default_value_t = 0.0)]
    pub viewport_height: f32,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
