//! CLI logic for the Branchline timeline tool.
//!
//! Reads a sheet document, lays it out with [`TimelineBuilder`], and writes
//! the resulting view as pretty-printed JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write};

use log::info;

use branchline::{BranchlineError, TimelineBuilder, geometry::Size, sheet::Workbook};

/// Run the Branchline CLI application
///
/// # Errors
///
/// Returns `BranchlineError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed input documents
/// - Unknown sheet names
pub fn run(args: &Args) -> Result<(), BranchlineError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing timeline"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let mode = args.mode.unwrap_or_else(|| app_config.layout().mode());

    let source = fs::read_to_string(&args.input)?;
    let workbook = Workbook::from_json(&source)?;
    let sheet = workbook.sheet(args.sheet.as_deref())?;

    let viewport = Size::new(args.viewport_width, args.viewport_height);
    let builder = TimelineBuilder::new(app_config);
    let view = builder.render(sheet, mode, viewport)?;

    let mut json = serde_json::to_string_pretty(&view)?;
    json.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!(output_file = path; "Layout written");
        }
        None => std::io::stdout().lock().write_all(json.as_bytes())?,
    }

    Ok(())
}
