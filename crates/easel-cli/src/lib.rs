//! CLI logic for the Easel scene renderer.
//!
//! This module contains the core CLI logic: load configuration, render either
//! a scene file or the built-in demo, and write the text output.

pub mod demo;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use log::info;

use easel::{EaselError, SceneBuilder};

/// Run the Easel CLI application
///
/// This function renders the input scene, or the demo when no input is
/// given, and writes the resulting text to the output file or stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `EaselError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Unresolved scene references
pub fn run(args: &Args) -> Result<(), EaselError> {
    info!(
        input_path:? = args.input,
        output_path:? = args.output;
        "Processing scene"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = SceneBuilder::new(app_config);

    let output = match &args.input {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            let scene = builder.parse(&source)?;
            builder.render(&scene)?
        }
        None => demo::run(),
    };

    let options = builder.config().render().options();

    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            output.write_to(&mut writer, &options)?;
            writer.flush()?;
            info!(output_file = path; "Output written successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            output.write_to(&mut stdout, &options)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
