//! tablesort - Entry Point

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tablesort::integration::{ActivationSpec, OutputFormat};
use tracing::info;

/// tablesort - click-to-sort viewer for HTML tables
#[derive(Parser, Debug)]
#[command(name = "tablesort")]
#[command(version)]
#[command(about = "Sort HTML tables by header column, interactively or in batch")]
pub struct Args {
    /// Path to HTML file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Class a table must carry to be sortable
    #[arg(short, long)]
    pub marker: Option<String>,

    /// Activate header COLUMN of sortable TABLE, then print the result (repeatable)
    #[arg(short, long, value_name = "TABLE:COLUMN")]
    pub sort: Vec<ActivationSpec>,

    /// Batch output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Show row numbers in the viewer
    #[arg(long)]
    pub row_numbers: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tablesort::config::load_config_with_precedence(args.config.clone())?;
        let merged = tablesort::config::merge_config(config_file);
        let with_env = tablesort::config::apply_env_overrides(merged);
        let row_numbers_override = if args.row_numbers { Some(true) } else { None };
        tablesort::config::apply_cli_overrides(with_env, args.marker.clone(), row_numbers_override)
    };

    tablesort::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let document = tablesort::source::detect_input_source(args.file.clone())?.load()?;

    if !args.sort.is_empty() {
        let output = tablesort::integration::run_batch(
            document,
            &config.opt_in_marker,
            &args.sort,
            args.format,
        )?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let mut registrar = tablesort::registrar::TableRegistrar::new(config.opt_in_marker);
    registrar.register_document(&document);
    tablesort::view::run_viewer(document, registrar, config.show_row_numbers)?;

    Ok(())
}
