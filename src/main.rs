//! csstoc: write a table of contents into stylesheet placeholder comments.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use csstoc::config::Config;
use csstoc::edit_plan::EditPlan;
use csstoc::{input, process_css, Error, PartialOptions, Report, TocOptions};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "csstoc")]
#[command(about = "Table of contents from stylesheet heading comments", long_about = None)]
struct Args {
    /// Files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Indentation repeated once per heading level
    #[arg(long, value_name = "PAD")]
    pad_depth_char: Option<String>,

    /// Marker identifying the placeholder comment
    #[arg(long, value_name = "MARKER")]
    block_identifier: Option<String>,

    /// Read configuration from this file instead of csstoc.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the edit plan as JSON instead of writing files
    #[arg(long, conflicts_with = "stdout")]
    dry_run: bool,

    /// Print transformed stylesheets instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Apply an edit plan previously printed by --dry-run
    #[arg(long, value_name = "FILE", conflicts_with_all = ["dry_run", "stdout"])]
    apply_plan: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("csstoc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> csstoc::Result<()> {
    if let Some(plan_path) = args.apply_plan {
        let plan: EditPlan = serde_json::from_str(&read(&plan_path)?)?;
        return plan.apply();
    }

    let mut cfg = match &args.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load(),
    };

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }
    let flags = PartialOptions {
        pad_depth_char: args.pad_depth_char,
        block_identifier: args.block_identifier,
        ..PartialOptions::default()
    };
    let options = TocOptions::default().merge(cfg.partial_options().layer(flags));

    let documents = input::find_documents(args.paths, &cfg.file_extensions)?;

    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let mut plan = EditPlan::default();
    for doc in &documents {
        let name = doc.to_string_lossy();
        let mut report = Report::default();
        let (sheet, summary) = process_css(&read(doc)?, &options, &mut report)?;
        info!(
            file = %name,
            headings = summary.headings,
            placeholders = summary.placeholders,
            rewritten = summary.rewritten,
            "outline pass"
        );

        for warning in &report.warnings {
            warn!(file = %name, "{}", warning.text);
        }

        if args.stdout {
            print!("{}", sheet.to_css());
        } else {
            let edits = EditPlan::for_stylesheet(&name, &sheet);
            info!(file = %name, edits = edits.edits.len(), "planned edits");
            plan.extend(edits);
        }
    }

    if args.stdout {
        return Ok(());
    }
    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }
    plan.apply()
}

fn read(path: &Path) -> csstoc::Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
