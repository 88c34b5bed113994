//! Command-line front ends: `canonize-contacts` and `scrub-text`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use canon_core::CanonConfig;
use canon_names::{ContactPipeline, NormalizeReport};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Rewrite a contacts CSV so each row carries one unique ASCII name.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CanonizeArgs {
    /// Contacts CSV, overwritten in place
    pub path: PathBuf,
    /// JSON file overriding field names, selection mode or uniqueness policy
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Print the result to stdout instead of overwriting the file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Replace fancy Unicode with ASCII and strip emoji from a text file.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct ScrubArgs {
    /// Text file, overwritten in place as UTF-8
    pub path: PathBuf,
    /// Print the result to stdout instead of overwriting the file
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load, normalize and write back one contacts file. The file is only
/// touched after loading and normalizing both succeed.
pub fn run_canonize(args: &CanonizeArgs, out: &mut impl Write) -> Result<NormalizeReport> {
    let config = match &args.config {
        Some(path) => CanonConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CanonConfig::default(),
    };

    let mut table = canon_io::load_table(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let report = ContactPipeline::new(config).run(&mut table);

    if args.dry_run {
        canon_io::write_table(&mut *out, &table).context("writing to stdout")?;
    } else {
        canon_io::save_table(&args.path, &table)
            .with_context(|| format!("writing {}", args.path.display()))?;
    }
    tracing::info!(path = %args.path.display(), dry_run = args.dry_run, rows = report.rows, "done");
    Ok(report)
}

/// Scrub one text file in place.
pub fn run_scrub(args: &ScrubArgs, out: &mut impl Write) -> Result<()> {
    let text = canon_io::read_text(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let cleaned = canon_names::scrub(&text);

    if args.dry_run {
        out.write_all(cleaned.as_bytes()).context("writing to stdout")?;
    } else {
        canon_io::save_text(&args.path, &cleaned)
            .with_context(|| format!("writing {}", args.path.display()))?;
    }
    tracing::info!(
        path = %args.path.display(),
        before = text.len(),
        after = cleaned.len(),
        "text scrubbed"
    );
    Ok(())
}
