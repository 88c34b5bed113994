use anyhow::Result;
use canon_cli::{init_tracing, run_scrub, ScrubArgs};
use clap::Parser;

fn main() -> Result<()> {
    let args = ScrubArgs::parse();
    init_tracing();
    let stdout = std::io::stdout();
    run_scrub(&args, &mut stdout.lock())?;
    Ok(())
}
