use anyhow::Result;
use canon_cli::{init_tracing, run_canonize, CanonizeArgs};
use clap::Parser;

fn main() -> Result<()> {
    let args = CanonizeArgs::parse();
    init_tracing();
    let stdout = std::io::stdout();
    run_canonize(&args, &mut stdout.lock())?;
    Ok(())
}
