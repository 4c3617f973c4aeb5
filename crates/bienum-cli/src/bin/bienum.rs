use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use bienum_cli::args::CliArgs;
use bienum_cli::driver;
use bienum_cli::reporter::Reporter;

/// A `--check-value` or `--check-label` did not hold. Unreadable or invalid
/// input exits with 1 through the returned error.
const EXIT_CHECK_FAILED: i32 = 2;

fn main() -> Result<()> {
    // Initialize tracing if BIENUM_LOG or RUST_LOG is set.
    bienum::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let report = driver::run(&args)?;

    let color = !args.no_color && std::io::stdout().is_terminal();
    let output = Reporter::new(color).with_pretty(args.pretty).render(&report)?;
    print!("{output}");

    if !report.all_checks_passed() {
        std::process::exit(EXIT_CHECK_FAILED);
    }
    Ok(())
}
