use clap::Parser;
use std::path::{Path, PathBuf};

/// CLI arguments for the bienum binary.
#[derive(Parser, Debug)]
#[command(
    name = "bienum",
    version,
    about = "Build a bidirectional enum from a JSON definition object"
)]
pub struct CliArgs {
    /// JSON file holding the definition object. `-` reads stdin.
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Also print the inferred static types of the bi-enum.
    #[arg(long)]
    pub types: bool,

    /// Pretty-print the instance JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Check whether a JSON value is one of the enum's values.
    #[arg(long = "check-value", value_name = "JSON")]
    pub check_values: Vec<String>,

    /// Check whether a string is one of the enum's labels.
    #[arg(long = "check-label", value_name = "LABEL")]
    pub check_labels: Vec<String>,
}

impl CliArgs {
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }
}

#[cfg(test)]
#[path = "../tests/args_tests.rs"]
mod tests;
