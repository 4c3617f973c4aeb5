//! Tracing configuration.
//!
//! `BIENUM_LOG` (or `RUST_LOG`) holds the filter directives and switches
//! logging on; `BIENUM_LOG_FORMAT` picks `text` (default), `tree` or `json`.
//!
//! ```bash
//! BIENUM_LOG=bienum_solver=trace BIENUM_LOG_FORMAT=tree bienum --types direction.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "BIENUM_LOG";
const LOG_FORMAT_ENV: &str = "BIENUM_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON.
    Json,
}

impl LogFormat {
    /// Case-insensitive; unknown names are `Text`.
    pub fn parse(name: &str) -> Self {
        if name.eq_ignore_ascii_case("tree") {
            LogFormat::Tree
        } else if name.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Install the global subscriber, writing to stderr. No-op unless
/// `BIENUM_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
        return;
    };
    let format = LogFormat::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default());

    let tree = (format == LogFormat::Tree).then(|| {
        tracing_tree::HierarchicalLayer::new(2)
            .with_indent_lines(true)
            .with_targets(true)
    });
    let json = (format == LogFormat::Json)
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text = (format == LogFormat::Text).then(|| fmt::layer().with_writer(std::io::stderr));

    Registry::default()
        .with(EnvFilter::builder().parse_lossy(directives))
        .with(tree)
        .with(json)
        .with(text)
        .init();
}
