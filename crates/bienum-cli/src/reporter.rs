use anyhow::{Context, Result};
use colored::Colorize;

use bienum::{TypeDiagnostic, Value};

use crate::driver::{CheckOutcome, Report};

pub struct Reporter {
    color: bool,
    pretty: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn render(&self, report: &Report) -> Result<String> {
        let instance = if self.pretty {
            serde_json::to_string_pretty(&report.instance)
        } else {
            serde_json::to_string(&report.instance)
        }
        .context("failed to serialize the bi-enum")?;

        let mut out = String::new();
        out.push_str(&instance);
        out.push('\n');

        let labels = report
            .instance
            .all_labels()
            .iter()
            .map(|label| Value::from(label.as_str()).to_string())
            .collect::<Vec<_>>();
        let values = report
            .instance
            .all_values()
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>();
        out.push_str(&self.format_row("labels", &format!("[{}]", labels.join(", "))));
        out.push_str(&self.format_row("values", &format!("[{}]", values.join(", "))));

        if !report.shadowed_helpers.is_empty() {
            out.push_str(&format!(
                "{}: own entries shadow helpers: {}\n",
                self.format_warning(),
                report.shadowed_helpers.join(", ")
            ));
        }

        if let Some(types) = &report.types {
            out.push_str(&self.format_heading("types"));
            out.push('\n');
            let width = types.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
            for (name, ty) in types {
                out.push_str(&format!("  {name:width$}  {ty}\n"));
            }
        }

        for check in &report.checks {
            out.push_str(&self.format_check(check));
        }
        Ok(out)
    }

    fn format_row(&self, name: &str, body: &str) -> String {
        format!("{}: {body}\n", self.format_heading(name))
    }

    fn format_check(&self, check: &CheckOutcome) -> String {
        let status = match (check.passed, self.color) {
            (true, true) => "ok".green().to_string(),
            (true, false) => "ok".to_string(),
            (false, true) => "no".red().bold().to_string(),
            (false, false) => "no".to_string(),
        };
        let mut out = format!("check {} {}: {status}\n", check.kind.name(), check.input);
        if let Some(diagnostic) = &check.diagnostic {
            self.format_diagnostic(diagnostic, 1, &mut out);
        }
        out
    }

    pub fn format_diagnostic(&self, diagnostic: &TypeDiagnostic, depth: usize, out: &mut String) {
        out.push_str(&format!(
            "{:indent$}{} {}: {}\n",
            "",
            self.format_error(),
            self.format_code(diagnostic.code),
            diagnostic.message,
            indent = depth * 2
        ));
        for related in &diagnostic.related {
            self.format_diagnostic(related, depth + 1, out);
        }
    }

    fn format_heading(&self, label: &str) -> String {
        if self.color {
            label.bold().to_string()
        } else {
            label.to_string()
        }
    }

    fn format_error(&self) -> String {
        if self.color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        }
    }

    fn format_warning(&self) -> String {
        if self.color {
            "warning".yellow().bold().to_string()
        } else {
            "warning".to_string()
        }
    }

    fn format_code(&self, code: u32) -> String {
        let label = format!("TS{}", code);
        if self.color {
            label.bright_blue().to_string()
        } else {
            label
        }
    }
}

#[cfg(test)]
#[path = "../tests/reporter_tests.rs"]
mod tests;
