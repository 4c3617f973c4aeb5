//! Load a definition, build its bi-enum and run the requested checks.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use bienum::solver::diagnostics::DiagnosticBuilder;
use bienum::solver::lower_value;
use bienum::{
    BiEnum, BiEnumSurface, Definition, PropertyAccessResult, TypeDiagnostic, TypeInterner, Value,
    explain_assignability_failure, infer_bi_enum_type, is_assignable_to, property_type,
    to_bi_enum,
};

use crate::args::CliArgs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    Value,
    Label,
}

impl CheckKind {
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::Value => "value",
            CheckKind::Label => "label",
        }
    }
}

/// Result of one `--check-value` / `--check-label`.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    /// The argument as given on the command line.
    pub input: String,
    pub passed: bool,
    /// Why the check fails at the type level. Only set with `--types`.
    pub diagnostic: Option<TypeDiagnostic>,
}

/// Everything the reporter prints.
#[derive(Debug)]
pub struct Report {
    pub instance: BiEnum,
    /// `(name, type)` rows, present with `--types`.
    pub types: Option<Vec<(&'static str, String)>>,
    pub shadowed_helpers: Vec<&'static str>,
    pub checks: Vec<CheckOutcome>,
}

impl Report {
    pub fn all_checks_passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }
}

pub fn run(args: &CliArgs) -> Result<Report> {
    let definition = load_definition(args)?;
    build_report(&definition, args)
}

pub fn load_definition(args: &CliArgs) -> Result<Definition> {
    let (source, origin) = if args.reads_stdin() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read definition from stdin")?;
        (source, "<stdin>".to_string())
    } else {
        (read_source(&args.input)?, args.input.display().to_string())
    };

    let definition = Definition::from_json_str(&source)
        .with_context(|| format!("invalid definition in {origin}"))?;
    debug!(origin = %origin, entries = definition.len(), "loaded definition");
    Ok(definition)
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

pub fn build_report(definition: &Definition, args: &CliArgs) -> Result<Report> {
    let instance = to_bi_enum(definition);

    let interner = TypeInterner::new();
    let surface = args
        .types
        .then(|| infer_bi_enum_type(&interner, definition));

    let mut checks = Vec::with_capacity(args.check_values.len() + args.check_labels.len());
    for raw in &args.check_values {
        checks.push(check_value(&instance, &interner, surface.as_ref(), raw)?);
    }
    for label in &args.check_labels {
        checks.push(check_label(&instance, &interner, surface.as_ref(), label));
    }

    Ok(Report {
        shadowed_helpers: instance.shadowed_helpers(),
        types: surface.as_ref().map(|surface| surface.describe(&interner)),
        instance,
        checks,
    })
}

fn check_value(
    instance: &BiEnum,
    interner: &TypeInterner,
    surface: Option<&BiEnumSurface>,
    raw: &str,
) -> Result<CheckOutcome> {
    let json: serde_json::Value = serde_json::from_str(raw)
        .with_context(|| format!("--check-value expects JSON, got `{raw}`"))?;
    let value = Value::from(json);
    let passed = instance.is_value(&value);

    let diagnostic = surface.and_then(|surface| {
        let source = lower_value(interner, &value);
        if is_assignable_to(interner, source, surface.value_type) {
            return None;
        }
        Some(
            explain_assignability_failure(interner, source, surface.value_type)
                .map(|reason| reason.to_diagnostic(interner, source, surface.value_type))
                .unwrap_or_else(|| {
                    DiagnosticBuilder::new(interner).type_not_assignable(source, surface.value_type)
                }),
        )
    });

    debug!(raw, passed, "checked value");
    Ok(CheckOutcome {
        kind: CheckKind::Value,
        input: raw.to_string(),
        passed,
        diagnostic,
    })
}

fn check_label(
    instance: &BiEnum,
    interner: &TypeInterner,
    surface: Option<&BiEnumSurface>,
    label: &str,
) -> CheckOutcome {
    let passed = instance.is_label(label);

    let diagnostic = surface.and_then(|surface| {
        match property_type(interner, surface.forward, label) {
            PropertyAccessResult::Success { .. } => None,
            failed => failed.to_diagnostic(interner),
        }
    });

    debug!(label, passed, "checked label");
    CheckOutcome {
        kind: CheckKind::Label,
        input: label.to_string(),
        passed,
        diagnostic,
    }
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod tests;
