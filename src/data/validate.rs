//! Item catalog validation: structural checks before a catalog is trusted by
//! the gear aggregator. Reports carry severity, context, and message so the
//! CLI can print actionable diagnostics.

use std::collections::HashSet;
use std::fmt;
use std::fs;

use crate::data::item::{is_known_slot, is_known_stat_key};
use crate::data::store::ItemCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for ValidationSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDiagnostic {
    pub severity: ValidationSeverity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for ValidationDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.context, self.message)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    pub fn push(
        &mut self,
        severity: ValidationSeverity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(ValidationDiagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == ValidationSeverity::Error)
    }
}

/// Validate the catalog file at `path`. An unreadable or unparseable file is
/// a hard error; otherwise every item is checked and all findings returned.
pub fn validate_item_catalog(path: &str) -> Result<ValidationReport, String> {
    let raw = fs::read_to_string(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    let catalog: ItemCatalog =
        serde_json::from_str(&raw).map_err(|err| format!("unable to parse json '{path}': {err}"))?;
    Ok(validate_catalog(&catalog))
}

pub fn validate_catalog(catalog: &ItemCatalog) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen_names = HashSet::new();

    for (index, item) in catalog.items.iter().enumerate() {
        let context = format!("items[{index}]");

        if item.name.trim().is_empty() {
            report.push(ValidationSeverity::Error, format!("{context}.name"), "missing non-empty name");
        } else if !seen_names.insert(item.name.clone()) {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.name"),
                format!("duplicate name '{}'", item.name),
            );
        }

        if !is_known_slot(&item.slot) {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.slot"),
                format!("unknown slot '{}'", item.slot),
            );
        }

        if item.required_level < 0 {
            report.push(
                ValidationSeverity::Error,
                format!("{context}.required_level"),
                format!("negative required_level {}", item.required_level),
            );
        }

        for (key, value) in &item.stats {
            if !is_known_stat_key(key) {
                report.push(
                    ValidationSeverity::Warning,
                    format!("{context}.stats"),
                    format!("unknown stat key '{key}' (ignored by the gear aggregator)"),
                );
            }
            if !value.is_finite() {
                report.push(
                    ValidationSeverity::Error,
                    format!("{context}.stats.{key}"),
                    "stat value is not a finite number",
                );
            }
        }
    }

    report
}
