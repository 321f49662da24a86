//! Pre-submit range checks for profile and criteria forms.
//!
//! Fields are checked in `Metric::ORDER` and only the first violation is
//! reported. Fields missing from a form are skipped, so one rule set
//! covers forms that only carry some of the metrics.

use thiserror::Error;
use tracing::{debug, warn};

use crate::dom::{Document, NodeId};
use crate::models::{FormKind, Metric};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{message}")]
    OutOfRange {
        kind: FormKind,
        metric: Metric,
        value: f64,
        message: String,
    },

    #[error("{message}")]
    NotANumber {
        kind: FormKind,
        metric: Metric,
        raw: String,
        message: String,
    },
}

impl ValidationError {
    pub fn metric(&self) -> Metric {
        match self {
            ValidationError::OutOfRange { metric, .. } | ValidationError::NotANumber { metric, .. } => *metric,
        }
    }

    pub fn kind(&self) -> FormKind {
        match self {
            ValidationError::OutOfRange { kind, .. } | ValidationError::NotANumber { kind, .. } => *kind,
        }
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::OutOfRange { message, .. } | ValidationError::NotANumber { message, .. } => message,
        }
    }
}

/// Parse an input's text. Blank, unparsable and non-finite text yield `None`.
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Check one metric's raw text against its range.
pub fn check_metric(kind: FormKind, metric: Metric, raw: &str) -> Result<f64, ValidationError> {
    let Some(value) = parse_field(raw) else {
        return Err(ValidationError::NotANumber {
            kind,
            metric,
            raw: raw.to_string(),
            message: metric.not_a_number_message(kind),
        });
    };
    if metric.range().contains(value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfRange {
            kind,
            metric,
            value,
            message: metric.out_of_range_message(kind),
        })
    }
}

/// Validate the fields of `kind` found inside `form`.
pub fn validate_form(doc: &Document, form: NodeId, kind: FormKind) -> Result<(), ValidationError> {
    for metric in Metric::ORDER {
        let Some(input) = doc.find_by_id_within(form, metric.field_id(kind)) else {
            continue;
        };
        if let Err(e) = check_metric(kind, metric, doc.value(input)) {
            warn!(form = %kind, field = metric.field_id(kind), error = %e, "Form validation failed");
            return Err(e);
        }
    }
    debug!(form = %kind, "Form validation passed");
    Ok(())
}

/// Form kinds a form is tagged with, profile first.
pub fn form_kinds(doc: &Document, form: NodeId) -> Vec<FormKind> {
    FormKind::ALL
        .into_iter()
        .filter(|kind| doc.has_class(form, kind.class_name()))
        .collect()
}
