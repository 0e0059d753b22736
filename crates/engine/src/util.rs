//! Internal helpers for record validation and vendor-name normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation and key-folding logic so the engine enforces consistent
//! invariants.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{EngineError, ResultEngine};

/// Reject a non-finite or negative quantity with a labeled error.
pub(crate) fn validate_non_negative(value: f64, label: &str) -> ResultEngine<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidRecord(format!(
            "{label} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(EngineError::InvalidRecord(format!(
            "{label} must be >= 0"
        )));
    }
    Ok(())
}

/// Reject a non-finite, zero or negative quantity with a labeled error.
pub(crate) fn validate_positive(value: f64, label: &str) -> ResultEngine<()> {
    if !value.is_finite() {
        return Err(EngineError::InvalidRecord(format!(
            "{label} must be a finite number"
        )));
    }
    if value <= 0.0 {
        return Err(EngineError::InvalidRecord(format!("{label} must be > 0")));
    }
    Ok(())
}

/// Trim free text, dropping it entirely when blank.
pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Fold a vendor name into a grouping key: decomposed, accent-stripped,
/// lowercased, inner whitespace collapsed. Returns `None` when nothing
/// alphanumeric survives.
pub(crate) fn vendor_key(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut prev_space = false;
    for ch in trimmed.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}
