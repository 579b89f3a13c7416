// ── Lantern Atoms: Error Types ─────────────────────────────────────────────
// Canonical error enum for the atoms layer, built with `thiserror`.
// Variants are coarse-grained; no variant carries anything but the offending
// input, so messages are always safe to forward to channels.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AtomsError {
    /// A runtime table lookup against a label the table does not define.
    #[error("unknown {table} label: {label}")]
    UnknownLabel { table: &'static str, label: String },

    /// A color string that is not a 6-digit `#`-prefixed hex value.
    #[error("invalid hex color: {0}")]
    InvalidColor(String),
}

impl AtomsError {
    /// Create an unknown-label error for the named table.
    pub fn unknown_label(table: &'static str, label: impl Into<String>) -> Self {
        Self::UnknownLabel { table, label: label.into() }
    }
}

/// All fallible atoms operations return this type.
pub type AtomsResult<T> = Result<T, AtomsError>;
