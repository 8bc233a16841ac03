//! Error types for catalog loading.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while acquiring a catalog.
///
/// A load failure is always surfaced as an error, never as an empty
/// catalog, so callers can distinguish "nothing on offer" from
/// "catalog unavailable".
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file not found.
    #[error("Catalog not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied for the catalog file.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog contents are not valid JSON.
    #[error("Malformed catalog: {message}")]
    Parse { message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Other error.
    #[error("{message}")]
    Other { message: String },
}

impl CatalogError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create a parse error from any displayable source.
    pub fn parse(source: impl std::fmt::Display) -> Self {
        Self::Parse {
            message: source.to_string(),
        }
    }
}

/// Kind of catalog warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A required field is absent.
    MissingField,
    /// Price is negative or not a finite number.
    InvalidPrice,
    /// VAT percentage is negative or not a finite number.
    InvalidVat,
    /// An earlier entry already used this id.
    DuplicateId,
}

/// Non-fatal problem with a single catalog entry.
///
/// The entry is skipped; loading continues with the rest of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogWarning {
    /// Zero-based position of the entry in the catalog file.
    pub index: usize,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl CatalogWarning {
    /// Create a new catalog warning.
    pub fn new(index: usize, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            index,
            message: message.into(),
            kind,
        }
    }

    /// Create a missing-field warning.
    pub fn missing_field(index: usize, field: &str) -> Self {
        Self::new(
            index,
            format!("entry {index}: missing required field `{field}`"),
            WarningKind::MissingField,
        )
    }

    /// Create an invalid-price warning.
    pub fn invalid_price(index: usize, value: f64) -> Self {
        Self::new(
            index,
            format!("entry {index}: invalid price {value}"),
            WarningKind::InvalidPrice,
        )
    }

    /// Create an invalid-VAT warning.
    pub fn invalid_vat(index: usize, value: f64) -> Self {
        Self::new(
            index,
            format!("entry {index}: invalid VAT percentage {value}"),
            WarningKind::InvalidVat,
        )
    }

    /// Create a duplicate-id warning.
    pub fn duplicate_id(index: usize, id: u32) -> Self {
        Self::new(
            index,
            format!("entry {index}: duplicate id {id}"),
            WarningKind::DuplicateId,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_io() {
        let err = CatalogError::io(
            "/test/catalog.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, CatalogError::NotFound { .. }));

        let err = CatalogError::io(
            "/test/catalog.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, CatalogError::PermissionDenied { .. }));
    }

    #[test]
    fn test_catalog_warning_creation() {
        let warning = CatalogWarning::missing_field(3, "price_before_vat");
        assert_eq!(warning.kind, WarningKind::MissingField);
        assert_eq!(warning.index, 3);
        assert!(warning.message.contains("price_before_vat"));
    }
}
