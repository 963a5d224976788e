//! Error types for furigana-core.

use thiserror::Error;

/// Result type alias using FilterError.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur when a host resolves a filter by name.
///
/// The transforms themselves never fail; malformed annotations are left as text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown filter: {name}")]
    UnknownFilter { name: String },
}
