//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `RumorError` as one
//! variant via `#[from]`, so validation helpers in this crate compose with `?`.

use thiserror::Error;

/// Errors raised while validating configuration values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RumorError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rumor-core`.
pub type RumorResult<T> = Result<T, RumorError>;
