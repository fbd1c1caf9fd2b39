//! Error types for mdcards-core.

use crate::types::ElementTag;
use thiserror::Error;

/// Result type alias using CardError.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors raised when a card is modified after it has been built.
///
/// Parsing itself never fails: every line classifies to some element.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("front content of a simple card must be a heading, got {found:?}")]
    InvalidFrontContent { found: ElementTag },
}
