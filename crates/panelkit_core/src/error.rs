//! Hard-failure taxonomy
//!
//! Only programmer errors surface as `Err`: a widget request with no
//! determinable type, or an array operation handed a non-list value. Data
//! and lookup misses (unknown widget type, unresolved tree id, duplicate
//! container push) degrade to logged no-ops instead, so a single bad
//! reference never corrupts the rest of the panel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No widget type could be determined from the call arguments.
    #[error("no widget type given")]
    MissingType,

    /// An array-of-widgets operation was invoked on a non-list value.
    #[error("expected a list value for `{name}`, got {actual}")]
    ArrayTypeMismatch { name: String, actual: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
