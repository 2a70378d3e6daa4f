//! Error types for spanfmt operations.

use thiserror::Error;

/// Errors that can occur during escaping, rendering, or link building.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unsupported dialect feature: {0}")]
    UnsupportedDialectFeature(String),

    #[error("invalid dialect: {0}")]
    InvalidDialect(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
