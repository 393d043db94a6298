//! Shared error type across valmock crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ValMockError>;

/// Unified error type used by core and server.
///
/// The surface is deliberately small: the mock has exactly two ways to
/// fail, a bad environment value at startup and an I/O problem while
/// binding or serving. Everything else is absorbed (malformed admin
/// bodies collapse to defaults, unknown routes get a fixed 404).
#[derive(Debug, Error)]
pub enum ValMockError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}
