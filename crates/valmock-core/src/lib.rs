//! valmock core: simulation state, synthetic telemetry, and error types.
//!
//! This crate holds everything the HTTP surface reads and mutates: the
//! validator simulation record, its transition rules, and the per-scrape
//! gauge sampling plus Prometheus text rendering. It carries no transport
//! or runtime dependencies so the server and tests can drive it directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ValMockError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod state;
pub mod telemetry;

/// Shared result type.
pub use error::{Result, ValMockError};
