//! Top-level facade crate for valmock.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use valmock_core::*;
}

pub mod server {
    pub use valmock_server::*;
}
