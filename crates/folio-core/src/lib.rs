//! folio/crates/folio-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Folio.

pub mod defaults;
pub mod error;
pub mod models;
pub mod session;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use session::SessionGate;
pub use traits::*;
