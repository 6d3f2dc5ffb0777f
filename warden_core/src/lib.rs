//! # Warden Core
//!
//! `warden_core` defines the fundamental vocabulary shared across the
//! Warden authorization crates. It aims to be minimal and focused, with
//! no complex dependencies.
//!
//! Key concepts:
//!
//! 1. **Type path**: a fully-qualified identifier for a domain type,
//!    used as the key for policy resolution.
//!
//! 2. **Subject**: a domain entity (or its type) that an ability check
//!    is about.
//!
//! 3. **Actor**: the entity on whose behalf an ability check runs.
//!
//! 4. **Error taxonomy**: the distinction between "permission not
//!    granted" (a boolean `false`) and "authorization is misconfigured"
//!    (a loud, fail-fast error).

pub mod error;
pub mod traits;
pub mod types;

// Re-export key types and traits for convenience
pub use error::{Error, Result};
pub use traits::{Actor, Subject};
pub use types::TypePath;
