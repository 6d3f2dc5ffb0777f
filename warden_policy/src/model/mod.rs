//! Policy model.
//!
//! This module defines the policy type, its ability table, and the
//! invocation context handed to every ability handler.

mod context;
mod policy;

pub use context::{CheckContext, SubjectRef};
pub use policy::{Ability, Policy, PolicyBuilder};
