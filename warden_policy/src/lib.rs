//! # Warden Policy
//!
//! `warden_policy` is the policy resolution and invocation engine of the
//! Warden authorization system. Given a subject (a domain entity or its
//! type) and an ability name, it locates the policy responsible for that
//! subject type and invokes the matching ability check, returning an
//! allow/deny decision.
//!
//! Key concepts:
//!
//! 1. **Policy**: an application-supplied bundle of named ability checks
//!    for one subject type.
//!
//! 2. **Type catalog**: the set of types known to the engine, built once
//!    during wiring and shared immutably afterwards.
//!
//! 3. **Guessing**: convention-based discovery of a policy type from a
//!    subject type's name and namespace, used when no explicit binding
//!    exists.
//!
//! 4. **Deny-by-default**: missing information (unknown subject type,
//!    absent ability) yields `false`; misconfiguration and contract
//!    defects are loud, fail-fast errors.

pub mod actor;
pub mod catalog;
pub mod check;
pub mod guess;
pub mod model;
pub mod store;
pub mod wiring;

// Re-export key types and traits for convenience
pub use actor::ActorPolicies;
pub use catalog::{PolicyFactory, TypeCatalog};
pub use check::Gate;
pub use guess::PolicyGuesser;
pub use model::{Ability, CheckContext, Policy, PolicyBuilder, SubjectRef};
pub use store::PolicyRegistry;
pub use wiring::WiringBuilder;
