//! Error types for the Warden authorization system.
//!
//! Only genuine misconfiguration and contract defects surface as errors.
//! The "no match" conditions (unknown subject type, absent ability on a
//! resolved policy) are expressed as a boolean `false` by the engine and
//! never reach this taxonomy.

use thiserror::Error;

use crate::types::TypePath;

/// Result alias used across the Warden crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the Warden system.
#[derive(Debug, Error)]
pub enum Error {
    /// No policy is registered for a valid subject type, and none could
    /// be guessed. This means the application wiring is incomplete.
    #[error(
        "no policy found for subject \"{subject}\"; declare the policy type during wiring \
         (WiringBuilder::declare_policy or WiringBuilder::policy_for) or register one \
         manually via PolicyRegistry::register"
    )]
    Unregistered {
        /// The subject type that has no policy.
        subject: TypePath,
    },

    /// A dynamic ability produced something other than a boolean. This is
    /// a defect in the policy implementation, surfaced eagerly rather
    /// than silently coerced.
    #[error(
        "ability \"{ability}\" of policy \"{policy}\" was expected to return a boolean, \
         but returned a value of type \"{got}\""
    )]
    ContractViolation {
        /// The ability that was invoked.
        ability: String,
        /// The policy the ability belongs to.
        policy: TypePath,
        /// The JSON type of the offending value.
        got: &'static str,
    },

    /// A role check was invoked on an actor that exposes no role list.
    #[error(
        "actor \"{actor}\" does not expose a role list; implement Actor::roles to use \
         role membership checks"
    )]
    Interface {
        /// Type name of the offending actor.
        actor: String,
    },
}
