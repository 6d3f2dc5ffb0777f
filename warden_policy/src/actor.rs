//! Actor-side convenience surface.
//!
//! `ActorPolicies` is blanket-implemented for every [`Actor`], giving
//! callers `can`/`cannot` sugar over a gate handle plus role membership
//! checks that never touch the policy engine.

use std::any::Any;

use warden_core::error::{Error, Result};
use warden_core::traits::Actor;

use crate::check::Gate;
use crate::model::SubjectRef;

/// Conventional role prefix stripped during normalization, so
/// `ROLE_ADMIN` and `admin` name the same role.
const ROLE_PREFIX: &str = "ROLE_";

/// Caller-side sugar over the gate, plus role membership checks.
pub trait ActorPolicies: Actor + Sized {
    /// Check an ability via `gate` with `self` as the caller.
    fn can(
        &self,
        gate: &Gate,
        ability: &str,
        subject: SubjectRef<'_>,
        args: &[&dyn Any],
    ) -> Result<bool> {
        gate.can(self, ability, subject, args)
    }

    /// Inverse of [`ActorPolicies::can`].
    fn cannot(
        &self,
        gate: &Gate,
        ability: &str,
        subject: SubjectRef<'_>,
        args: &[&dyn Any],
    ) -> Result<bool> {
        gate.cannot(self, ability, subject, args)
    }

    /// Check whether this actor holds `role`.
    ///
    /// Roles are compared case-insensitively with the conventional
    /// `ROLE_` prefix stripped from the actor's role list.
    ///
    /// # Errors
    ///
    /// [`Error::Interface`] when the actor does not expose a role list.
    fn is(&self, role: &str) -> Result<bool> {
        let Some(roles) = self.roles() else {
            return Err(Error::Interface {
                actor: std::any::type_name::<Self>().to_string(),
            });
        };

        let wanted = role.to_lowercase();
        Ok(roles.iter().any(|held| normalize_role(held) == wanted))
    }

    /// Inverse of [`ActorPolicies::is`].
    fn is_not(&self, role: &str) -> Result<bool> {
        Ok(!self.is(role)?)
    }
}

impl<A: Actor> ActorPolicies for A {}

fn normalize_role(role: &str) -> String {
    role.strip_prefix(ROLE_PREFIX).unwrap_or(role).to_lowercase()
}
