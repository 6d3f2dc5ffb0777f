//! The gate: ability check resolution and invocation.
//!
//! The gate is the entry point for ability checks. It resolves the
//! policy for a subject via the registry, looks up the requested
//! ability, and invokes it with the fixed argument shape: the actor
//! first, then the subject instance when one was supplied, then the
//! extra arguments in caller order.
//!
//! Denial and misconfiguration are kept apart deliberately: missing
//! information (unknown subject type, absent ability) is an `Ok(false)`,
//! while a missing policy for a valid subject type or a broken return
//! contract is a loud error that propagates to the caller.

use std::any::Any;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, trace};
use warden_core::error::{Error, Result};
use warden_core::traits::Actor;

use crate::catalog::TypeCatalog;
use crate::model::{Ability, CheckContext, SubjectRef};
use crate::store::PolicyRegistry;

/// Entry point for ability checks.
///
/// Constructed once by the wiring and passed by handle to every call
/// site; there is no global registry.
#[derive(Clone)]
pub struct Gate {
    registry: Arc<PolicyRegistry>,
    catalog: Arc<TypeCatalog>,
}

impl Gate {
    /// Create a gate over the given registry and catalog.
    pub fn new(registry: Arc<PolicyRegistry>, catalog: Arc<TypeCatalog>) -> Self {
        Self { registry, catalog }
    }

    /// The registry backing this gate, for manual registration.
    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }

    /// Check whether `actor` may perform `ability` on `subject`.
    ///
    /// Extra arguments are handed to the ability handler unchanged, in
    /// the order given here.
    ///
    /// # Errors
    ///
    /// * [`Error::Unregistered`] when the subject type is valid but no
    ///   policy is bound or guessable for it.
    /// * [`Error::ContractViolation`] when a dynamic ability returns a
    ///   non-boolean value.
    pub fn can(
        &self,
        actor: &dyn Actor,
        ability: &str,
        subject: SubjectRef<'_>,
        args: &[&dyn Any],
    ) -> Result<bool> {
        let instance = subject.instance();
        let subject_type = subject.type_path();

        // A bare type path the catalog has never heard of is a benign
        // no-match. A live instance witnesses its own type's existence.
        if instance.is_none() && !self.catalog.contains(&subject_type) {
            trace!(subject = %subject_type, "unknown subject type, denying");
            return Ok(false);
        }

        let policy = self
            .registry
            .get(&subject_type)
            .ok_or_else(|| Error::Unregistered {
                subject: subject_type.clone(),
            })?;

        let Some(handler) = policy.ability(ability) else {
            trace!(subject = %subject_type, ability, "ability not present on policy, denying");
            return Ok(false);
        };

        let ctx = CheckContext {
            actor,
            subject: instance,
            args,
        };
        let allowed = match handler {
            Ability::Checked(handler) => handler(&ctx),
            Ability::Dynamic(handler) => match handler(&ctx) {
                Value::Bool(allowed) => allowed,
                other => {
                    return Err(Error::ContractViolation {
                        ability: ability.to_string(),
                        policy: policy.type_path().clone(),
                        got: json_type_name(&other),
                    });
                }
            },
        };
        debug!(subject = %subject_type, ability, allowed, "policy decision");
        Ok(allowed)
    }

    /// Strict negation of [`Gate::can`].
    ///
    /// Argument handling is identical, and the errors `can` raises pass
    /// through unchanged.
    pub fn cannot(
        &self,
        actor: &dyn Actor,
        ability: &str,
        subject: SubjectRef<'_>,
        args: &[&dyn Any],
    ) -> Result<bool> {
        Ok(!self.can(actor, ability, subject, args)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use warden_core::traits::Subject;
    use warden_core::types::TypePath;

    use crate::model::Policy;
    use crate::wiring::WiringBuilder;

    struct System;

    impl Actor for System {
        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Order {
        total_cents: u64,
    }

    impl Subject for Order {
        fn type_path(&self) -> TypePath {
            TypePath::from("app::entity::Order")
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn gate_with_order_policy() -> Gate {
        let policy = Policy::builder("app::policy::OrderPolicy")
            .ability("view", |_| true)
            .ability("edit", |_| false)
            .build();
        WiringBuilder::new()
            .policy_for("app::entity::Order", policy)
            .build()
    }

    #[test]
    fn test_unknown_subject_type_denies_without_error() {
        let gate = gate_with_order_policy();

        let allowed = gate
            .can(&System, "view", SubjectRef::from("app::entity::Garbage"), &[])
            .unwrap();
        assert!(!allowed);
    }

    #[test]
    fn test_known_subject_without_policy_is_a_configuration_error() {
        let policy = Policy::builder("app::policy::OrderPolicy").build();
        let gate = WiringBuilder::new()
            .policy_for("app::entity::Order", policy)
            .declare_type("app::entity::Invoice")
            .build();

        let err = gate
            .can(&System, "view", SubjectRef::from("app::entity::Invoice"), &[])
            .unwrap_err();
        assert!(matches!(err, Error::Unregistered { .. }));
        assert!(err.to_string().contains("app::entity::Invoice"));
    }

    #[test]
    fn test_missing_ability_denies_without_error() {
        let gate = gate_with_order_policy();

        let allowed = gate
            .can(&System, "archive", SubjectRef::from("app::entity::Order"), &[])
            .unwrap();
        assert!(!allowed);
    }

    #[test]
    fn test_checked_ability_result_is_propagated() {
        let gate = gate_with_order_policy();

        let subject = TypePath::from("app::entity::Order");
        assert!(gate.can(&System, "view", SubjectRef::Type(subject.clone()), &[]).unwrap());
        assert!(!gate.can(&System, "edit", SubjectRef::Type(subject), &[]).unwrap());
    }

    #[test]
    fn test_dynamic_ability_with_boolean_result_behaves_like_checked() {
        let policy = Policy::builder("app::policy::OrderPolicy")
            .dynamic_ability("view", |_| json!(true))
            .build();
        let gate = WiringBuilder::new()
            .policy_for("app::entity::Order", policy)
            .build();

        let allowed = gate
            .can(&System, "view", SubjectRef::from("app::entity::Order"), &[])
            .unwrap();
        assert!(allowed);
    }

    #[test]
    fn test_non_boolean_result_is_a_contract_violation() {
        let policy = Policy::builder("app::policy::OrderPolicy")
            .dynamic_ability("view", |_| json!("yes"))
            .build();
        let gate = WiringBuilder::new()
            .policy_for("app::entity::Order", policy)
            .build();

        let err = gate
            .can(&System, "view", SubjectRef::from("app::entity::Order"), &[])
            .unwrap_err();
        assert!(matches!(err, Error::ContractViolation { .. }));
        // The message names the ability, the policy type and the stray type.
        let message = err.to_string();
        assert!(message.contains("view"));
        assert!(message.contains("app::policy::OrderPolicy"));
        assert!(message.contains("string"));
    }

    #[test]
    fn test_subject_instance_and_extra_args_reach_the_handler_in_order() {
        let policy = Policy::builder("app::policy::OrderPolicy")
            .ability("refund", |ctx| {
                let order = ctx.subject_as::<Order>().expect("subject instance");
                let amount = ctx.arg::<u64>(0).expect("first extra argument");
                let reason = ctx.arg::<&str>(1).expect("second extra argument");
                order.total_cents >= *amount && !reason.is_empty()
            })
            .build();
        let gate = WiringBuilder::new()
            .policy_for("app::entity::Order", policy)
            .build();

        let order = Order { total_cents: 1_000 };
        let amount: u64 = 250;
        let reason: &str = "damaged in transit";
        let allowed = gate
            .can(
                &System,
                "refund",
                SubjectRef::Instance(&order),
                &[&amount, &reason],
            )
            .unwrap();
        assert!(allowed);
    }

    #[test]
    fn test_cannot_is_the_negation_of_can() {
        let gate = gate_with_order_policy();

        let subject = TypePath::from("app::entity::Order");
        assert!(!gate.cannot(&System, "view", SubjectRef::Type(subject.clone()), &[]).unwrap());
        assert!(gate.cannot(&System, "edit", SubjectRef::Type(subject), &[]).unwrap());
    }

    #[test]
    fn test_cannot_propagates_configuration_errors() {
        let gate = WiringBuilder::new()
            .declare_type("app::entity::Invoice")
            .build();

        let err = gate
            .cannot(&System, "view", SubjectRef::from("app::entity::Invoice"), &[])
            .unwrap_err();
        assert!(matches!(err, Error::Unregistered { .. }));
    }
}
