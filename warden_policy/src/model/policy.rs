//! The policy type and its ability table.
//!
//! A policy is a bundle of named ability checks for one subject type.
//! Abilities are held in a capability table keyed by name; there is no
//! dynamic method dispatch, an ability is just a named invocable.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use warden_core::types::TypePath;

use super::context::CheckContext;

/// Handler for a single ability.
pub enum Ability {
    /// A handler whose boolean return is enforced by its signature. The
    /// common case; cannot violate the return contract.
    Checked(Arc<dyn Fn(&CheckContext<'_>) -> bool + Send + Sync>),

    /// A bridged handler with a dynamic result, for policies whose
    /// result shape is not statically boolean. The gate validates the
    /// returned value is a JSON boolean at invocation time.
    Dynamic(Arc<dyn Fn(&CheckContext<'_>) -> Value + Send + Sync>),
}

impl fmt::Debug for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ability::Checked(_) => write!(f, "Ability::Checked"),
            Ability::Dynamic(_) => write!(f, "Ability::Dynamic"),
        }
    }
}

/// An application-supplied bundle of ability checks for one subject type.
///
/// Policies are opaque to the engine beyond their type path and ability
/// table. They are shared as `Arc<Policy>`; instance identity is `Arc`
/// pointer identity, which the registry preserves across lookups.
pub struct Policy {
    type_path: TypePath,
    abilities: HashMap<String, Ability>,
}

impl Policy {
    /// Start building a policy with the given type path.
    pub fn builder(type_path: impl Into<TypePath>) -> PolicyBuilder {
        PolicyBuilder {
            type_path: type_path.into(),
            abilities: HashMap::new(),
        }
    }

    /// The type path of this policy.
    pub fn type_path(&self) -> &TypePath {
        &self.type_path
    }

    /// Look up an ability by name.
    pub fn ability(&self, name: &str) -> Option<&Ability> {
        self.abilities.get(name)
    }

    /// Names of all abilities this policy declares.
    pub fn ability_names(&self) -> Vec<&str> {
        self.abilities.keys().map(String::as_str).collect()
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("type_path", &self.type_path)
            .field("abilities", &self.ability_names())
            .finish()
    }
}

/// Builder for [`Policy`].
pub struct PolicyBuilder {
    type_path: TypePath,
    abilities: HashMap<String, Ability>,
}

impl PolicyBuilder {
    /// Add an ability with a boolean-returning handler.
    ///
    /// Registering the same name twice replaces the earlier handler.
    pub fn ability(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&CheckContext<'_>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.abilities
            .insert(name.into(), Ability::Checked(Arc::new(handler)));
        self
    }

    /// Add an ability with a dynamic result.
    ///
    /// Use this only when bridging a policy whose handler cannot declare
    /// a boolean return; the gate rejects non-boolean results at
    /// invocation time.
    pub fn dynamic_ability(
        mut self,
        name: impl Into<String>,
        handler: impl Fn(&CheckContext<'_>) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.abilities
            .insert(name.into(), Ability::Dynamic(Arc::new(handler)));
        self
    }

    /// Finish building and share the policy.
    pub fn build(self) -> Arc<Policy> {
        Arc::new(Policy {
            type_path: self.type_path,
            abilities: self.abilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_registers_abilities() {
        let policy = Policy::builder("app::policy::OrderPolicy")
            .ability("view", |_| true)
            .ability("edit", |_| false)
            .build();

        assert_eq!(policy.type_path(), &TypePath::from("app::policy::OrderPolicy"));
        assert!(policy.ability("view").is_some());
        assert!(policy.ability("edit").is_some());
        assert!(policy.ability("delete").is_none());
    }

    #[test]
    fn test_duplicate_ability_name_replaces_handler() {
        let policy = Policy::builder("app::policy::OrderPolicy")
            .ability("view", |_| false)
            .ability("view", |_| true)
            .build();

        assert_eq!(policy.ability_names(), vec!["view"]);
    }
}
