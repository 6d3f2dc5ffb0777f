//! Startup wiring.
//!
//! The builder plays the role of the host application's dependency
//! wiring: it collects type declarations and subject-to-policy bindings
//! before any traffic is served, then freezes the catalog and hands out
//! a [`Gate`]. Every `policy_for` declaration turns into exactly one
//! `register` call during [`WiringBuilder::build`].

use std::sync::Arc;

use warden_core::types::TypePath;

use crate::catalog::TypeCatalog;
use crate::check::Gate;
use crate::model::Policy;
use crate::store::PolicyRegistry;

/// Builder assembling the catalog, registry and gate.
#[derive(Default)]
pub struct WiringBuilder {
    catalog: TypeCatalog,
    bindings: Vec<(TypePath, Arc<Policy>)>,
}

impl WiringBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an existing subject type, making it resolvable.
    pub fn declare_type(mut self, path: impl Into<TypePath>) -> Self {
        self.catalog.declare_type(path);
        self
    }

    /// Declare a guessable policy type with its no-argument constructor.
    ///
    /// The policy is not bound to any subject here; it becomes reachable
    /// through the guesser's naming conventions.
    pub fn declare_policy(
        mut self,
        path: impl Into<TypePath>,
        factory: impl Fn() -> Arc<Policy> + Send + Sync + 'static,
    ) -> Self {
        self.catalog.declare_policy(path, factory);
        self
    }

    /// Bind `policy` to `subject` explicitly.
    ///
    /// Both the subject and the policy type are declared as a side
    /// effect, so an explicitly bound pair needs no separate
    /// declarations.
    pub fn policy_for(mut self, subject: impl Into<TypePath>, policy: Arc<Policy>) -> Self {
        let subject = subject.into();
        self.catalog.declare_type(subject.clone());
        self.catalog.declare_type(policy.type_path().clone());
        self.bindings.push((subject, policy));
        self
    }

    /// Freeze the catalog, register the collected bindings and build the
    /// gate.
    pub fn build(self) -> Gate {
        let catalog = Arc::new(self.catalog);
        let registry = Arc::new(PolicyRegistry::new(Arc::clone(&catalog)));
        for (subject, policy) in self.bindings {
            registry.register(subject, policy);
        }
        Gate::new(registry, catalog)
    }
}
