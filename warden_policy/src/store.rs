//! Policy registry.
//!
//! The registry owns the subject-to-policy bindings. Entries arrive
//! either through explicit registration at wiring time or lazily, when a
//! lookup misses and the guesser finds a conventional policy type. Once
//! a binding exists, every lookup returns the same instance for the
//! lifetime of the registry.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use warden_core::types::TypePath;

use crate::catalog::TypeCatalog;
use crate::guess::PolicyGuesser;
use crate::model::Policy;

/// Registry mapping subject types to policy instances.
pub struct PolicyRegistry {
    guesser: PolicyGuesser,
    catalog: Arc<TypeCatalog>,
    bindings: DashMap<TypePath, Arc<Policy>>,
}

impl PolicyRegistry {
    /// Create a registry backed by the given catalog.
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            guesser: PolicyGuesser::new(catalog.clone()),
            catalog,
            bindings: DashMap::new(),
        }
    }

    /// Bind `policy` to `subject`, replacing any existing binding.
    pub fn register(&self, subject: impl Into<TypePath>, policy: Arc<Policy>) {
        let subject = subject.into();
        debug!(subject = %subject, policy = %policy.type_path(), "registering policy");
        self.bindings.insert(subject, policy);
    }

    /// Look up the policy bound to `subject`, guessing and caching on a
    /// miss.
    ///
    /// `None` means no policy is configured for the subject; that is an
    /// expected outcome, not a failure. Racing callers on the miss path
    /// may both construct an instance, but the map converges on a single
    /// one and that is what everybody gets from then on.
    pub fn get(&self, subject: &TypePath) -> Option<Arc<Policy>> {
        if let Some(policy) = self.bindings.get(subject) {
            return Some(Arc::clone(&policy));
        }

        let guessed = self.guesser.guess(subject)?;
        let factory = self.catalog.factory(&guessed)?;

        let policy = self
            .bindings
            .entry(subject.clone())
            .or_insert_with(|| factory())
            .clone();
        debug!(subject = %subject, policy = %guessed, "cached guessed policy");
        Some(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn empty_catalog() -> Arc<TypeCatalog> {
        Arc::new(TypeCatalog::new())
    }

    #[test]
    fn test_registered_policy_is_returned_by_identity() {
        let registry = PolicyRegistry::new(empty_catalog());
        let policy = Policy::builder("app::policy::OrderPolicy").build();
        registry.register("app::entity::Order", policy.clone());

        let subject = TypePath::from("app::entity::Order");
        let first = registry.get(&subject).unwrap();
        let second = registry.get(&subject).unwrap();
        assert!(Arc::ptr_eq(&first, &policy));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_register_overwrites_existing_binding() {
        let registry = PolicyRegistry::new(empty_catalog());
        let old = Policy::builder("app::policy::OrderPolicy").build();
        let new = Policy::builder("app::policy::StricterOrderPolicy").build();
        registry.register("app::entity::Order", old);
        registry.register("app::entity::Order", new.clone());

        let resolved = registry.get(&TypePath::from("app::entity::Order")).unwrap();
        assert!(Arc::ptr_eq(&resolved, &new));
    }

    #[test]
    fn test_guessed_policy_is_instantiated_once_and_cached() {
        static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

        let mut catalog = TypeCatalog::new();
        catalog.declare_policy("app::policy::OrderPolicy", || {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            Policy::builder("app::policy::OrderPolicy").build()
        });
        let registry = PolicyRegistry::new(Arc::new(catalog));

        let subject = TypePath::from("app::entity::Order");
        let first = registry.get(&subject).unwrap();
        let second = registry.get(&subject).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unguessable_subject_yields_none() {
        let registry = PolicyRegistry::new(empty_catalog());

        assert!(registry.get(&TypePath::from("app::entity::Order")).is_none());
    }

    #[test]
    fn test_explicit_binding_shadows_guessable_policy() {
        let mut catalog = TypeCatalog::new();
        catalog.declare_policy("app::policy::OrderPolicy", || {
            Policy::builder("app::policy::OrderPolicy").build()
        });
        let registry = PolicyRegistry::new(Arc::new(catalog));

        let explicit = Policy::builder("app::policy::HandWiredOrderPolicy").build();
        registry.register("app::entity::Order", explicit.clone());

        let resolved = registry.get(&TypePath::from("app::entity::Order")).unwrap();
        assert!(Arc::ptr_eq(&resolved, &explicit));
    }
}
