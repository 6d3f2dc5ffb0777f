//! Catalog of types known to the engine.
//!
//! Convention-based discovery needs a notion of "this type exists and is
//! a policy". The catalog is that notion: a lookup table of declared
//! type paths, built once during wiring and shared immutably afterwards.
//! Paths declared as policies carry a no-argument constructor, which is
//! what the registry uses to instantiate a guessed policy.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use warden_core::types::TypePath;

use crate::model::Policy;

/// No-argument, side-effect-free constructor for a guessed policy.
pub type PolicyFactory = Arc<dyn Fn() -> Arc<Policy> + Send + Sync>;

/// The set of types the engine may resolve at runtime.
#[derive(Default)]
pub struct TypeCatalog {
    types: HashSet<TypePath>,
    policies: HashMap<TypePath, PolicyFactory>,
}

impl TypeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an existing, resolvable type.
    pub fn declare_type(&mut self, path: impl Into<TypePath>) {
        self.types.insert(path.into());
    }

    /// Record a policy type and its constructor.
    ///
    /// Declaring a path as a policy is the marker the guesser checks for;
    /// it also makes the path a known type.
    pub fn declare_policy(
        &mut self,
        path: impl Into<TypePath>,
        factory: impl Fn() -> Arc<Policy> + Send + Sync + 'static,
    ) {
        let path = path.into();
        self.types.insert(path.clone());
        self.policies.insert(path, Arc::new(factory));
    }

    /// Whether `path` names a known type.
    pub fn contains(&self, path: &TypePath) -> bool {
        self.types.contains(path)
    }

    /// Whether `path` names a declared policy type.
    pub fn is_policy(&self, path: &TypePath) -> bool {
        self.policies.contains_key(path)
    }

    /// The constructor for a declared policy type.
    pub fn factory(&self, path: &TypePath) -> Option<PolicyFactory> {
        self.policies.get(path).cloned()
    }
}
