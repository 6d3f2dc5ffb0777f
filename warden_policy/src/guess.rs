//! Convention-based policy discovery.
//!
//! When no explicit binding exists for a subject type, the guesser
//! derives candidate policy paths from the subject's bare name and
//! namespace and returns the first candidate the catalog knows as a
//! policy. Candidate order is fixed; first match wins, no scoring.

use std::sync::Arc;

use tracing::trace;
use warden_core::types::TypePath;

use crate::catalog::TypeCatalog;

/// Well-known policy container namespaces, in priority order.
const WELL_KNOWN_NAMESPACES: [&str; 8] = [
    "app::policy",
    "app::policies",
    "app::auth::policy",
    "app::auth::policies",
    "app::entity::policy",
    "app::entity::policies",
    "app::security::policy",
    "app::security::policies",
];

/// Guesses the policy type for a subject type.
pub struct PolicyGuesser {
    catalog: Arc<TypeCatalog>,
}

impl PolicyGuesser {
    /// Create a guesser over the given catalog.
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self { catalog }
    }

    /// Guess the policy type for `subject`, or `None` if no convention
    /// matches.
    ///
    /// Exhausting the candidates is an expected outcome, not a failure:
    /// it means no policy is guessable for the subject.
    pub fn guess(&self, subject: &TypePath) -> Option<TypePath> {
        let candidate_name = format!("{}Policy", subject.bare_name());

        // Try the well-known container namespaces first.
        for namespace in WELL_KNOWN_NAMESPACES {
            let candidate = TypePath::new(namespace).join(&candidate_name);
            if self.catalog.is_policy(&candidate) {
                trace!(subject = %subject, policy = %candidate, "guessed policy by convention");
                return Some(candidate);
            }
        }

        // Otherwise, look below the subject's own namespace.
        if let Some(namespace) = subject.namespace() {
            let fallbacks = [
                namespace.clone(),
                namespace.join("policy"),
                namespace.join("policies"),
            ];
            for namespace in fallbacks {
                let candidate = namespace.join(&candidate_name);
                if self.catalog.is_policy(&candidate) {
                    trace!(subject = %subject, policy = %candidate, "guessed policy beside subject");
                    return Some(candidate);
                }
            }
        }

        None
    }
}
