//! Core traits that define the Warden architecture.
//!
//! These are the two seams between the engine and the embedding
//! application: subjects (what checks are about) and actors (who the
//! checks run on behalf of).

use std::any::Any;

use crate::types::TypePath;

/// A domain entity an ability check can be about.
///
/// Implementors report their own runtime type path, which the engine
/// uses to resolve the responsible policy.
pub trait Subject: Any {
    /// The runtime type of this instance.
    fn type_path(&self) -> TypePath;

    /// Upcast for handler-side downcasting.
    ///
    /// The conventional implementation is `fn as_any(&self) -> &dyn Any { self }`.
    fn as_any(&self) -> &dyn Any;
}

/// The entity on whose behalf an ability check runs.
///
/// An actor is always the first argument handed to an ability handler.
/// Role membership is optional: actors that do not expose roles keep the
/// default `None`, and role checks on them fail with
/// [`Error::Interface`](crate::error::Error::Interface).
pub trait Actor: Any + Send + Sync {
    /// Upcast for handler-side downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Role names this actor holds, if it exposes role membership at all.
    fn roles(&self) -> Option<Vec<String>> {
        None
    }
}
