//! Invocation context for ability handlers.

use std::any::Any;

use warden_core::traits::{Actor, Subject};
use warden_core::types::TypePath;

/// The subject of an ability check: either a bare type or a live instance.
///
/// When an instance is given, its runtime type path is used for policy
/// resolution and the instance itself is handed to the ability handler.
pub enum SubjectRef<'a> {
    /// A subject type with no instance at hand.
    Type(TypePath),

    /// A live subject instance.
    Instance(&'a dyn Subject),
}

impl SubjectRef<'_> {
    /// The subject type this reference resolves to.
    pub fn type_path(&self) -> TypePath {
        match self {
            SubjectRef::Type(path) => path.clone(),
            SubjectRef::Instance(subject) => subject.type_path(),
        }
    }

    /// The subject instance, when one was supplied.
    pub fn instance(&self) -> Option<&dyn Subject> {
        match self {
            SubjectRef::Type(_) => None,
            SubjectRef::Instance(subject) => Some(*subject),
        }
    }
}

impl From<TypePath> for SubjectRef<'static> {
    fn from(path: TypePath) -> Self {
        SubjectRef::Type(path)
    }
}

impl From<&str> for SubjectRef<'static> {
    fn from(path: &str) -> Self {
        SubjectRef::Type(TypePath::from(path))
    }
}

/// The fixed-shape argument bundle handed to every ability handler.
///
/// The field order mirrors the invocation argument order: the actor
/// first, then the subject instance when one was supplied, then the
/// extra arguments in the order the caller gave them.
pub struct CheckContext<'a> {
    /// The caller on whose behalf the check runs.
    pub actor: &'a dyn Actor,

    /// The subject instance, absent when the check was made against a
    /// bare type.
    pub subject: Option<&'a dyn Subject>,

    /// Extra arguments, in caller order.
    pub args: &'a [&'a dyn Any],
}

impl CheckContext<'_> {
    /// Downcast the actor to a concrete type.
    pub fn actor_as<T: Actor>(&self) -> Option<&T> {
        self.actor.as_any().downcast_ref::<T>()
    }

    /// Downcast the subject instance to a concrete type.
    pub fn subject_as<T: Subject>(&self) -> Option<&T> {
        self.subject.and_then(|s| s.as_any().downcast_ref::<T>())
    }

    /// Downcast the `index`-th extra argument.
    pub fn arg<T: 'static>(&self, index: usize) -> Option<&T> {
        self.args.get(index).and_then(|a| a.downcast_ref::<T>())
    }
}
