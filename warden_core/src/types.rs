//! Core types for the Warden authorization system.
//!
//! This module defines the fundamental data structures shared across all
//! Warden crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the segments of a [`TypePath`].
pub const PATH_SEPARATOR: &str = "::";

/// Fully-qualified identifier for a domain type, e.g. `app::entity::Order`.
///
/// Type paths are the stable runtime identifiers the policy engine works
/// with: they key the registry, and the guesser derives candidate policy
/// paths from them by namespace manipulation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypePath(String);

impl TypePath {
    /// Create a type path from its string form.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final segment, without any namespace qualification.
    ///
    /// `app::entity::Order` yields `Order`; an unqualified path yields
    /// itself.
    pub fn bare_name(&self) -> &str {
        match self.0.rfind(PATH_SEPARATOR) {
            Some(idx) => &self.0[idx + PATH_SEPARATOR.len()..],
            None => &self.0,
        }
    }

    /// The namespace portion, or `None` for an unqualified path.
    pub fn namespace(&self) -> Option<TypePath> {
        self.0
            .rfind(PATH_SEPARATOR)
            .map(|idx| TypePath(self.0[..idx].to_string()))
    }

    /// Append a segment to the path.
    pub fn join(&self, segment: &str) -> TypePath {
        TypePath(format!("{}{}{}", self.0, PATH_SEPARATOR, segment))
    }
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TypePath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for TypePath {
    fn from(path: String) -> Self {
        Self(path)
    }
}
