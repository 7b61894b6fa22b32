//! Domain types shared by the engine and its callers.
//!
//! Queries never fail: they return a [`Lookup`], which keeps "this name has
//! no dependencies" ([`Lookup::Found`] with an empty list) apart from "this
//! name does not exist" ([`Lookup::Unknown`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of suggestions offered for an unknown name.
pub const MAX_SUGGESTIONS: usize = 5;

/// Case-folded identity of a name in the graph.
///
/// Two spellings that differ only by case produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Fold a raw spelling into its key.
    ///
    /// ```
    /// use tablegraph::domain::NameKey;
    ///
    /// assert_eq!(NameKey::fold("Schema.Table"), NameKey::fold("SCHEMA.TABLE"));
    /// assert_eq!(NameKey::fold("Schema.Table").as_str(), "schema.table");
    /// ```
    pub fn fold(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// The folded string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NameKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The kind of question asked about a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Names reachable by exactly one edge.
    Direct,
    /// Names reachable by one or more edges.
    Indirect,
    /// Names with an edge pointing at the queried name.
    Users,
    /// Direct dependencies and direct users together.
    Overview,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Direct => "direct",
            Self::Indirect => "indirect",
            Self::Users => "users",
            Self::Overview => "overview",
        };
        f.write_str(label)
    }
}

/// A queried name that is not part of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownName {
    /// The queried name, rendered for display (upper-cased when unregistered).
    pub name: String,
    /// Known names that look similar, at most [`MAX_SUGGESTIONS`].
    pub suggestions: Vec<String>,
}

/// Outcome of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Lookup<T> {
    /// The name exists; `T` may still be empty.
    Found(T),
    /// The name does not exist.
    Unknown(UnknownName),
}

impl<T> Lookup<T> {
    /// Returns `true` if the queried name exists.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The result, if the name exists.
    pub fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Unknown(_) => None,
        }
    }

    /// The miss details, if the name does not exist.
    pub fn unknown(&self) -> Option<&UnknownName> {
        match self {
            Self::Found(_) => None,
            Self::Unknown(unknown) => Some(unknown),
        }
    }

    /// Transform the found value, keeping a miss unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Found(value) => Lookup::Found(f(value)),
            Self::Unknown(unknown) => Lookup::Unknown(unknown),
        }
    }
}

/// Direct neighbourhood of a name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overview {
    /// Display name of the queried entity.
    pub name: String,
    /// Direct dependencies, sorted.
    pub dependencies: Vec<String>,
    /// Direct users, sorted.
    pub users: Vec<String>,
}

impl Overview {
    /// Returns `true` if the name has neither dependencies nor users.
    pub fn is_isolated(&self) -> bool {
        self.dependencies.is_empty() && self.users.is_empty()
    }
}
