//! Identifier grammar for profiles and providers.
//!
//! A profile identifier is `scope/name` or a bare `name`; a provider name is
//! a single segment. Segments are lowercase, start with a letter, and may
//! continue with digits, `_` and `-`, with `.`-separated sub-segments.

use regex::Regex;
use std::fmt;

/// Errors from identifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The string does not match the identifier grammar.
    #[error("\"{0}\" is not a valid lowercase identifier")]
    InvalidIdentifier(String),
}

/// A profile identifier: optional scope plus required name.
///
/// The canonical string form is `scope/name` when the scope is present,
/// otherwise just `name`. Display, equality and serialization all go
/// through the canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfileId {
    scope: Option<String>,
    name: String,
}

impl ProfileId {
    /// Parses a raw identifier string (`scope/name` or `name`).
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let (scope, name) = match raw.split_once('/') {
            Some((scope, name)) => (Some(scope), name),
            None => (None, raw),
        };
        if let Some(scope) = scope
            && !is_valid_segment(scope)
        {
            return Err(IdentifierError::InvalidIdentifier(raw.to_string()));
        }
        if !is_valid_segment(name) {
            return Err(IdentifierError::InvalidIdentifier(raw.to_string()));
        }
        Ok(Self {
            scope: scope.map(str::to_string),
            name: name.to_string(),
        })
    }

    /// Builds an identifier from already-validated parts.
    pub fn from_parts(scope: Option<String>, name: String) -> Self {
        Self { scope, name }
    }

    /// The scope component, when present.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// The name component.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{scope}/{}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

impl std::str::FromStr for ProfileId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for ProfileId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ProfileId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// True when `name` is a valid provider name (a bare identifier, no scope).
pub fn is_valid_provider_name(name: &str) -> bool {
    is_valid_segment(name)
}

fn is_valid_segment(segment: &str) -> bool {
    Regex::new(r"^[a-z][a-z0-9_-]*(?:\.[a-z][a-z0-9_-]*)*$")
        .expect("identifier segment regex")
        .is_match(segment)
}
