//! Dotted field paths and scope prefixes

use std::fmt;
use thiserror::Error;

/// Separator between path segments
pub const PATH_SEPARATOR: char = '.';

/// Errors raised when a field name cannot be turned into a path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("field path is empty")]
    Empty,
    #[error("field path `{0}` contains an empty segment")]
    EmptySegment(String),
    #[error("field path `{path}` overlaps mounted field `{mounted}`")]
    Overlaps { path: String, mounted: String },
}

/// Fully resolved, dot-delimited location of a form value (e.g. `address.street`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath(String);

impl FieldPath {
    /// Parse a dotted path, rejecting empty segments
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        if raw.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(PathError::EmptySegment(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the path segments from the root
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(PATH_SEPARATOR)
    }

    /// Whether one path is a segment-wise prefix of the other, or both are equal
    pub fn overlaps(&self, other: &FieldPath) -> bool {
        self.segments()
            .zip(other.segments())
            .all(|(a, b)| a == b)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for FieldPath {
    type Error = PathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Shared leading path for a group of fields.
///
/// Fields mounted inside `Scope::new("address")` with local names `street`
/// and `number` resolve to `address.street` and `address.number`. Resolution
/// happens once, before registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    prefix: FieldPath,
}

impl Scope {
    pub fn new(prefix: &str) -> Result<Self, PathError> {
        Ok(Self {
            prefix: FieldPath::parse(prefix)?,
        })
    }

    /// Compose the scope prefix with a local field name
    pub fn resolve(&self, name: &str) -> Result<FieldPath, PathError> {
        FieldPath::parse(&format!("{}{PATH_SEPARATOR}{name}", self.prefix))
    }

    /// Scope nested one level deeper
    pub fn nested(&self, name: &str) -> Result<Scope, PathError> {
        Ok(Scope {
            prefix: self.resolve(name)?,
        })
    }
}

/// Resolve a local field name against an optional scope
pub fn resolve_path(name: &str, scope: Option<&Scope>) -> Result<FieldPath, PathError> {
    match scope {
        Some(scope) => scope.resolve(name),
        None => FieldPath::parse(name),
    }
}
