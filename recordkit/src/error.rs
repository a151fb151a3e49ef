use crate::record::Kind;
use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A field lookup was attempted on something that has no fields.
    InvalidInputKind { key: String, kind: Kind },
    /// A write or unset would need to descend into a non-container.
    InvalidPathKind {
        path: String,
        segment: String,
        kind: Kind,
    },
    /// The value cannot be used as a grouping or index key.
    InvalidKey(Kind),
    MixedContainerKinds {
        index: usize,
        expected: Kind,
        found: Kind,
    },
}

impl Error {
    pub(crate) fn invalid_input(key: &str, kind: Kind) -> Self {
        Error::InvalidInputKind {
            key: key.to_string(),
            kind,
        }
    }

    pub(crate) fn invalid_path(path: impl Display, segment: &str, kind: Kind) -> Self {
        Error::InvalidPathKind {
            path: path.to_string(),
            segment: segment.to_string(),
            kind,
        }
    }

    /// Reports a path failure against the full path instead of one key.
    pub(crate) fn at_path(self, path: impl Display) -> Self {
        match self {
            Error::InvalidPathKind { segment, kind, .. } => Error::InvalidPathKind {
                path: path.to_string(),
                segment,
                kind,
            },
            other => other,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidInputKind { key, kind } if key.is_empty() => {
                write!(f, "Invalid input kind: {} value is not a map or object", kind)
            }
            Error::InvalidInputKind { key, kind } => {
                write!(f, "Invalid input kind: cannot read field '{}' from {} value", key, kind)
            }
            Error::InvalidPathKind {
                path,
                segment,
                kind,
            } => write!(
                f,
                "Invalid path kind: segment '{}' of '{}' addresses {} value",
                segment, path, kind
            ),
            Error::InvalidKey(kind) => write!(f, "Invalid key: {} value cannot be used as a key", kind),
            Error::MixedContainerKinds {
                index,
                expected,
                found,
            } => write!(
                f,
                "Mixed container kinds: element {} is {}, expected {}",
                index, found, expected
            ),
        }
    }
}

impl std::error::Error for Error {}
