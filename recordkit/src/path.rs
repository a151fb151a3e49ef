//! Dot-delimited navigation over nested records.
//!
//! A path such as `"user.address.city"` is split on `.` into segments that
//! are resolved one at a time with the [`field`](crate::field) rules. The
//! empty path has no segments and addresses the root itself; `"a..b"` has
//! an empty middle segment, which is an ordinary key.

use crate::error::{Error, Result};
use crate::field::{field_ref, get_field, get_field_mut, has_field, remove_field};
use crate::record::{Container, Kind, Record};
use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;
use tracing::trace;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }

        Self {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
    }

    /// Splits off the final segment, returning it with the parent path.
    pub fn split_last(&self) -> Option<(&str, Path)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            last.as_str(),
            Path {
                segments: parent.to_vec(),
            },
        ))
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for Path {
    type Err = Infallible;

    fn from_str(path: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Path::parse(path))
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::parse(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path::parse(&path)
    }
}

impl From<&String> for Path {
    fn from(path: &String) -> Self {
        Path::parse(path)
    }
}

impl From<&Path> for Path {
    fn from(path: &Path) -> Self {
        path.clone()
    }
}

impl From<Vec<String>> for Path {
    fn from(segments: Vec<String>) -> Self {
        Self { segments }
    }
}

/// Handle to one mutable slot inside a record tree, as returned by
/// [`locate`].
#[derive(Debug)]
pub struct Slot<'a> {
    value: &'a mut Record,
}

impl<'a> Slot<'a> {
    pub fn get(&self) -> &Record {
        self.value
    }

    pub fn get_mut(&mut self) -> &mut Record {
        self.value
    }

    /// Stores `value` and returns what the slot held before.
    pub fn write(&mut self, value: Record) -> Record {
        std::mem::replace(self.value, value)
    }

    /// Leaves null behind.
    pub fn take(&mut self) -> Record {
        std::mem::take(self.value)
    }

    pub fn into_mut(self) -> &'a mut Record {
        self.value
    }
}

/// Reads the value at `path`. Walking stops at the first missing or null
/// segment and yields `None`; a null at the end of the path is `None` too.
pub fn get<'a>(root: &'a Record, path: impl Into<Path>) -> Result<Option<&'a Record>> {
    let path = path.into();
    if root.is_null() {
        return Ok(None);
    }

    let mut current = root;
    for segment in path.segments() {
        match get_field(current, segment)? {
            Some(next) if !next.is_null() => current = next,
            _ => {
                trace!(path = %path, segment = %segment, "path short-circuited");
                return Ok(None);
            }
        }
    }

    if current.is_null() {
        Ok(None)
    } else {
        Ok(Some(current))
    }
}

pub fn get_or(root: &Record, path: impl Into<Path>, default: Record) -> Result<Record> {
    Ok(get(root, path)?.cloned().unwrap_or(default))
}

/// True when the final slot exists, even if it holds null.
pub fn has(root: &Record, path: impl Into<Path>) -> Result<bool> {
    let path = path.into();
    let Some((last, parent)) = path.split_last() else {
        return Ok(true);
    };

    match get(root, &parent)? {
        Some(container) => has_field(container, last),
        None => Ok(false),
    }
}

/// Walks to `path`, creating what is missing on the way, and returns a
/// handle to the final slot.
///
/// Missing intermediate keys become empty containers of the `vivify` kind;
/// a missing final slot is created holding null. A node that is present but
/// not a container, null included, is `InvalidPathKind`. Nothing is rolled
/// back when a later segment fails.
pub fn locate(root: &mut Record, path: impl Into<Path>, vivify: Container) -> Result<Slot<'_>> {
    let path = path.into();
    let count = path.len();
    let mut current = root;

    for (index, segment) in path.segments().iter().enumerate() {
        if !current.is_container() {
            return Err(Error::invalid_path(&path, segment, current.kind()));
        }

        let fill = if index + 1 == count { None } else { Some(vivify) };
        current = field_ref(current, segment, fill).map_err(|err| err.at_path(&path))?;
    }

    Ok(Slot { value: current })
}

/// Writes `value` at `path` and returns the previous value (null when the
/// slot is new). The empty path replaces the root.
pub fn set(
    root: &mut Record,
    path: impl Into<Path>,
    value: Record,
    vivify: Container,
) -> Result<Record> {
    let path = path.into();
    trace!(path = %path, "set");

    let mut slot = locate(root, &path, vivify)?;
    Ok(slot.write(value))
}

/// Removes the final segment of `path` from its parent and returns the
/// removed value, or `None` when the parent has no such entry.
///
/// The parent must already exist as a container: a missing or null parent,
/// a scalar parent or a name on a list is `InvalidPathKind`. Reaching the
/// parent creates nothing.
pub fn unset(root: &mut Record, path: impl Into<Path>) -> Result<Option<Record>> {
    let path = path.into();
    let Some((last, parent_path)) = path.split_last() else {
        return Err(Error::invalid_path(&path, "", root.kind()));
    };

    let mut parent = root;
    for segment in parent_path.segments() {
        let kind = parent.kind();
        if !parent.is_container() {
            return Err(Error::invalid_path(&path, segment, kind));
        }

        match get_field_mut(parent, segment) {
            Ok(Some(child)) => parent = child,
            Ok(None) => return Err(Error::invalid_path(&path, segment, Kind::Null)),
            Err(_) => return Err(Error::invalid_path(&path, segment, kind)),
        }
    }

    if !parent.is_container() {
        return Err(Error::invalid_path(&path, last, parent.kind()));
    }

    trace!(path = %path, "unset");
    remove_field(parent, last).map_err(|err| err.at_path(&path))
}
