//! Helpers for nested dynamic records: path access with auto-vivification,
//! multi-level grouping, field extraction and binary search.
//!
//! ```
//! use recordkit::prelude::*;
//!
//! let mut data = map! {};
//! path::set(&mut data, "user.address.city", Record::from("Lisboa"), Container::Map).unwrap();
//!
//! assert_eq!(
//!     path::get(&data, "user.address.city").unwrap(),
//!     Some(&Record::from("Lisboa"))
//! );
//! assert_eq!(path::get(&data, "user.phone.mobile").unwrap(), None);
//! ```
pub mod collection;
pub mod convert;
pub mod datetime;
pub mod error;
pub mod extract;
pub mod field;
pub mod group;
mod interop;
pub mod log;
mod macros;
pub mod object;
pub mod path;
pub mod record;
pub mod search;
pub mod strings;

pub use collection::{Direction, Equality};
pub use error::{Error, Result};
pub use group::Extractor;
pub use path::{Path, Slot};
pub use record::{Container, Kind, Map, Number, Object, Record};
pub use search::SearchResult;
pub use tracing;
pub use valu3;

pub mod prelude {
    pub use crate::{collection, extract, field, group, object, path, search};
    pub use crate::{list, map};
    pub use crate::{
        Container, Direction, Equality, Error, Extractor, Kind, Map, Number, Object, Path, Record,
        Result, SearchResult, Slot,
    };
}
