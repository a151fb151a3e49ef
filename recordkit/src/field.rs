//! Single-key resolution over maps, objects and lists.
//!
//! Maps and objects are addressed by key or member name. Lists take a
//! decimal index (`"0"`, `"12"`); any other key on a list, or any key on a
//! scalar, is an [`Error::InvalidInputKind`].

use crate::error::{Error, Result};
use crate::record::{Container, Kind, Record};

pub(crate) fn list_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    if key.len() > 1 && key.starts_with('0') {
        return None;
    }

    key.parse::<usize>().ok()
}

pub fn has_field(record: &Record, key: &str) -> Result<bool> {
    Ok(get_field(record, key)?.is_some())
}

/// `Ok(None)` means the key is missing; a present null is `Ok(Some(Null))`.
pub fn get_field<'a>(record: &'a Record, key: &str) -> Result<Option<&'a Record>> {
    match record {
        Record::Map(map) => Ok(map.get(key)),
        Record::Object(object) => Ok(object.get(key)),
        Record::List(list) => match list_index(key) {
            Some(index) => Ok(list.get(index)),
            None => Err(Error::invalid_input(key, Kind::List)),
        },
        other => Err(Error::invalid_input(key, other.kind())),
    }
}

pub fn get_field_or(record: &Record, key: &str, default: Record) -> Result<Record> {
    Ok(get_field(record, key)?.cloned().unwrap_or(default))
}

pub fn get_field_mut<'a>(record: &'a mut Record, key: &str) -> Result<Option<&'a mut Record>> {
    match record {
        Record::Map(map) => Ok(map.get_mut(key)),
        Record::Object(object) => Ok(object.get_mut(key)),
        Record::List(list) => match list_index(key) {
            Some(index) => Ok(list.get_mut(index)),
            None => Err(Error::invalid_input(key, Kind::List)),
        },
        other => Err(Error::invalid_input(key, other.kind())),
    }
}

pub fn set_field(record: &mut Record, key: &str, value: Record) -> Result<()> {
    let slot = field_ref(record, key, None)?;
    *slot = value;
    Ok(())
}

fn vacant(vivify: Option<Container>) -> Record {
    match vivify {
        Some(container) => container.empty(),
        None => Record::Null,
    }
}

/// Returns the slot for `key`, creating it when missing. New slots hold
/// null, or an empty container when `vivify` is given.
///
/// On lists only `index <= len` is addressable; `index == len` appends.
pub fn field_ref<'a>(
    record: &'a mut Record,
    key: &str,
    vivify: Option<Container>,
) -> Result<&'a mut Record> {
    match record {
        Record::Map(map) => Ok(map.entry(key.to_string()).or_insert_with(|| vacant(vivify))),
        Record::Object(object) => Ok(object
            .members_mut()
            .entry(key.to_string())
            .or_insert_with(|| vacant(vivify))),
        Record::List(list) => match list_index(key) {
            Some(index) if index < list.len() => Ok(&mut list[index]),
            Some(index) if index == list.len() => {
                list.push(vacant(vivify));
                Ok(&mut list[index])
            }
            _ => Err(Error::invalid_path(key, key, Kind::List)),
        },
        other => Err(Error::invalid_input(key, other.kind())),
    }
}

/// Removes `key` and returns its value. Removing from a list shifts the
/// following elements down.
pub fn remove_field(record: &mut Record, key: &str) -> Result<Option<Record>> {
    match record {
        Record::Map(map) => Ok(map.shift_remove(key)),
        Record::Object(object) => Ok(object.remove(key)),
        Record::List(list) => match list_index(key) {
            Some(index) if index < list.len() => Ok(Some(list.remove(index))),
            Some(_) => Ok(None),
            None => Err(Error::invalid_path(key, key, Kind::List)),
        },
        other => Err(Error::invalid_path(key, key, other.kind())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, map, object};

    #[test]
    fn test_get_field_distinguishes_missing_from_null() {
        let record = map! { "a" => Record::Null };

        assert_eq!(get_field(&record, "a").unwrap(), Some(&Record::Null));
        assert_eq!(get_field(&record, "b").unwrap(), None);
    }

    #[test]
    fn test_get_field_on_object_members() {
        let record = object! { "name" => "bee" };

        assert_eq!(
            get_field(&record, "name").unwrap(),
            Some(&Record::from("bee"))
        );
        assert!(!has_field(&record, "color").unwrap());
    }

    #[test]
    fn test_get_field_by_list_index() {
        let record = list!["a", "b"];

        assert_eq!(get_field(&record, "1").unwrap(), Some(&Record::from("b")));
        assert_eq!(get_field(&record, "2").unwrap(), None);
    }

    #[test]
    fn test_get_field_rejects_scalars_and_names_on_lists() {
        assert_eq!(
            get_field(&Record::from(5i64), "a"),
            Err(Error::invalid_input("a", Kind::Number))
        );
        assert_eq!(
            get_field(&list![1], "first"),
            Err(Error::invalid_input("first", Kind::List))
        );
    }

    #[test]
    fn test_get_field_or_uses_default() {
        let record = map! { "a" => 1 };

        assert_eq!(
            get_field_or(&record, "b", Record::from("none")).unwrap(),
            Record::from("none")
        );
    }

    #[test]
    fn test_list_index_format() {
        assert_eq!(list_index("0"), Some(0));
        assert_eq!(list_index("10"), Some(10));
        assert_eq!(list_index("01"), None);
        assert_eq!(list_index("-1"), None);
        assert_eq!(list_index(""), None);
    }

    #[test]
    fn test_field_ref_creates_slot() {
        let mut record = map! {};
        *field_ref(&mut record, "a", Some(Container::Object)).unwrap() = Record::from(1i64);
        field_ref(&mut record, "b", Some(Container::Object)).unwrap();
        field_ref(&mut record, "c", None).unwrap();

        assert_eq!(
            record,
            map! { "a" => 1i64, "b" => object!{}, "c" => Record::Null }
        );
    }

    #[test]
    fn test_set_field_appends_to_list() {
        let mut record = list!["a"];
        set_field(&mut record, "1", Record::from("b")).unwrap();
        set_field(&mut record, "0", Record::from("z")).unwrap();

        assert_eq!(record, list!["z", "b"]);
        assert_eq!(
            set_field(&mut record, "5", Record::Null),
            Err(Error::invalid_path("5", "5", Kind::List))
        );
    }

    #[test]
    fn test_remove_field_keeps_order() {
        let mut record = map! { "a" => 1, "b" => 2, "c" => 3 };

        assert_eq!(remove_field(&mut record, "b").unwrap(), Some(Record::from(2)));
        assert_eq!(remove_field(&mut record, "b").unwrap(), None);
        assert_eq!(record, map! { "a" => 1, "c" => 3 });
    }
}
