use crate::error::{Error, Result};
use crate::field::get_field;
use crate::record::{Map, Object, Record, NULL};

// Null reads as a record without fields.
fn lookup<'a>(record: &'a Record, key: &str) -> Result<Option<&'a Record>> {
    if record.is_null() {
        return Ok(None);
    }

    get_field(record, key)
}

fn ensure_uniform(records: &[Record]) -> Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };

    let expected = first.kind();
    for (index, record) in records.iter().enumerate().skip(1) {
        if record.kind() != expected {
            return Err(Error::MixedContainerKinds {
                index,
                expected,
                found: record.kind(),
            });
        }
    }

    Ok(())
}

/// Values for `keys`, in `keys` order, with `default` for the missing ones.
/// The result has one entry per distinct key.
pub fn fields<K: AsRef<str>>(record: &Record, keys: &[K], default: &Record) -> Result<Map> {
    keys.iter()
        .map(|key| -> Result<(String, Record)> {
            let key = key.as_ref();
            let value = lookup(record, key)?.unwrap_or(default).clone();
            Ok((key.to_string(), value))
        })
        .collect()
}

/// The subset of `record` present under `keys`, in `keys` order. Objects
/// stay objects; everything else yields a map.
pub fn only<K: AsRef<str>>(record: &Record, keys: &[K]) -> Result<Record> {
    let mut picked = Map::new();
    for key in keys {
        let key = key.as_ref();
        if let Some(value) = lookup(record, key)? {
            picked.insert(key.to_string(), value.clone());
        }
    }

    match record {
        Record::Object(_) => Ok(Record::Object(Object::from(picked))),
        _ => Ok(Record::Map(picked)),
    }
}

/// One list of key values per record; missing keys read as null.
pub fn extract<K: AsRef<str>>(records: &[Record], keys: &[K]) -> Result<Vec<Record>> {
    records
        .iter()
        .map(|record| {
            keys.iter()
                .map(|key| -> Result<Record> {
                    Ok(lookup(record, key.as_ref())?.unwrap_or(&NULL).clone())
                })
                .collect::<Result<Record>>()
        })
        .collect()
}

/// The value of `key` in every record; missing keys read as null.
///
/// All records must share the kind of the first one, otherwise
/// [`Error::MixedContainerKinds`] is returned.
pub fn get_column(records: &[Record], key: &str) -> Result<Vec<Record>> {
    ensure_uniform(records)?;

    records
        .iter()
        .map(|record| -> Result<Record> { Ok(lookup(record, key)?.unwrap_or(&NULL).clone()) })
        .collect()
}

/// [`fields`] of every record, with null for missing keys. Same kind rule
/// as [`get_column`].
pub fn get_columns<K: AsRef<str>>(records: &[Record], keys: &[K]) -> Result<Vec<Map>> {
    ensure_uniform(records)?;

    records
        .iter()
        .map(|record| fields(record, keys, &NULL))
        .collect()
}
