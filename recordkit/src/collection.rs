use crate::error::{Error, Result};
use crate::field::get_field;
use crate::record::{compare, loose_eq, Map, Object, Record, NULL};
use std::cmp::Ordering;
use tracing::debug;

/// How [`find`] and [`find_all`] compare a field against the wanted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Equality {
    /// Numbers, numeric strings and booleans are coerced before comparing.
    #[default]
    Loose,
    /// Same kind and same value.
    Strict,
}

impl Equality {
    pub fn matches(self, left: &Record, right: &Record) -> bool {
        match self {
            Equality::Loose => loose_eq(left, right),
            Equality::Strict => left == right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

fn field_or_null<'a>(record: &'a Record, field: &str) -> Result<&'a Record> {
    Ok(get_field(record, field)?.unwrap_or(&NULL))
}

/// First record whose `field` matches `value`, with its index.
pub fn find<'a>(
    records: &'a [Record],
    field: &str,
    value: &Record,
    equality: Equality,
) -> Result<Option<(usize, &'a Record)>> {
    for (index, record) in records.iter().enumerate() {
        if equality.matches(field_or_null(record, field)?, value) {
            return Ok(Some((index, record)));
        }
    }

    Ok(None)
}

/// Every record whose `field` matches `value`, in input order.
pub fn find_all<'a>(
    records: &'a [Record],
    field: &str,
    value: &Record,
    equality: Equality,
) -> Result<Vec<&'a Record>> {
    let mut found = Vec::new();
    for record in records {
        if equality.matches(field_or_null(record, field)?, value) {
            found.push(record);
        }
    }

    Ok(found)
}

/// Stable sort on several fields, each ascending or descending. Missing
/// fields read as null, which sorts first.
pub fn order_by<K: AsRef<str>>(records: Vec<Record>, keys: &[(K, Direction)]) -> Result<Vec<Record>> {
    let mut keyed = records
        .into_iter()
        .map(|record| -> Result<(Vec<Record>, Record)> {
            let values = keys
                .iter()
                .map(|(field, _)| field_or_null(&record, field.as_ref()).cloned())
                .collect::<Result<Vec<Record>>>()?;
            Ok((values, record))
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(left, _), (right, _)| {
        left.iter()
            .zip(right)
            .zip(keys)
            .map(|((left, right), (_, direction))| direction.apply(compare(left, right)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });

    debug!(records = keyed.len(), keys = keys.len(), "records ordered");
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

/// Drops null and empty-string elements.
pub fn prune(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(|record| !record.is_empty_value())
        .collect()
}

/// Drops entries whose value is null or the empty string.
pub fn prune_map(map: Map) -> Map {
    map.into_iter()
        .filter(|(_, value)| !value.is_empty_value())
        .collect()
}

/// True when `key` is absent or holds null or the empty string.
pub fn missing(record: &Record, key: &str) -> Result<bool> {
    Ok(get_field(record, key)?.map_or(true, Record::is_empty_value))
}

fn column_values<K: AsRef<str>>(record: &Record, columns: &[K]) -> Result<Vec<Record>> {
    columns
        .iter()
        .map(|column| field_or_null(record, column.as_ref()).cloned())
        .collect()
}

fn elements(records: &Record) -> Result<Vec<&Record>> {
    match records {
        Record::List(list) => Ok(list.iter().collect()),
        Record::Map(map) => Ok(map.values().collect()),
        Record::Object(object) => Ok(object.iter().map(|(_, value)| value).collect()),
        other => Err(Error::invalid_input("", other.kind())),
    }
}

/// Replaces every element of `records` with `f` applied to the values of
/// `columns` in that element, missing ones read as null. Map keys and
/// object member names are kept.
pub fn map_columns<K, F>(records: Record, columns: &[K], mut f: F) -> Result<Record>
where
    K: AsRef<str>,
    F: FnMut(&[Record]) -> Record,
{
    let mut replace = |record: &Record| -> Result<Record> { Ok(f(&column_values(record, columns)?)) };

    match records {
        Record::List(list) => list
            .iter()
            .map(&mut replace)
            .collect::<Result<Vec<_>>>()
            .map(Record::List),
        Record::Map(map) => map
            .into_iter()
            .map(|(key, record)| -> Result<(String, Record)> { Ok((key, replace(&record)?)) })
            .collect::<Result<Map>>()
            .map(Record::Map),
        Record::Object(object) => object
            .into_members()
            .into_iter()
            .map(|(key, record)| -> Result<(String, Record)> { Ok((key, replace(&record)?)) })
            .collect::<Result<Object>>()
            .map(Record::Object),
        other => Err(Error::invalid_input("", other.kind())),
    }
}

/// Calls `f` with the values of `columns` for every element of `records`.
pub fn iterate_columns<K, F>(records: &Record, columns: &[K], mut f: F) -> Result<()>
where
    K: AsRef<str>,
    F: FnMut(&[Record]),
{
    for record in elements(records)? {
        f(&column_values(record, columns)?);
    }

    Ok(())
}

/// Applies `f` to every value of a container, passing the key (the index
/// for lists). Keys and container kind are kept; scalars come back as is.
pub fn map_entries<F>(record: Record, mut f: F) -> Record
where
    F: FnMut(&Record, &str) -> Record,
{
    match record {
        Record::List(list) => Record::List(
            list.iter()
                .enumerate()
                .map(|(index, value)| f(value, &index.to_string()))
                .collect(),
        ),
        Record::Map(map) => Record::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), f(value, key.as_str())))
                .collect(),
        ),
        Record::Object(object) => Record::Object(
            object
                .iter()
                .map(|(key, value)| (key.clone(), f(value, key.as_str())))
                .collect(),
        ),
        scalar => scalar,
    }
}

/// Keeps the entries `keep` accepts. Maps and objects keep their keys;
/// a filtered list is compacted.
pub fn filter_entries<F>(record: Record, mut keep: F) -> Record
where
    F: FnMut(&Record, &str) -> bool,
{
    match record {
        Record::List(list) => Record::List(
            list.into_iter()
                .enumerate()
                .filter(|(index, value)| keep(value, &index.to_string()))
                .map(|(_, value)| value)
                .collect(),
        ),
        Record::Map(map) => Record::Map(
            map.into_iter()
                .filter(|(key, value)| keep(value, key.as_str()))
                .collect(),
        ),
        Record::Object(object) => Record::Object(
            object
                .into_members()
                .into_iter()
                .filter(|(key, value)| keep(value, key.as_str()))
                .collect(),
        ),
        scalar => scalar,
    }
}
