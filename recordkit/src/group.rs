use crate::error::Result;
use crate::field::get_field;
use crate::record::{Map, Record};
use indexmap::IndexMap;
use std::fmt::{Debug, Formatter};
use tracing::debug;

pub type ExtractorFn = Box<dyn Fn(&Record) -> Record + Send + Sync>;

/// Where a grouping key comes from: a field of the record or a function of
/// the whole record.
pub enum Extractor {
    Field(String),
    Func(ExtractorFn),
}

impl Extractor {
    pub fn field(name: impl Into<String>) -> Self {
        Extractor::Field(name.into())
    }

    pub fn func<F>(func: F) -> Self
    where
        F: Fn(&Record) -> Record + Send + Sync + 'static,
    {
        Extractor::Func(Box::new(func))
    }

    /// Missing fields read as null, so they group under `""`.
    pub fn key(&self, record: &Record) -> Result<String> {
        match self {
            Extractor::Field(name) => match get_field(record, name)? {
                Some(value) => value.to_key(),
                None => Ok(String::new()),
            },
            Extractor::Func(func) => func(record).to_key(),
        }
    }
}

impl Debug for Extractor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Extractor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Extractor::Func(_) => write!(f, "Func(..)"),
        }
    }
}

impl From<&str> for Extractor {
    fn from(name: &str) -> Self {
        Extractor::field(name)
    }
}

impl From<String> for Extractor {
    fn from(name: String) -> Self {
        Extractor::Field(name)
    }
}

enum Node {
    Branch(IndexMap<String, Node>),
    Leaf(Vec<Record>),
}

impl Node {
    fn into_record(self) -> Record {
        match self {
            Node::Branch(children) => Record::Map(
                children
                    .into_iter()
                    .map(|(key, child)| (key, child.into_record()))
                    .collect(),
            ),
            Node::Leaf(records) => Record::List(records),
        }
    }
}

fn insert(branch: &mut IndexMap<String, Node>, keys: &[String], record: Record) {
    let Some((key, rest)) = keys.split_first() else {
        return;
    };

    if rest.is_empty() {
        if let Node::Leaf(records) = branch
            .entry(key.clone())
            .or_insert_with(|| Node::Leaf(Vec::new()))
        {
            records.push(record);
        }
    } else if let Node::Branch(children) = branch
        .entry(key.clone())
        .or_insert_with(|| Node::Branch(IndexMap::new()))
    {
        insert(children, rest, record);
    }
}

/// Splits `records` into a tree keyed by each extractor in turn.
///
/// Every level but the last is a map, the last level holds lists of the
/// records sharing the full key tuple, in input order. Sibling keys keep
/// the order in which they were first seen. With no extractors the
/// records come back as a single list.
///
/// ```
/// use recordkit::{group::group_by, list, map, Extractor};
///
/// let records = vec![
///     map! { "type" => "a", "color" => "red" },
///     map! { "type" => "a", "color" => "green" },
///     map! { "type" => "b", "color" => "red" },
/// ];
/// let grouped = group_by(records.clone(), &["type".into(), "color".into()]).unwrap();
///
/// assert_eq!(
///     grouped,
///     map! {
///         "a" => map! {
///             "red" => list![records[0].clone()],
///             "green" => list![records[1].clone()],
///         },
///         "b" => map! { "red" => list![records[2].clone()] },
///     }
/// );
/// # let _ = Extractor::field("type");
/// ```
pub fn group_by<I>(records: I, extractors: &[Extractor]) -> Result<Record>
where
    I: IntoIterator<Item = Record>,
{
    if extractors.is_empty() {
        return Ok(records.into_iter().collect());
    }

    let mut root = IndexMap::new();
    let mut count = 0usize;

    for record in records {
        let keys = extractors
            .iter()
            .map(|extractor| extractor.key(&record))
            .collect::<Result<Vec<String>>>()?;

        insert(&mut root, &keys, record);
        count += 1;
    }

    debug!(records = count, levels = extractors.len(), groups = root.len(), "records grouped");
    Ok(Node::Branch(root).into_record())
}

/// Keys each record by one extractor. A later record with the same key
/// replaces the earlier one but keeps its position.
pub fn index_by<'a, I>(records: I, extractor: &Extractor) -> Result<Map>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut index = Map::new();

    for record in records {
        index.insert(extractor.key(record)?, record.clone());
    }

    Ok(index)
}
