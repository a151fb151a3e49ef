use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt::Display;

/// Insertion-ordered key table shared by maps and objects.
pub type Map = IndexMap<String, Record>;

pub(crate) static NULL: Record = Record::Null;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(value) => *value as f64,
            Number::Float(value) => *value,
        }
    }

    /// Floats convert only when they carry no fractional part and fit.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Number::Int(value) => Some(*value),
            Number::Float(value) => {
                if value.fract() == 0.0 && *value >= i64::MIN as f64 && *value < i64::MAX as f64 {
                    Some(*value as i64)
                } else {
                    None
                }
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(value) => *value == 0,
            Number::Float(value) => *value == 0.0,
        }
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{}", value),
            // Floats always keep a fractional part so `1.0` never renders like `1`.
            Number::Float(value) => {
                let text = value.to_string();
                if value.is_finite() && !text.contains('.') {
                    write!(f, "{}.0", text)
                } else {
                    write!(f, "{}", text)
                }
            }
        }
    }
}

/// A named-member container, kept apart from [`Map`] so callers can tell
/// structured objects from plain key tables.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    members: Map,
}

impl Object {
    pub fn new() -> Self {
        Self {
            members: Map::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.members.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.members.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Record) -> Option<Record> {
        self.members.insert(name.into(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.members.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Record> {
        self.members.iter()
    }

    pub fn members(&self) -> &Map {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut Map {
        &mut self.members
    }

    pub fn into_members(self) -> Map {
        self.members
    }
}

impl From<Map> for Object {
    fn from(members: Map) -> Self {
        Self { members }
    }
}

impl FromIterator<(String, Record)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Record)>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    List,
    Map,
    Object,
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::List => "list",
            Kind::Map => "map",
            Kind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// Container kind created for missing path nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Container {
    #[default]
    Map,
    Object,
}

impl Container {
    /// `assoc = true` asks for key tables, otherwise objects are created.
    pub fn from_assoc(assoc: bool) -> Self {
        if assoc {
            Container::Map
        } else {
            Container::Object
        }
    }

    pub fn empty(self) -> Record {
        match self {
            Container::Map => Record::Map(Map::new()),
            Container::Object => Record::Object(Object::new()),
        }
    }

    pub fn kind(self) -> Kind {
        match self {
            Container::Map => Kind::Map,
            Container::Object => Kind::Object,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Record {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Record>),
    Map(Map),
    Object(Object),
}

impl Record {
    pub fn kind(&self) -> Kind {
        match self {
            Record::Null => Kind::Null,
            Record::Bool(_) => Kind::Bool,
            Record::Number(_) => Kind::Number,
            Record::String(_) => Kind::String,
            Record::List(_) => Kind::List,
            Record::Map(_) => Kind::Map,
            Record::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Record::Null)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Record::List(_) | Record::Map(_) | Record::Object(_))
    }

    /// Null or the empty string.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Record::Null => true,
            Record::String(value) => value.is_empty(),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Record::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Record::Number(number) => Some(number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Record::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Record>> {
        match self {
            Record::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Record>> {
        match self {
            Record::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Record::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Record::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Record::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Record::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.as_number().map(Number::to_f64)
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.as_number().and_then(Number::to_i64)
    }

    /// Number of direct children; scalars have none.
    pub fn len(&self) -> usize {
        match self {
            Record::List(list) => list.len(),
            Record::Map(map) => map.len(),
            Record::Object(object) => object.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// String form of a scalar used as a grouping or index key.
    pub fn to_key(&self) -> Result<String> {
        match self {
            Record::Null => Ok(String::new()),
            Record::Bool(value) => Ok(value.to_string()),
            Record::Number(number) => Ok(number.to_string()),
            Record::String(value) => Ok(value.clone()),
            other => Err(Error::InvalidKey(other.kind())),
        }
    }
}

impl From<bool> for Record {
    fn from(value: bool) -> Self {
        Record::Bool(value)
    }
}

impl From<i32> for Record {
    fn from(value: i32) -> Self {
        Record::Number(Number::Int(value as i64))
    }
}

impl From<u32> for Record {
    fn from(value: u32) -> Self {
        Record::Number(Number::Int(value as i64))
    }
}

impl From<i64> for Record {
    fn from(value: i64) -> Self {
        Record::Number(Number::Int(value))
    }
}

impl From<f32> for Record {
    fn from(value: f32) -> Self {
        Record::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Record {
    fn from(value: f64) -> Self {
        Record::Number(Number::Float(value))
    }
}

impl From<Number> for Record {
    fn from(value: Number) -> Self {
        Record::Number(value)
    }
}

impl From<&str> for Record {
    fn from(value: &str) -> Self {
        Record::String(value.to_string())
    }
}

impl From<String> for Record {
    fn from(value: String) -> Self {
        Record::String(value)
    }
}

impl From<Vec<Record>> for Record {
    fn from(value: Vec<Record>) -> Self {
        Record::List(value)
    }
}

impl From<Map> for Record {
    fn from(value: Map) -> Self {
        Record::Map(value)
    }
}

impl From<Object> for Record {
    fn from(value: Object) -> Self {
        Record::Object(value)
    }
}

impl<T: Into<Record>> From<Option<T>> for Record {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Record::Null,
        }
    }
}

impl FromIterator<Record> for Record {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Record::List(iter.into_iter().collect())
    }
}

fn rank(record: &Record) -> u8 {
    match record {
        Record::Null => 0,
        Record::Bool(_) => 1,
        Record::Number(_) => 2,
        Record::String(_) => 3,
        Record::List(_) => 4,
        Record::Map(_) => 5,
        Record::Object(_) => 6,
    }
}

fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    match (left, right) {
        (Number::Int(left), Number::Int(right)) => left.cmp(right),
        _ => left.to_f64().total_cmp(&right.to_f64()),
    }
}

fn compare_entries<'a, I>(left: I, right: I) -> Ordering
where
    I: Iterator<Item = (&'a String, &'a Record)>,
{
    let mut right = right;
    for (left_key, left_value) in left {
        let Some((right_key, right_value)) = right.next() else {
            return Ordering::Greater;
        };
        let ordering = left_key
            .cmp(right_key)
            .then_with(|| compare(left_value, right_value));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    if right.next().is_some() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Total order over records: values of different kinds order by kind
/// (null, bool, number, string, list, map, object), numbers compare
/// numerically regardless of int/float representation.
pub fn compare(left: &Record, right: &Record) -> Ordering {
    match (left, right) {
        (Record::Null, Record::Null) => Ordering::Equal,
        (Record::Bool(left), Record::Bool(right)) => left.cmp(right),
        (Record::Number(left), Record::Number(right)) => compare_numbers(left, right),
        (Record::String(left), Record::String(right)) => left.cmp(right),
        (Record::List(left), Record::List(right)) => {
            for (left, right) in left.iter().zip(right.iter()) {
                let ordering = compare(left, right);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            left.len().cmp(&right.len())
        }
        (Record::Map(left), Record::Map(right)) => compare_entries(left.iter(), right.iter()),
        (Record::Object(left), Record::Object(right)) => {
            compare_entries(left.iter(), right.iter())
        }
        _ => rank(left).cmp(&rank(right)),
    }
}

fn numeric(record: &Record) -> Option<f64> {
    match record {
        Record::Number(number) => Some(number.to_f64()),
        Record::String(value) => value.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Equality with scalar coercion: `1`, `1.0` and `"1"` are equal, and a
/// bool equals anything with the same truthiness.
pub fn loose_eq(left: &Record, right: &Record) -> bool {
    if left == right {
        return true;
    }

    match (left, right) {
        (Record::Bool(flag), other) | (other, Record::Bool(flag)) => {
            *flag == crate::convert::to_bool(other)
        }
        _ => match (numeric(left), numeric(right)) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{list, map};

    #[test]
    fn test_float_keys_keep_fraction() {
        assert_eq!(Record::from(1.0).to_key().unwrap(), "1.0");
        assert_eq!(Record::from(2.5).to_key().unwrap(), "2.5");
        assert_eq!(Record::from(1i64).to_key().unwrap(), "1");
        assert_ne!(
            Record::from(1.0).to_key().unwrap(),
            Record::from(1i64).to_key().unwrap()
        );
    }

    #[test]
    fn test_scalar_keys() {
        assert_eq!(Record::Null.to_key().unwrap(), "");
        assert_eq!(Record::from(true).to_key().unwrap(), "true");
        assert_eq!(Record::from("red").to_key().unwrap(), "red");
    }

    #[test]
    fn test_container_is_not_a_key() {
        let result = list![1, 2].to_key();
        assert_eq!(result, Err(Error::InvalidKey(Kind::List)));
    }

    #[test]
    fn test_compare_numbers_across_representations() {
        assert_eq!(
            compare(&Record::from(1i64), &Record::from(1.5)),
            Ordering::Less
        );
        assert_eq!(
            compare(&Record::from(2.0), &Record::from(2i64)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_orders_kinds() {
        let mut values = vec![
            Record::from("b"),
            Record::from(3i64),
            Record::Null,
            Record::from(true),
            list![1],
        ];
        values.sort_by(compare);

        assert_eq!(
            values,
            vec![
                Record::Null,
                Record::from(true),
                Record::from(3i64),
                Record::from("b"),
                list![1],
            ]
        );
    }

    #[test]
    fn test_compare_maps_by_entries() {
        let left = map! { "a" => 1 };
        let right = map! { "a" => 1, "b" => 2 };

        assert_eq!(compare(&left, &right), Ordering::Less);
        assert_eq!(compare(&right, &right.clone()), Ordering::Equal);
    }

    #[test]
    fn test_loose_eq() {
        assert!(loose_eq(&Record::from(1i64), &Record::from(1.0)));
        assert!(loose_eq(&Record::from("1"), &Record::from(1i64)));
        assert!(loose_eq(&Record::from(true), &Record::from("yes")));
        assert!(!loose_eq(&Record::from("a"), &Record::from("b")));
        assert_ne!(Record::from(1i64), Record::from(1.0));
    }

    #[test]
    fn test_container_from_assoc() {
        assert_eq!(Container::from_assoc(true), Container::Map);
        assert_eq!(Container::from_assoc(false).empty(), Record::Object(Object::new()));
    }

    #[test]
    fn test_number_to_i64() {
        assert_eq!(Number::Float(4.0).to_i64(), Some(4));
        assert_eq!(Number::Float(4.5).to_i64(), None);
    }
}
