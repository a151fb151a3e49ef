use crate::record::{Map, Number, Record};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt::Formatter;
use valu3::prelude::*;

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Int(value) => serializer.serialize_i64(*value),
            Number::Float(value) => serializer.serialize_f64(*value),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Record::Null => serializer.serialize_unit(),
            Record::Bool(value) => serializer.serialize_bool(*value),
            Record::Number(number) => number.serialize(serializer),
            Record::String(value) => serializer.serialize_str(value),
            Record::List(list) => serializer.collect_seq(list),
            Record::Map(map) => serializer.collect_map(map),
            Record::Object(object) => serializer.collect_map(object.iter()),
        }
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a null, bool, number, string, sequence or map")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Record, E> {
        Ok(Record::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Record, E> {
        Ok(Record::Number(Number::Int(value)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Record, E> {
        match i64::try_from(value) {
            Ok(value) => Ok(Record::Number(Number::Int(value))),
            Err(_) => Ok(Record::Number(Number::Float(value as f64))),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Record, E> {
        Ok(Record::Number(Number::Float(value)))
    }

    fn visit_str<E>(self, value: &str) -> Result<Record, E> {
        Ok(Record::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Record, E> {
        Ok(Record::String(value))
    }

    fn visit_unit<E>(self) -> Result<Record, E> {
        Ok(Record::Null)
    }

    fn visit_none<E>(self) -> Result<Record, E> {
        Ok(Record::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Record, D::Error> {
        Record::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Record, A::Error> {
        let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(element) = seq.next_element::<Record>()? {
            list.push(element);
        }
        Ok(Record::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Record>()? {
            map.insert(key, value);
        }
        Ok(Record::Map(map))
    }
}

/// Documents deserialize into maps; nothing produces an object.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecordVisitor)
    }
}

fn number_from_value(value: &Value) -> Record {
    match (value.to_i64(), value.to_f64()) {
        (Some(int), Some(float)) if int as f64 == float => Record::from(int),
        (_, Some(float)) => Record::from(float),
        (Some(int), None) => Record::from(int),
        (None, None) => Record::Null,
    }
}

/// Integral valu3 numbers come back as ints. `Undefined` is null and any
/// other non-container value (date-times) becomes its text.
impl From<&Value> for Record {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Undefined => Record::Null,
            Value::Boolean(flag) => Record::Bool(*flag),
            Value::Number(_) => number_from_value(value),
            Value::String(text) => Record::String(text.as_str().to_string()),
            Value::Array(array) => Record::List(array.into_iter().map(Record::from).collect()),
            Value::Object(object) => Record::Map(
                object
                    .iter()
                    .map(|(key, value)| (key.to_string(), Record::from(value)))
                    .collect(),
            ),
            other => Record::String(other.to_string()),
        }
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        Record::from(&value)
    }
}

fn members_to_value<'a, I>(members: I) -> Value
where
    I: Iterator<Item = (&'a String, &'a Record)>,
{
    let map: HashMap<String, Value> = members
        .map(|(key, value)| (key.clone(), Value::from(value)))
        .collect();
    Value::from(map)
}

impl From<&Record> for Value {
    fn from(record: &Record) -> Self {
        match record {
            Record::Null => Value::Null,
            Record::Bool(flag) => Value::from(*flag),
            Record::Number(Number::Int(value)) => Value::from(*value),
            Record::Number(Number::Float(value)) => Value::from(*value),
            Record::String(text) => Value::from(text.as_str()),
            Record::List(list) => Value::from(list.iter().map(Value::from).collect::<Vec<Value>>()),
            Record::Map(map) => members_to_value(map.iter()),
            Record::Object(object) => members_to_value(object.iter()),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::from(&record)
    }
}
