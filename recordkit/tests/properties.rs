//! Property-based tests for path access, search, grouping and extraction.

use proptest::prelude::*;
use recordkit::{
    extract, group, list, map, path, Container, Map, Object, Path, Record, SearchResult,
};
use recordkit::search::{binary_search_by, binary_search_records};

// ── Strategies ──────────────────────────────────────────────────────────

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..5)
}

fn scalar_strategy() -> impl Strategy<Value = Record> {
    prop_oneof![
        any::<bool>().prop_map(Record::from),
        any::<i64>().prop_map(Record::from),
        "[a-z ]{0,8}".prop_map(Record::from),
    ]
}

fn flat_record_strategy() -> impl Strategy<Value = Record> {
    prop::collection::vec(("[a-e]", scalar_strategy()), 0..6).prop_map(|entries| {
        let mut map = Map::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Record::Map(map)
    })
}

// Shallow keys and small indexes so generated paths land inside the tree.
fn tree_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-c]", "[0-2]"]
}

fn tree_path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tree_segment_strategy(), 1..4)
}

fn entries_strategy(
    inner: impl Strategy<Value = Record>,
) -> impl Strategy<Value = Vec<(String, Record)>> {
    prop::collection::vec(("[a-c0-2]", inner), 0..4)
}

fn nested_record_strategy() -> impl Strategy<Value = Record> {
    let leaf = prop_oneof![Just(Record::Null), scalar_strategy()];
    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Record::List),
            entries_strategy(inner.clone())
                .prop_map(|entries| Record::Map(entries.into_iter().collect())),
            entries_strategy(inner)
                .prop_map(|entries| Record::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

fn root_strategy() -> impl Strategy<Value = Record> {
    prop_oneof![
        entries_strategy(nested_record_strategy())
            .prop_map(|entries| Record::Map(entries.into_iter().collect())),
        entries_strategy(nested_record_strategy())
            .prop_map(|entries| Record::Object(entries.into_iter().collect::<Object>())),
        prop::collection::vec(nested_record_strategy(), 0..4).prop_map(Record::List),
    ]
}

fn leaf_count(record: &Record) -> usize {
    match record {
        Record::Map(map) => map.values().map(leaf_count).sum(),
        Record::List(list) => list.len(),
        _ => 0,
    }
}

// ── Path Properties ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_path_display_round_trip(segments in path_strategy()) {
        let text = segments.join(".");
        let path = Path::parse(&text);

        prop_assert_eq!(path.segments(), segments.as_slice());
        prop_assert_eq!(path.to_string(), text);
    }

    #[test]
    fn prop_set_then_get(segments in path_strategy(), value in scalar_strategy()) {
        let mut root = map! {};
        let path = segments.join(".");

        path::set(&mut root, path.as_str(), value.clone(), Container::Map).unwrap();

        prop_assert_eq!(path::get(&root, path.as_str()).unwrap(), Some(&value));
        prop_assert!(path::has(&root, path.as_str()).unwrap());
    }

    #[test]
    fn prop_set_then_get_on_nested_roots(
        root in root_strategy(),
        target in tree_path_strategy(),
        sibling in tree_path_strategy(),
        value in scalar_strategy(),
        assoc in any::<bool>(),
    ) {
        let path = target.join(".");
        let other = sibling.join(".");
        let before = path::get(&root, other.as_str()).map(|found| found.cloned());

        let mut updated = root.clone();
        let written = path::set(
            &mut updated,
            path.as_str(),
            value.clone(),
            Container::from_assoc(assoc),
        );

        if written.is_ok() {
            prop_assert_eq!(path::get(&updated, path.as_str()).unwrap(), Some(&value));

            let overlaps = target.starts_with(&sibling) || sibling.starts_with(&target);
            if !overlaps {
                let after = path::get(&updated, other.as_str()).map(|found| found.cloned());
                prop_assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn prop_null_short_circuits(segments in path_strategy()) {
        let path = segments.join(".");
        prop_assert_eq!(path::get(&Record::Null, path.as_str()).unwrap(), None);
    }

    #[test]
    fn prop_unset_is_idempotent(segments in path_strategy(), value in scalar_strategy()) {
        let mut root = map! {};
        let path = segments.join(".");
        path::set(&mut root, path.as_str(), value.clone(), Container::Object).unwrap();

        prop_assert_eq!(path::unset(&mut root, path.as_str()).unwrap(), Some(value));
        let after_first = root.clone();

        prop_assert_eq!(path::unset(&mut root, path.as_str()).unwrap(), None);
        prop_assert_eq!(&root, &after_first);
        prop_assert_eq!(path::get(&root, path.as_str()).unwrap(), None);
    }
}

// ── Search Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_binary_search_agrees_with_membership(
        mut sequence in prop::collection::vec(-50i64..50, 0..40),
        target in -60i64..60,
    ) {
        sequence.sort();
        let result = binary_search_by(&sequence, &target, |element, target| element.cmp(target));

        prop_assert_eq!(result.found, sequence.contains(&target));
        prop_assert!(result.position <= sequence.len());

        if result.found {
            prop_assert_eq!(sequence[result.position], target);
        } else {
            prop_assert!(sequence[..result.position].iter().all(|value| *value < target));
            prop_assert!(sequence[result.position..].iter().all(|value| *value > target));
        }
    }

    #[test]
    fn prop_binary_search_records(
        mut values in prop::collection::vec(any::<i32>(), 0..30),
        target in any::<i32>(),
    ) {
        values.sort();
        values.dedup();
        let sequence: Vec<Record> = values.iter().copied().map(Record::from).collect();
        let result = binary_search_records(&sequence, &Record::from(target));

        prop_assert_eq!(result.into_result(), values.binary_search(&target));
    }
}

#[test]
fn binary_search_documented_cases() {
    let sequence = vec![1i64, 3, 5, 7, 9];
    let search = |target: i64| binary_search_by(&sequence, &target, |e, t| e.cmp(t));

    assert_eq!(search(5), SearchResult::found(2));
    assert_eq!(search(6), SearchResult::not_found(3));
}

// ── Grouping Properties ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_group_by_keeps_every_record(
        records in prop::collection::vec(flat_record_strategy(), 0..20),
    ) {
        let grouped = group::group_by(records.clone(), &["a".into(), "b".into()]).unwrap();
        prop_assert_eq!(leaf_count(&grouped), records.len());
    }

    #[test]
    fn prop_group_keys_follow_first_occurrence(
        keys in prop::collection::vec("[x-z]", 1..20),
    ) {
        let records: Vec<Record> = keys.iter().map(|key| map! { "k" => key.as_str() }).collect();
        let grouped = group::group_by(records, &["k".into()]).unwrap();

        let mut expected: Vec<&String> = Vec::new();
        for key in &keys {
            if !expected.contains(&key) {
                expected.push(key);
            }
        }

        let actual: Vec<&String> = grouped.as_map().unwrap().keys().collect();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn group_by_documented_case() {
    let records = vec![
        map! { "type" => "animal", "color" => "red" },
        map! { "type" => "animal", "color" => "green" },
        map! { "type" => "robot", "color" => "red" },
    ];
    let grouped = group::group_by(records.clone(), &["type".into(), "color".into()]).unwrap();

    assert_eq!(
        grouped,
        map! {
            "animal" => map! {
                "red" => list![records[0].clone()],
                "green" => list![records[1].clone()],
            },
            "robot" => map! { "red" => list![records[2].clone()] },
        }
    );
}

// ── Extraction Properties ───────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_fields_has_one_entry_per_key(
        record in flat_record_strategy(),
        keys in prop::collection::hash_set("[a-h]", 0..8),
    ) {
        let keys: Vec<String> = keys.into_iter().collect();
        let result = extract::fields(&record, &keys, &Record::Null).unwrap();

        prop_assert_eq!(result.len(), keys.len());
        prop_assert!(result.keys().eq(keys.iter()));
    }

    #[test]
    fn prop_only_is_subset(
        record in flat_record_strategy(),
        keys in prop::collection::vec("[a-h]", 0..8),
    ) {
        let picked = extract::only(&record, &keys).unwrap();
        let source = record.as_map().unwrap();

        for (key, value) in picked.as_map().unwrap() {
            prop_assert!(keys.contains(key));
            prop_assert_eq!(source.get(key), Some(value));
        }
    }
}
