//! Query Property Tests
//!
//! Laws that hold for any store contents:
//! - A record is selected iff some branch has all of its parameters true
//! - No branches selects the snapshot unchanged
//! - Limit never returns more than asked, and keeps the unlimited prefix
//! - Sorting permutes, never adds or drops

use proptest::prelude::*;
use repoquery::query::{Order, Parameter, QueryDescriptor, Sort, WrappedSortExtractor};
use repoquery::{DataStore, EngineConfig, Invocation, MemoryStore, OperatorContext, SelectOperation};
use serde_json::{json, Value};

fn store_of(ages: &[(i64, bool)]) -> MemoryStore<usize, Value> {
    let mut store = MemoryStore::new();
    for (i, (age, active)) in ages.iter().enumerate() {
        store.save(i, json!({"id": i, "age": age, "active": active}));
    }
    store
}

fn run(descriptor: QueryDescriptor, store: &MemoryStore<usize, Value>, invocation: &Invocation) -> Vec<Value> {
    SelectOperation::new(descriptor)
        .execute(store, &EngineConfig::default(), invocation)
        .unwrap()
}

fn records() -> impl Strategy<Value = Vec<(i64, bool)>> {
    prop::collection::vec((0i64..100, any::<bool>()), 0..24)
}

proptest! {
    #[test]
    fn or_of_ands(rows in records(), low in 0i64..100, high in 0i64..100) {
        let store = store_of(&rows);
        let context = OperatorContext::shared();
        // (age > low AND active) OR (age < high)
        let descriptor = QueryDescriptor::new()
            .with_branch(vec![
                Parameter::plain("age", vec![0], context.by_suffix("GreaterThan").unwrap()),
                Parameter::plain("active", vec![], context.by_suffix("True").unwrap()),
            ])
            .with_branch(vec![
                Parameter::plain("age", vec![1], context.by_suffix("LessThan").unwrap()),
            ]);
        let invocation = Invocation::with_values("findByAgeGreaterThanAndActiveTrueOrAgeLessThan", [json!(low), json!(high)]);

        let selected = run(descriptor, &store, &invocation);

        let expected: Vec<Value> = store
            .retrieve_all()
            .into_iter()
            .filter(|r| {
                let age = r["age"].as_i64().unwrap_or_default();
                let active = r["active"].as_bool().unwrap_or_default();
                (age > low && active) || age < high
            })
            .collect();
        prop_assert_eq!(selected, expected);
    }

    #[test]
    fn empty_branches_select_snapshot(rows in records()) {
        let store = store_of(&rows);
        let selected = run(QueryDescriptor::new(), &store, &Invocation::bare("findAll"));
        prop_assert_eq!(selected, store.retrieve_all());
    }

    #[test]
    fn limit_keeps_prefix(rows in records(), limit in 1usize..32) {
        let store = store_of(&rows);
        let all = run(QueryDescriptor::new(), &store, &Invocation::bare("findAll"));
        let limited = run(QueryDescriptor::new().with_limit(limit), &store, &Invocation::bare("findAll"));

        prop_assert_eq!(limited.len(), limit.min(rows.len()));
        prop_assert_eq!(&limited[..], &all[..limited.len()]);
    }

    #[test]
    fn sort_is_ordered_permutation(rows in records()) {
        let store = store_of(&rows);
        let descriptor = QueryDescriptor::new()
            .with_sort_extractor(WrappedSortExtractor::new(Sort::by(Order::asc("age"))));
        let sorted = run(descriptor, &store, &Invocation::bare("findAll"));

        prop_assert_eq!(sorted.len(), rows.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0]["age"].as_i64() <= pair[1]["age"].as_i64());
        }
        // stable: equal ages keep store order
        for pair in sorted.windows(2) {
            if pair[0]["age"] == pair[1]["age"] {
                prop_assert!(pair[0]["id"].as_u64() < pair[1]["id"].as_u64());
            }
        }
    }
}
