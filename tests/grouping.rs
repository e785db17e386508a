//! End-to-end grouping scenarios and property tests
//!
//! Exercises the public API the way a registration pipeline would: adapt a
//! batch, group it, and walk the groups in order. Property tests generate
//! random acyclic batches (dependencies only point at earlier entities,
//! plus references to codes outside the batch) and check the partition,
//! ordering, minimality, and determinism guarantees.

use proptest::prelude::*;
use std::collections::HashMap;
use taxis::{
    group_by_dependencies, group_samples, EntityCode, FnAdapter, GroupingError, NewSample,
};

type Entity = (String, Vec<String>);

fn adapter() -> impl taxis::EntityAdapter<Entity> {
    FnAdapter::new(
        |e: &Entity| EntityCode::new(e.0.clone()),
        |e: &Entity| e.1.iter().map(|d| EntityCode::new(d.as_str())).collect(),
    )
}

fn entity(code: &str, deps: &[&str]) -> Entity {
    (code.to_string(), deps.iter().map(|d| d.to_string()).collect())
}

#[test]
fn samples_with_container_and_parents_group_in_registration_order() {
    let samples = vec![
        NewSample::new("S1"),
        NewSample::new("S2").with_container("S1"),
        NewSample::new("S3").with_parents(["S1", "S2"]),
    ];

    let sequence = group_samples(samples).unwrap();
    let ids: Vec<Vec<&str>> = sequence
        .iter()
        .map(|group| group.iter().map(NewSample::identifier).collect())
        .collect();

    assert_eq!(ids, vec![vec!["S1"], vec!["S2"], vec!["S3"]]);
}

#[test]
fn external_reference_lands_in_first_group_with_independents() {
    let batch = vec![entity("A", &["X"]), entity("B", &[])];

    let sequence = group_by_dependencies(batch, &adapter()).unwrap();
    let codes: Vec<Vec<&str>> = sequence
        .iter()
        .map(|group| group.iter().map(|e| e.0.as_str()).collect())
        .collect();

    assert_eq!(codes, vec![vec!["A", "B"]]);
}

#[test]
fn duplicate_identifier_rejects_the_whole_batch() {
    let samples = vec![
        NewSample::new("S1"),
        NewSample::new("S1").with_container("S2"),
    ];

    let err = group_samples(samples).unwrap_err();
    assert_eq!(
        err,
        GroupingError::duplicate_identity(EntityCode::new("S1"))
    );
}

#[test]
fn two_entity_cycle_names_both_entities() {
    let batch = vec![entity("A", &["B"]), entity("B", &["A"])];

    let err = group_by_dependencies(batch, &adapter()).unwrap_err();
    assert_eq!(
        err,
        GroupingError::cyclic_dependency(vec![EntityCode::new("A"), EntityCode::new("B")])
    );
}

#[test]
fn empty_batch_yields_empty_sequence() {
    let sequence = group_by_dependencies(Vec::<Entity>::new(), &adapter()).unwrap();
    assert!(sequence.is_empty());
}

#[test]
fn wide_batch_with_shared_container() {
    // 100 samples in one container registered in the same submission:
    // container first, everything else in one big second group.
    let mut samples = vec![NewSample::new("BOX")];
    for i in 0..100 {
        samples.push(NewSample::new(format!("S{i}")).with_container("BOX"));
    }

    let sequence = group_samples(samples).unwrap();
    assert_eq!(sequence.len(), 2);
    assert_eq!(sequence.groups()[0].len(), 1);
    assert_eq!(sequence.groups()[1].len(), 100);
    assert_eq!(sequence.entity_count(), 101);
}

/// Batches whose in-batch dependencies only point at earlier entities
/// (hence acyclic), sprinkled with external codes (`X*` prefix) that match
/// nothing in the batch.
fn acyclic_batches() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::vec(prop::collection::vec(any::<prop::sample::Index>(), 0..4), 0..32)
        .prop_map(|raw| {
            raw.iter()
                .enumerate()
                .map(|(i, picks)| {
                    let deps = picks
                        .iter()
                        .map(|pick| {
                            let j = pick.index(i + 3);
                            if j < i {
                                format!("E{j}")
                            } else {
                                format!("X{j}")
                            }
                        })
                        .collect();
                    (format!("E{i}"), deps)
                })
                .collect()
        })
}

proptest! {
    #[test]
    fn grouping_partitions_the_input_exactly(batch in acyclic_batches()) {
        let input_codes: Vec<String> = batch.iter().map(|e| e.0.clone()).collect();
        let sequence = group_by_dependencies(batch, &adapter()).unwrap();

        let mut output_codes: Vec<String> = sequence
            .iter()
            .flat_map(|group| group.iter().map(|e| e.0.clone()))
            .collect();
        output_codes.sort();

        let mut expected = input_codes;
        expected.sort();
        prop_assert_eq!(output_codes, expected);
    }

    #[test]
    fn dependencies_always_land_in_strictly_earlier_groups(batch in acyclic_batches()) {
        let sequence = group_by_dependencies(batch.clone(), &adapter()).unwrap();

        let mut group_of: HashMap<&str, usize> = HashMap::new();
        for (g, group) in sequence.iter().enumerate() {
            for e in group {
                group_of.insert(e.0.as_str(), g);
            }
        }

        for (code, deps) in &batch {
            for dep in deps {
                if let Some(&dep_group) = group_of.get(dep.as_str()) {
                    prop_assert!(
                        dep_group < group_of[code.as_str()],
                        "{} in group {} not strictly before {} in group {}",
                        dep, dep_group, code, group_of[code.as_str()],
                    );
                }
            }
        }
    }

    #[test]
    fn entities_are_placed_in_their_earliest_feasible_group(batch in acyclic_batches()) {
        let sequence = group_by_dependencies(batch.clone(), &adapter()).unwrap();

        let mut group_of: HashMap<&str, usize> = HashMap::new();
        for (g, group) in sequence.iter().enumerate() {
            for e in group {
                group_of.insert(e.0.as_str(), g);
            }
        }

        for (code, deps) in &batch {
            let earliest = deps
                .iter()
                .filter_map(|dep| group_of.get(dep.as_str()))
                .max()
                .map_or(0, |&g| g + 1);
            prop_assert_eq!(group_of[code.as_str()], earliest);
        }
    }

    #[test]
    fn grouping_is_idempotent(batch in acyclic_batches()) {
        let first = group_by_dependencies(batch.clone(), &adapter()).unwrap();
        let second = group_by_dependencies(batch, &adapter()).unwrap();
        prop_assert_eq!(first, second);
    }
}
