// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use common::{u_vec, UVec};
use pairs::{Pair, PairList, ValidPairs};
use space::parse_constrained;

use crate::{attribute_pairs, summarize, Shortfall, ShortfallReason, TestSuite};

fn cube_suite() -> (space::ConstrainedSpace, PairList, ValidPairs, TestSuite) {
    let space = parse_constrained("a: 0, 1;\nb: 0, 1;\nc: 0, 1;").unwrap();
    let pair_list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &pair_list);

    let mut suite = TestSuite::new_empty();
    suite.push(u_vec![0, 0, 0], 3);
    suite.push(u_vec![1, 1, 1], 3);
    suite.push(u_vec![0, 1, 1], 2);
    suite.push(u_vec![1, 0, 1], 2);
    suite.push(u_vec![1, 1, 0], 2);
    (space, pair_list, valid, suite)
}

#[test]
fn test_suite_basics() {
    let mut suite = TestSuite::new_empty();
    assert!(suite.is_empty());
    assert!(suite.is_complete());
    assert_eq!(suite.covered_pairs(), 0);

    suite.push(u_vec![0, 1], 1);
    suite.push(u_vec![1, 0], 1);
    assert!(!suite.is_empty());
    assert_eq!(suite.len(), 2);
    assert_eq!(suite.covered_pairs(), 2);

    suite.shortfall = Some(Shortfall { reason: ShortfallReason::Cancelled, missed: Vec::new() });
    assert!(!suite.is_complete());
}

#[test]
fn test_summary_full_coverage() {
    let (space, _, valid, suite) = cube_suite();
    let summary = summarize(&suite, &space.sub_space, &valid);
    assert_eq!(summary.test_case_count, 5);
    assert_eq!(summary.parameter_count, 3);
    assert_eq!(summary.total_combinations, 8);
    assert_eq!(summary.total_pairs, 12);
    assert_eq!(summary.coverage_percent, 100.0);
}

#[test]
fn test_summary_partial_coverage() {
    let (space, _, valid, mut suite) = cube_suite();
    while suite.len() > 2 {
        suite.rows.remove(suite.rows.len() - 1);
        suite.new_pair_counts.remove(suite.new_pair_counts.len() - 1);
    }
    let summary = summarize(&suite, &space.sub_space, &valid);
    assert_eq!(summary.test_case_count, 2);
    assert_eq!(summary.total_pairs, 12);
    assert_eq!(summary.coverage_percent, 50.0);
}

#[test]
fn test_summary_without_pairs() {
    let space = parse_constrained("a: 0, 1;").unwrap();
    let pair_list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &pair_list);

    let summary = summarize(&TestSuite::new_empty(), &space.sub_space, &valid);
    assert_eq!(summary.total_pairs, 0);
    assert_eq!(summary.coverage_percent, 100.0);
}

#[test]
fn test_attribution_first_coverer() {
    let (_, pair_list, valid, mut suite) = cube_suite();
    // A repeated row owns nothing.
    suite.push(u_vec![0, 0, 0], 0);

    let attribution = attribute_pairs(&suite, &pair_list, &valid);
    let counts: Vec<usize> = attribution.iter().map(Vec::len).collect();
    assert_eq!(counts, vec![3, 3, 2, 2, 2, 0]);

    let first = Pair { first_parameter: 0, first_value: 0, second_parameter: 1, second_value: 0 };
    assert!(attribution[0].contains(&first));
    assert!(!attribution[5].contains(&first));

    // The pair (b=1, c=1) first appears in the second row, so the third does not own it.
    let shared = Pair { first_parameter: 1, first_value: 1, second_parameter: 2, second_value: 1 };
    assert!(attribution[1].contains(&shared));
    assert!(!attribution[2].contains(&shared));
}

#[test]
fn test_attribution_skips_excluded_pairs() {
    let space = parse_constrained(
        "Format: VST3, AUv3, DesktopStandAlone;\nDAW: Logic, ProTools, Ableton;\n\n\
         IF Format = 'DesktopStandAlone' THEN DAW must be nil",
    )
    .unwrap();
    let pair_list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &pair_list);

    let mut suite = TestSuite::new_empty();
    suite.push(u_vec![2, 0], 0);
    suite.push(u_vec![0, 0], 1);

    let attribution = attribute_pairs(&suite, &pair_list, &valid);
    assert!(attribution[0].is_empty());
    let owned = Pair { first_parameter: 0, first_value: 0, second_parameter: 1, second_value: 0 };
    assert_eq!(attribution[1], vec![owned]);
}

#[test]
fn test_attribution_follows_edits() {
    let (_, pair_list, valid, mut suite) = cube_suite();
    // Move the first row to the back; the recomputation hands its unique pairs to earlier rows.
    let front: UVec<usize> = suite.rows.remove(0);
    suite.rows.push(front);

    let attribution = attribute_pairs(&suite, &pair_list, &valid);
    let counts: Vec<usize> = attribution.iter().map(Vec::len).collect();
    assert_eq!(counts.iter().sum::<usize>(), 12);
    assert_eq!(counts, vec![3, 2, 2, 2, 3]);
}

#[test]
fn test_shortfall_description() {
    let space = parse_constrained("a: x, y;\nb: x, y;").unwrap();
    let missed = vec![Pair { first_parameter: 0, first_value: 0, second_parameter: 1, second_value: 1 }];

    let shortfall = Shortfall { reason: ShortfallReason::CandidatesExhausted, missed: missed.clone() };
    assert_eq!(
        shortfall.describe(&space.sub_space),
        "1 pairs left uncovered because no remaining candidate covers a new pair: (a=x, b=y)"
    );

    let shortfall = Shortfall { reason: ShortfallReason::Cancelled, missed };
    assert!(shortfall.describe(&space.sub_space).contains("the run was cancelled"));
}
