// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use pairs::{PairList, ValidPairs};
use space::parse_constrained;

use crate::CoverageMap;

fn unconstrained_cube() -> (PairList, ValidPairs) {
    let space = parse_constrained("a: 0, 1;\nb: 0, 1;\nc: 0, 1;").unwrap();
    let pair_list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &pair_list);
    (pair_list, valid)
}

#[test]
fn test_scoring_and_covering() {
    let (pair_list, valid) = unconstrained_cube();
    let mut map = CoverageMap::new(&valid);
    assert_eq!(map.uncovered, 12);
    assert!(!map.is_covered());

    let row = [0, 0, 0];
    assert_eq!(map.score_row(&pair_list, &row), 3);
    assert_eq!(map.set_covered_row(&pair_list, &row), 3);
    assert_eq!(map.uncovered, 9);

    // A repeat covers nothing new.
    assert_eq!(map.score_row(&pair_list, &row), 0);
    assert_eq!(map.set_covered_row(&pair_list, &row), 0);
    assert_eq!(map.uncovered, 9);

    // Only the scopes not already seen with these values count.
    assert_eq!(map.score_row(&pair_list, &[0, 0, 1]), 2);
}

#[test]
fn test_full_coverage() {
    let (pair_list, valid) = unconstrained_cube();
    let mut map = CoverageMap::new(&valid);

    for a in 0..2 {
        for b in 0..2 {
            for c in 0..2 {
                map.set_covered_row(&pair_list, &[a, b, c]);
            }
        }
    }

    assert!(map.is_covered());
    assert!(map.uncovered_pairs(&pair_list).is_empty());
}

#[test]
fn test_uncovered_pairs_listing() {
    let (pair_list, valid) = unconstrained_cube();
    let mut map = CoverageMap::new(&valid);
    map.set_covered_row(&pair_list, &[0, 0, 0]);

    let remaining = map.uncovered_pairs(&pair_list);
    assert_eq!(remaining.len(), 9);
    let covered = pair_list.decode(pair_list.pair_id(0, 0, 1, 0));
    assert!(!remaining.contains(&covered));
    let uncovered = pair_list.decode(pair_list.pair_id(0, 0, 1, 1));
    assert!(remaining.contains(&uncovered));
}

#[test]
fn test_excluded_pairs_never_count() {
    let space = parse_constrained(
        "Format: VST3, AUv3, DesktopStandAlone;\nDAW: Logic, ProTools, Ableton;\n\n\
         IF Format = 'DesktopStandAlone' THEN DAW must be nil",
    )
    .unwrap();
    let pair_list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &pair_list);
    let mut map = CoverageMap::new(&valid);

    assert_eq!(map.uncovered, 6);

    // The excluded rows contribute no score even if forced through.
    assert_eq!(map.score_row(&pair_list, &[2, 0]), 0);
    assert_eq!(map.set_covered_row(&pair_list, &[2, 0]), 0);
    assert_eq!(map.uncovered, 6);

    assert_eq!(map.set_covered_row(&pair_list, &[0, 0]), 1);
    assert_eq!(map.set_covered_row(&pair_list, &[0, 1]), 1);
    assert_eq!(map.set_covered_row(&pair_list, &[0, 2]), 1);
    assert_eq!(map.set_covered_row(&pair_list, &[1, 0]), 1);
    assert_eq!(map.set_covered_row(&pair_list, &[1, 1]), 1);
    assert_eq!(map.set_covered_row(&pair_list, &[1, 2]), 1);
    assert!(map.is_covered());
}

#[test]
fn test_set_index_reports_new_only_once() {
    let (pair_list, valid) = unconstrained_cube();
    let mut map = CoverageMap::new(&valid);

    let pair_id = pair_list.pair_id(1, 1, 2, 0);
    assert!(map.set_index(pair_id));
    assert!(!map.set_index(pair_id));
    assert_eq!(map.uncovered, 11);
}
