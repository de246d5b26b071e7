// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use common::u_vec;
use space::parse_constrained;

use super::*;

#[test]
fn test_scope_layout_3() {
    let list = PairList::new(&u_vec![3, 3, 2]);
    assert_eq!(list.scopes, u_vec![(0, 1), (0, 2), (1, 2)]);
    assert_eq!(list.offsets, u_vec![0, 9, 15, 21]);
    assert_eq!(list.len(), 21);
    assert_eq!(list.scope_index(0, 1), 0);
    assert_eq!(list.scope_index(0, 2), 1);
    assert_eq!(list.scope_index(1, 2), 2);
}

#[test]
fn test_scope_layout_5() {
    let list = PairList::new(&u_vec![2, 2, 2, 2, 2]);
    assert_eq!(
        list.scopes,
        u_vec![(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4),]
    );
    assert_eq!(list.scope_count(), 10);
    assert_eq!(list.len(), 40);

    for (index, &(p, q)) in list.scopes.iter().enumerate() {
        assert_eq!(list.scope_index(p, q), index);
    }
}

#[test]
fn test_tiny_spaces() {
    assert_eq!(PairList::new(&u_vec![4]).len(), 0);
    assert!(PairList::new(&UVec::new()).is_empty());
}

#[test]
fn test_pair_ids_round_trip() {
    let list = PairList::new(&u_vec![3, 3, 2]);
    assert_eq!(list.pair_id(0, 0, 1, 0), 0);
    assert_eq!(list.pair_id(0, 2, 1, 2), 8);
    assert_eq!(list.pair_id(0, 0, 2, 1), 10);
    assert_eq!(list.pair_id(1, 2, 2, 1), 20);

    for pair_id in 0..list.len() {
        let pair = list.decode(pair_id);
        assert!(pair.first_parameter < pair.second_parameter);
        assert!(pair.first_value < list.levels[pair.first_parameter]);
        assert!(pair.second_value < list.levels[pair.second_parameter]);
        assert_eq!(
            list.pair_id(pair.first_parameter, pair.first_value, pair.second_parameter, pair.second_value),
            pair_id
        );
    }
}

#[test]
fn test_prune_without_constraints() {
    let space = parse_constrained(
        "Browser: Chrome, Firefox, Safari;\nOS: Windows, Mac, Linux;\nScreenSize: 1920x1080, 1366x768;",
    )
    .unwrap();
    let list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &list);

    assert_eq!(valid.valid_count, 21);
    assert!((0..list.len()).all(|pair_id| valid.is_valid(pair_id)));
    assert!(valid.empty_scopes(&list).is_empty());
}

#[test]
fn test_prune_excludes_constrained_pairs() {
    let space = parse_constrained(
        "Format: VST3, AUv3, DesktopStandAlone;\nDAW: Logic, ProTools, Ableton;\n\n\
         IF Format = 'DesktopStandAlone' THEN DAW must be nil\n\
         IF Format = 'VST3' THEN DAW must not be nil",
    )
    .unwrap();
    let list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &list);

    // DesktopStandAlone can pair with no DAW at all; the VST3 rule excludes nothing.
    assert!(!valid.is_valid(list.pair_id(0, 2, 1, 0)));
    assert!(!valid.is_valid(list.pair_id(0, 2, 1, 1)));
    assert!(!valid.is_valid(list.pair_id(0, 2, 1, 2)));
    assert!(valid.is_valid(list.pair_id(0, 0, 1, 0)));
    assert_eq!(valid.valid_count, 6);
    assert!(valid.empty_scopes(&list).is_empty());
}

#[test]
fn test_prune_skips_unrelated_scopes() {
    let space = parse_constrained("a: 0, 1;\nb: 0, 1;\nc: 0, 1;\n\nIF a = '0' THEN c must be '1'").unwrap();
    let list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &list);

    assert!(!valid.is_valid(list.pair_id(0, 0, 2, 0)));
    assert!(valid.is_valid(list.pair_id(0, 0, 1, 0)));
    assert!(valid.is_valid(list.pair_id(1, 0, 2, 0)));
    assert_eq!(valid.valid_count, 11);
}

#[test]
fn test_prune_can_empty_a_scope() {
    let space = parse_constrained(
        "a: only;\nb: 0, 1;\n\n\
         IF a = 'only' THEN b must be nil\n\
         IF a = 'only' THEN b must not be nil",
    )
    .unwrap();
    let list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &list);

    assert_eq!(valid.valid_count, 0);
    assert_eq!(valid.empty_scopes(&list), vec![(0, 1)]);
}

#[test]
fn test_describe() {
    let space = parse_constrained("Format: VST3, AUv3, DesktopStandAlone;\nDAW: Logic, ProTools, Ableton;").unwrap();
    let list = PairList::new(&space.sub_space.levels);
    let pair = list.decode(list.pair_id(0, 2, 1, 0));
    assert_eq!(pair.describe(&space.sub_space), "Format=DesktopStandAlone, DAW=Logic");
}
