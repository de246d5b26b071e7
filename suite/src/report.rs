// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use cover::CoverageMap;
use pairs::{Pair, PairList, ValidPairs};
use space::Space;

use crate::TestSuite;

/// Aggregate statistics of a finished generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    /// The number of test cases in the suite.
    pub test_case_count: usize,

    /// The number of parameters in the space.
    pub parameter_count: usize,

    /// The size of the full Cartesian product of the parameter domains.
    pub total_combinations: usize,

    /// The number of valid pairs after pruning.
    pub total_pairs: usize,

    /// The covered valid pairs as a percentage of [Summary::total_pairs].
    pub coverage_percent: f64,
}

/// Computes the [Summary] of the given suite.
///
/// A space without valid pairs is reported as fully covered.
pub fn summarize(suite: &TestSuite, space: &Space, valid: &ValidPairs) -> Summary {
    let total_pairs = valid.valid_count;
    let coverage_percent = if total_pairs == 0 {
        100.0
    } else {
        suite.covered_pairs() as f64 * 100.0 / total_pairs as f64
    };
    Summary {
        test_case_count: suite.len(),
        parameter_count: space.len(),
        total_combinations: space.combination_count(),
        total_pairs,
        coverage_percent,
    }
}

/// Attributes every covered pair to the first row of the suite covering it.
///
/// The attribution is recomputed by replaying the rows against a fresh [CoverageMap], so edited
/// suites are attributed by their current rows rather than by the counts recorded during the
/// search. The result is index aligned with [TestSuite::rows].
pub fn attribute_pairs(suite: &TestSuite, pair_list: &PairList, valid: &ValidPairs) -> Vec<Vec<Pair>> {
    let mut map = CoverageMap::new(valid);
    let mut result = Vec::with_capacity(suite.rows.len());
    for row in suite.rows.iter() {
        let mut owned = Vec::new();
        for (scope_index, &(first, second)) in pair_list.scopes.iter().enumerate() {
            let pair_id = pair_list.id_at(scope_index, row[first], row[second]);
            if map.set_index(pair_id) {
                owned.push(pair_list.decode(pair_id));
            }
        }
        result.push(owned);
    }
    result
}
