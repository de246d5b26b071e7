// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module provides the [CoverageMap] used during the greedy search.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use common::{BitArray, UVec, BIT_MASK, BIT_SHIFT};
use pairs::{Pair, PairList, ValidPairs};

#[cfg(test)]
mod test_map;

/// Tracks which valid pairs the chosen rows have covered so far.
///
/// Create one per search with [CoverageMap::new], score candidate rows with
/// [CoverageMap::score_row] and commit the winner of each iteration with
/// [CoverageMap::set_covered_row]. The search is done once
/// [CoverageMap::is_covered] returns true.
#[derive(Clone)]
pub struct CoverageMap {
    /// This is the collection of bit arrays.
    ///
    /// A set bit means the pair no longer counts as new: either a chosen row
    /// covered it or pruning excluded it from the universe.
    pub map: UVec<BitArray>,

    /// The number of valid pairs left to cover.
    pub uncovered: usize,
}

impl CoverageMap {
    /// Create a new [CoverageMap] over the pruned universe.
    ///
    /// The excluded pairs start out marked, so only valid pairs are ever
    /// counted. Rows of a constraint-valid suite cannot reach them anyway, as
    /// each exclusion is decidable within the two parameters of its pair.
    pub fn new(valid: &ValidPairs) -> Self {
        let mut map = UVec::with_capacity(valid.bits.len());
        for &word in valid.bits.iter() {
            map.push(!word);
        }
        Self { map, uncovered: valid.valid_count }
    }

    /// Returns true iff all valid pairs are covered.
    #[inline]
    pub fn is_covered(&self) -> bool {
        self.uncovered == 0
    }

    #[inline]
    fn get(&self, pair_id: usize) -> bool {
        self.map[pair_id >> BIT_SHIFT] & (1 << (pair_id & BIT_MASK)) != 0
    }

    /// Count how many new pairs the row would cover.
    ///
    /// The row must be complete: every cell bound.
    #[inline]
    pub fn score_row(&self, pair_list: &PairList, row: &[usize]) -> usize {
        let mut score = 0;
        for (scope_index, &(p, q)) in pair_list.scopes.iter().enumerate() {
            if !self.get(pair_list.id_at(scope_index, row[p], row[q])) {
                score += 1;
            }
        }
        score
    }

    /// Mark the pairs of the row as covered and return how many were new.
    pub fn set_covered_row(&mut self, pair_list: &PairList, row: &[usize]) -> usize {
        let mut newly_covered = 0;
        for (scope_index, &(p, q)) in pair_list.scopes.iter().enumerate() {
            if self.set_index(pair_list.id_at(scope_index, row[p], row[q])) {
                newly_covered += 1;
            }
        }
        newly_covered
    }

    /// Sets the given pair. If the pair counted as new, decrease
    /// [CoverageMap::uncovered] and return `true`.
    #[inline]
    pub fn set_index(&mut self, pair_id: usize) -> bool {
        let array = &mut self.map[pair_id >> BIT_SHIFT];
        let bit_index = 1 << (pair_id & BIT_MASK);
        if *array & bit_index == 0 {
            *array |= bit_index;
            self.uncovered -= 1;
            true
        } else {
            false
        }
    }

    /// The valid pairs not covered yet, in pair id order.
    pub fn uncovered_pairs(&self, pair_list: &PairList) -> Vec<Pair> {
        let mut result = Vec::with_capacity(self.uncovered);
        for pair_id in 0..pair_list.len() {
            if !self.get(pair_id) {
                result.push(pair_list.decode(pair_id));
            }
        }
        result
    }
}
