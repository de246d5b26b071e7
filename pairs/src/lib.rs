// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the [PairList] and [ValidPairs] structs.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use common::{u_vec, BitArray, UVec, BIT_MASK, BIT_SHIFT, DONT_CARE};
use space::{ConstrainedSpace, Space};

#[cfg(test)]
mod test_gen;

/// One coverable combination of two bindings, decoded from a pair id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Pair {
    /// The lower parameter id.
    pub first_parameter: usize,
    /// The value id within the first parameter's domain.
    pub first_value: usize,
    /// The higher parameter id.
    pub second_parameter: usize,
    /// The value id within the second parameter's domain.
    pub second_value: usize,
}

impl Pair {
    /// Renders the pair with the names the space holds.
    pub fn describe(&self, space: &Space) -> String {
        format!(
            "{}={}, {}={}",
            space.parameter_names[self.first_parameter],
            space.value_text(self.first_parameter, self.first_value),
            space.parameter_names[self.second_parameter],
            space.value_text(self.second_parameter, self.second_value),
        )
    }
}

/// This struct maps every two-parameter value combination to a dense pair id.
///
/// The scopes (unordered parameter pairs) are ordered lexicographically, and
/// within the block of a scope `(p, q)` the id is `offset + vp * levels[q] + vq`.
///
/// Should not change after [PairList::new] creates it.
#[derive(Clone)]
pub struct PairList {
    /// The parameter pairs `(p, q)` with `p < q`, in lexicographic order.
    pub scopes: UVec<(usize, usize)>,

    /// The pair id at which the block of each scope starts.
    ///
    /// Holds one extra entry, so `offsets[k + 1]` is the end of block `k` and
    /// the last entry is the size of the whole pair universe.
    pub offsets: UVec<usize>,

    /// The levels of the parameters the list was built for.
    pub levels: UVec<usize>,

    row_starts: UVec<usize>,
}

impl PairList {
    /// Create a new [PairList] for the given levels.
    pub fn new(levels: &UVec<usize>) -> Self {
        let parameter_count = levels.len();
        let scope_count = parameter_count.saturating_sub(1) * parameter_count / 2;
        let mut scopes = UVec::with_capacity(scope_count);
        let mut offsets = UVec::with_capacity(scope_count + 1);
        let mut row_starts = UVec::with_capacity(parameter_count);

        let mut offset = 0;
        for p in 0..parameter_count {
            row_starts.push(scopes.len());
            for q in p + 1..parameter_count {
                scopes.push((p, q));
                offsets.push(offset);
                offset += levels[p] * levels[q];
            }
        }
        offsets.push(offset);

        Self { scopes, offsets, levels: levels.clone(), row_starts }
    }

    /// The number of pairs in the unpruned universe.
    pub fn len(&self) -> usize {
        self.offsets[self.offsets.len() - 1]
    }

    /// Returns true if the universe holds no pairs (fewer than two parameters).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The number of scopes.
    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// The index of the scope `(p, q)`. Requires `p < q`.
    pub fn scope_index(&self, p: usize, q: usize) -> usize {
        debug_assert!(p < q && q < self.levels.len());
        self.row_starts[p] + q - p - 1
    }

    /// The pair id for the values at the given scope.
    pub fn id_at(&self, scope_index: usize, first_value: usize, second_value: usize) -> usize {
        self.offsets[scope_index] + first_value * self.levels[self.scopes[scope_index].1] + second_value
    }

    /// The pair id of `(p, vp)` combined with `(q, vq)`. Requires `p < q`.
    pub fn pair_id(&self, p: usize, vp: usize, q: usize, vq: usize) -> usize {
        self.id_at(self.scope_index(p, q), vp, vq)
    }

    /// Decode a pair id back into its two bindings.
    pub fn decode(&self, pair_id: usize) -> Pair {
        debug_assert!(pair_id < self.len());
        let scope_index = self.offsets.as_slice().partition_point(|&offset| offset <= pair_id) - 1;
        let (first_parameter, second_parameter) = self.scopes[scope_index];
        let block_offset = pair_id - self.offsets[scope_index];
        let second_levels = self.levels[second_parameter];
        Pair {
            first_parameter,
            first_value: block_offset / second_levels,
            second_parameter,
            second_value: block_offset % second_levels,
        }
    }
}

/// The pair universe after constraint pruning.
///
/// A pair is excluded exactly when binding just its two parameters already
/// violates a constraint decidable within those two parameters. Constraints
/// reaching outside the scope exclude nothing here; the solver checks its full
/// rows against them instead.
#[derive(Clone)]
pub struct ValidPairs {
    /// One bit per pair id; a set bit marks a pair kept by the pruning.
    pub bits: UVec<BitArray>,

    /// The number of set bits.
    pub valid_count: usize,
}

impl ValidPairs {
    /// Prune the pair universe of the given space.
    ///
    /// Walks every scope once, testing each candidate pair as a two-binding
    /// row against the constraints scoped within that parameter pair. Pruning
    /// happens here alone; the search that follows only consumes the result.
    pub fn prune(space: &ConstrainedSpace, pair_list: &PairList) -> Self {
        let word_count = (pair_list.len() >> BIT_SHIFT) + 1;
        let mut result = Self { bits: u_vec![0; word_count], valid_count: 0 };

        let mut row = vec![DONT_CARE; space.sub_space.len()];
        for (scope_index, &(p, q)) in pair_list.scopes.iter().enumerate() {
            let applicable: Vec<_> = space
                .constraints()
                .iter()
                .filter(|constraint| in_scope(constraint.scope(&space.sub_space), p, q))
                .collect();

            let mut pair_id = pair_list.offsets[scope_index];
            for vp in 0..pair_list.levels[p] {
                row[p] = vp;
                for vq in 0..pair_list.levels[q] {
                    row[q] = vq;
                    if applicable.iter().all(|constraint| constraint.satisfied_by(&space.sub_space, &row)) {
                        result.set(pair_id);
                    }
                    pair_id += 1;
                }
            }
            row[p] = DONT_CARE;
            row[q] = DONT_CARE;
        }
        result
    }

    fn set(&mut self, pair_id: usize) {
        self.bits[pair_id >> BIT_SHIFT] |= 1 << (pair_id & BIT_MASK);
        self.valid_count += 1;
    }

    /// Returns true if pruning kept the pair.
    #[inline]
    pub fn is_valid(&self, pair_id: usize) -> bool {
        self.bits[pair_id >> BIT_SHIFT] & (1 << (pair_id & BIT_MASK)) != 0
    }

    /// The scopes whose blocks pruning emptied out entirely.
    ///
    /// A scope listed here makes generation impossible: no row can bind its
    /// two parameters without violating a constraint.
    pub fn empty_scopes(&self, pair_list: &PairList) -> Vec<(usize, usize)> {
        let mut result = Vec::new();
        for (scope_index, &scope) in pair_list.scopes.iter().enumerate() {
            if !(pair_list.offsets[scope_index]..pair_list.offsets[scope_index + 1]).any(|pair_id| self.is_valid(pair_id)) {
                result.push(scope);
            }
        }
        result
    }
}

fn in_scope(scope: Option<(usize, usize)>, p: usize, q: usize) -> bool {
    match scope {
        Some((condition, action)) => (condition == p && action == q) || (condition == q && action == p),
        None => false,
    }
}
