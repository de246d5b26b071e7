// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a single-threaded implementation of the greedy pairwise generator.
//!
//! Every round scans the candidate test cases in enumeration order and accepts the first one
//! covering the most still-uncovered pairs, until every valid pair is covered or no candidate
//! covers a new one.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::cmp::min;
use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use common::{sub_time_it, u_vec, UVec};
use cover::CoverageMap;
use pairs::{PairList, ValidPairs};
use space::ConstrainedSpace;
use suite::{Shortfall, ShortfallReason, TestSuite};


/// This trait allows for the switching of the generator implementations.
pub trait CoverSolver {
    /// Used for debugging purposes.
    const NAME: &'static str;

    /// Generates a pairwise test suite for the given space.
    fn solve(space: &ConstrainedSpace, budget: &Budget) -> Result<TestSuite, SolveError>;
}

/// Limits how long a search may run.
///
/// The limit is checked between rounds, so a row scan in progress always finishes first.
#[derive(Clone, Debug, Default)]
pub struct Budget {
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl Budget {
    /// Creates a [Budget] without any limit.
    pub fn none() -> Self {
        Self::default()
    }

    /// Creates a [Budget] spent once the given duration has passed.
    pub fn timeout(limit: Duration) -> Self {
        Self { deadline: Some(Instant::now() + limit), cancelled: None }
    }

    /// Creates a [Budget] spent once the given flag is raised.
    pub fn cancel_flag(flag: Arc<AtomicBool>) -> Self {
        Self { deadline: None, cancelled: Some(flag) }
    }

    /// Returns true if the search should stop at the next opportunity.
    pub fn is_spent(&self) -> bool {
        if let Some(deadline) = self.deadline {
            if deadline <= Instant::now() {
                return true;
            }
        }
        if let Some(flag) = &self.cancelled {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        false
    }
}

/// The reasons a search cannot start for a space.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The constraints exclude every value combination of the listed parameter pairs.
    NoValidPairs {
        /// The affected parameter pairs, by name.
        scopes: Vec<(String, String)>,
    },
}

impl Display for SolveError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveError::NoValidPairs { scopes } => {
                let list: Vec<String> = scopes.iter().map(|(first, second)| format!("{} and {}", first, second)).collect();
                write!(formatter, "the constraints exclude every value combination of {}", list.join(", "))
            }
        }
    }
}

/// The immutable inputs of a search, shared by the generator implementations.
pub struct Search {
    /// The pair universe of the space.
    pub pair_list: PairList,

    /// The pairs the constraints allow.
    pub valid: ValidPairs,

    /// The candidate test cases, in enumeration order.
    pub candidates: UVec<UVec<usize>>,
}

impl Search {
    /// Builds the pair universe, prunes it, and enumerates the candidate rows.
    ///
    /// Returns an error if the constraints leave some parameter pair without any valid
    /// value combination, as no suite can cover such a space.
    pub fn prepare(space: &ConstrainedSpace) -> Result<Self, SolveError> {
        let pair_list = PairList::new(&space.sub_space.levels);
        let valid = ValidPairs::prune(space, &pair_list);

        let empty = valid.empty_scopes(&pair_list);
        if !empty.is_empty() {
            let names = &space.sub_space.parameter_names;
            let scopes = empty.iter().map(|&(p, q)| (names[p].clone(), names[q].clone())).collect();
            return Err(SolveError::NoValidPairs { scopes });
        }

        let candidates = enumerate_candidates(space);
        Ok(Self { pair_list, valid, candidates })
    }
}

/// Enumerates the Cartesian product of the domains and keeps the rows the constraints allow.
///
/// The last parameter cycles fastest, and the order never changes between runs.
pub fn enumerate_candidates(space: &ConstrainedSpace) -> UVec<UVec<usize>> {
    let levels = &space.sub_space.levels;
    let mut result = UVec::new();
    if levels.is_empty() {
        return result;
    }

    let mut row = u_vec![0; levels.len()];
    loop {
        if space.check_row(row.as_slice()) {
            result.push(row.clone());
        }

        let mut index = levels.len();
        loop {
            if index == 0 {
                return result;
            }
            index -= 1;
            row[index] += 1;
            if row[index] < levels[index] {
                break;
            }
            row[index] = 0;
        }
    }
}

/// Runs the greedy rounds on a single thread.
///
/// Each round accepts the candidate covering the most uncovered pairs, with the earliest
/// candidate winning a tie. A suite missing pairs carries a [Shortfall] naming them.
pub fn run_serial(search: &Search, budget: &Budget) -> TestSuite {
    let mut map = CoverageMap::new(&search.valid);
    let mut suite = TestSuite::new_empty();

    while !map.is_covered() {
        if budget.is_spent() {
            suite.shortfall = Some(Shortfall {
                reason: ShortfallReason::Cancelled,
                missed: map.uncovered_pairs(&search.pair_list),
            });
            return suite;
        }

        // No row covers more pairs than it has scopes or than are left.
        let target = min(search.pair_list.scope_count(), map.uncovered);
        let mut best_score = 0;
        let mut best_candidate = 0;
        for (candidate, row) in search.candidates.iter().enumerate() {
            let score = map.score_row(&search.pair_list, row.as_slice());
            if best_score < score {
                best_score = score;
                best_candidate = candidate;
                if score == target {
                    break;
                }
            }
        }

        if best_score == 0 {
            suite.shortfall = Some(Shortfall {
                reason: ShortfallReason::CandidatesExhausted,
                missed: map.uncovered_pairs(&search.pair_list),
            });
            return suite;
        }

        let row = search.candidates[best_candidate].clone();
        let newly_covered = map.set_covered_row(&search.pair_list, row.as_slice());
        debug_assert_eq!(newly_covered, best_score);
        suite.push(row, newly_covered);
    }

    suite
}

/// The single-threaded greedy generator.
pub struct GreedySolver;

impl CoverSolver for GreedySolver {
    const NAME: &'static str = "serial";

    fn solve(space: &ConstrainedSpace, budget: &Budget) -> Result<TestSuite, SolveError> {
        let search = sub_time_it!(Search::prepare(space), "preparation")?;
        Ok(sub_time_it!(run_serial(&search, budget), "serial scan"))
    }
}
