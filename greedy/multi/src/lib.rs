// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a multithreaded implementation of the greedy pairwise generator.
//!
//! The candidate scan of every round is split over a pool of persistent worker threads. The
//! reduction prefers the earliest candidate, so the result is identical to the one produced by
//! the single-threaded generator.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::cmp::{max, min};
use std::sync::Arc;

use common::sub_time_it;
use cover::CoverageMap;
use greedy_single::{run_serial, Budget, CoverSolver, Search, SolveError};
use space::ConstrainedSpace;
use suite::{Shortfall, ShortfallReason, TestSuite};

use crate::threads::{init_pool, Response, Work};

pub mod threads;


/// Runs the greedy rounds with the candidate scan spread over `thread_count` workers.
///
/// Every round broadcasts a snapshot of the coverage so far, collects the per-chunk winners in
/// worker order, and accepts the earliest candidate with the highest score.
pub fn run_pool(search: &Arc<Search>, budget: &Budget, thread_count: usize) -> TestSuite {
    let (senders, receivers) = init_pool(search, thread_count);
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

        let target = min(search.pair_list.scope_count(), map.uncovered);
        let snapshot = Arc::new(map.clone());
        for sender in senders.iter() {
            sender.send(Work::Scan { map: snapshot.clone(), target }).unwrap();
        }

        let mut best_score = 0;
        let mut best_candidate = 0;
        for receiver in receivers.iter() {
            let Response::ChunkBest { score, candidate } = receiver.recv().unwrap();
            if best_score < score {
                best_score = score;
                best_candidate = candidate;
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

/// The multithreaded greedy generator.
///
/// Small searches fall back to the single-threaded scan, as the communication overhead
/// outweighs the gain there.
pub struct PoolGreedySolver;

impl CoverSolver for PoolGreedySolver {
    const NAME: &'static str = "pool";

    fn solve(space: &ConstrainedSpace, budget: &Budget) -> Result<TestSuite, SolveError> {
        let search = sub_time_it!(Search::prepare(space), "preparation")?;

        let thread_count = max(1, num_cpus::get() - 1);
        if search.candidates.len() < thread_count * 2 {
            return Ok(run_serial(&search, budget));
        }

        let search = Arc::new(search);
        Ok(sub_time_it!(run_pool(&search, budget, thread_count), "pool scan"))
    }
}
