// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the [TestSuite] struct, the result of a generation run, and the reporting
//! helpers built on top of it.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use common::UVec;
use pairs::Pair;
use space::Space;

pub use report::{attribute_pairs, summarize, Summary};

mod report;

/// A generated test suite.
///
/// Each row assigns one value id to every parameter of the space it was generated for.
/// The struct has public fields to allow for a simple construction of edited instances.
/// Any changes to these fields will however break the instance for further use.
#[derive(Clone, Debug)]
pub struct TestSuite {
    /// The accepted test cases, in order of acceptance.
    pub rows: UVec<UVec<usize>>,

    /// For each row the number of valid pairs it was the first to cover.
    pub new_pair_counts: UVec<usize>,

    /// Present when the search stopped before covering every valid pair.
    pub shortfall: Option<Shortfall>,
}

impl TestSuite {
    /// Creates an empty instance of the [TestSuite] struct.
    pub fn new_empty() -> Self {
        Self { rows: UVec::new(), new_pair_counts: UVec::new(), shortfall: None }
    }

    /// Appends an accepted row together with the number of valid pairs it newly covered.
    pub fn push(&mut self, row: UVec<usize>, newly_covered: usize) {
        self.rows.push(row);
        self.new_pair_counts.push(newly_covered);
    }

    /// Returns the number of test cases in the suite.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the suite holds no test cases.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if every valid pair was covered by the suite.
    pub fn is_complete(&self) -> bool {
        self.shortfall.is_none()
    }

    /// Returns the number of valid pairs covered by the suite.
    pub fn covered_pairs(&self) -> usize {
        self.new_pair_counts.iter().sum()
    }
}

/// The pairs a stopped search left uncovered, together with the cause of the stop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shortfall {
    /// What ended the search.
    pub reason: ShortfallReason,

    /// The valid pairs left uncovered, in pair id order.
    pub missed: Vec<Pair>,
}

impl Shortfall {
    /// Renders the missed pairs with the parameter and value names of the given space.
    pub fn describe(&self, space: &Space) -> String {
        let reason = match self.reason {
            ShortfallReason::CandidatesExhausted => "no remaining candidate covers a new pair",
            ShortfallReason::Cancelled => "the run was cancelled",
        };
        let pairs: Vec<String> = self.missed.iter().map(|pair| format!("({})", pair.describe(space))).collect();
        format!("{} pairs left uncovered because {}: {}", self.missed.len(), reason, pairs.join(", "))
    }
}

/// The cause of an early stop of the search.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShortfallReason {
    /// None of the remaining candidate rows covered an uncovered pair.
    CandidatesExhausted,

    /// The budget ran out between iterations and the search returned the rows accepted so far.
    Cancelled,
}

#[cfg(test)]
mod test_report;
