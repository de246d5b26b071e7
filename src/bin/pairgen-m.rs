// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains a binary calling the pairwise generator provided in [greedy_multi].

use std::path::PathBuf;

use pairgen::greedy_multi::PoolGreedySolver;
use pairgen::greedy_single::Budget;
use pairgen::main;
use pairgen::space::ConstrainedSpace;

/// Run the multithreaded generator and write the resulting suite.
fn generate(space: ConstrainedSpace, output_path: PathBuf, budget: Budget) -> Result<(), String> {
    pairgen::generate::<PoolGreedySolver>(space, output_path, budget)
}

main!(
    /// Run the multithreaded generator for the given command line arguments.
    generate
);
