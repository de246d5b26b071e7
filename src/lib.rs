// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides two implementations of a greedy pairwise test-case generator:
//!   * [greedy_single] A single-threaded implementation of the greedy search.
//!   * [greedy_multi] A multithreaded implementation of the greedy search.
//!
//! The other crates included provide the data-types used in these two implementations.
//!
//! # Features
//! This crate provides the following optional features:
//!   * `sub-time` Print the timings for all the [common::sub_time_it] calls.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::path::PathBuf;

pub use cli;
pub use common;
pub use cover;
pub use greedy_multi;
pub use greedy_single;
pub use pairs;
pub use space;
pub use suite;
pub use writer;

use greedy_single::{Budget, CoverSolver};
use space::ConstrainedSpace;

/// Generate a pairwise suite with the given solver and write it to the output path.
///
/// A partial suite left behind by a spent [Budget] or an exhausted candidate set is still
/// written; its shortfall is reported on standard out and in the header of the file.
pub fn generate<S: CoverSolver>(space: ConstrainedSpace, output_path: PathBuf, budget: Budget) -> Result<(), String> {
    let result = common::time_it!(S::solve(&space, &budget), "Generation").map_err(|e| e.to_string())?;

    if let Some(shortfall) = &result.shortfall {
        println!("Warning: {}", shortfall.describe(&space.sub_space));
    }

    common::time_it!(
        writer::write_result(&space.sub_space, &result, output_path).map_err(|e| e.to_string()),
        "Writing"
    )
}

/// Create a main method which parses the cli arguments and calls the specified method with the
/// resulting [ConstrainedSpace], output path, and [Budget].
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use greedy_single::Budget;
/// use space::ConstrainedSpace;
/// use pairgen::main;
///
/// fn generate(space: ConstrainedSpace, _output_path: PathBuf, _budget: Budget) -> Result<(), String> {
///     println!("Generating a suite for {} parameters", space.sub_space.parameter_names.len());
///     Ok(())
/// }
///
/// // Create a main method which parses the cli arguments and calls the method accordingly.
/// main!(generate);
/// ```
#[macro_export]
macro_rules! main {
    ($(#[$outer:meta])* $method:ident) => {
        $(#[$outer])*
        fn main() -> Result<(), String> {
            let (space, output_path, budget) =
                common::time_it!(cli::parse_arguments(file!(), cli::crate_version!()), "Parsing")?;
            $method(space, output_path, budget)
        }
    };
}
