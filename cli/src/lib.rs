// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate provides a basic cli for the pairwise generators.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::fs::read_to_string;
use std::path::PathBuf;
use std::time::Duration;

pub use clap::crate_version;
use clap::{App, Arg, ArgMatches};
use greedy_single::Budget;
use space::{parse_constrained, parse_unconstrained, ConstrainedSpace};

const INPUT_FILE_ARG: &str = "input_file";
const OUTPUT_FILE_ARG: &str = "output_file";
const TIMEOUT_ARG: &str = "timeout";
const CONSTRAINTS_ARG: &str = "constraints";
const NO_CONSTRAINTS_ARG: &str = "no-constraints";
const BIN_PREFIX: &str = "src/bin/";
const RUST_EXT: &str = ".rs";

fn get_app<'a, 'b>(app_name: &'a str, short_version: &'a str, long_version: &'a str) -> App<'a, 'b>
where
    'a: 'b,
{
    App::new(app_name)
        .version(short_version)
        .long_version(long_version)
        .arg(
            Arg::with_name(INPUT_FILE_ARG)
                .required(true)
                .help("Set the input file with the definition of the parameter space."),
        )
        .arg(
            Arg::with_name(OUTPUT_FILE_ARG)
                .short("o")
                .long("output")
                .required(false)
                .default_value("result.txt")
                .help("Set the output file."),
        )
        .arg(
            Arg::with_name(TIMEOUT_ARG)
                .short("t")
                .long("timeout")
                .takes_value(true)
                .required(false)
                .help("Stop the search after the given number of seconds and write the partial suite."),
        )
        .arg(
            Arg::with_name(CONSTRAINTS_ARG)
                .short("c")
                .long("constraints")
                .conflicts_with(NO_CONSTRAINTS_ARG)
                .required_unless(NO_CONSTRAINTS_ARG)
                .help("Use the constraints in the provided file."),
        )
        .arg(
            Arg::with_name(NO_CONSTRAINTS_ARG)
                .short("n")
                .long("no-constraints")
                .conflicts_with(CONSTRAINTS_ARG)
                .required_unless(CONSTRAINTS_ARG)
                .help("Do not use the constraints in the provided file."),
        )
}

fn validate_args(matches: ArgMatches) -> Result<(PathBuf, PathBuf, Option<Duration>, bool), String> {
    let input_path = PathBuf::from(
        matches
            .value_of(INPUT_FILE_ARG)
            .ok_or("The input file should be provided")?,
    );

    let output_path = PathBuf::from(
        matches
            .value_of(OUTPUT_FILE_ARG)
            .ok_or("The output file should be provided")?,
    );

    if input_path == output_path {
        return Err("Input and output should not be the same!".to_string());
    }

    let timeout = match matches.value_of(TIMEOUT_ARG) {
        None => None,
        Some(text) => Some(Duration::from_secs(
            text.parse::<u64>()
                .map_err(|_| "The timeout argument should be a number of seconds.".to_string())?,
        )),
    };

    Ok((input_path, output_path, timeout, matches.is_present(CONSTRAINTS_ARG)))
}

fn load_space(
    args: (PathBuf, PathBuf, Option<Duration>, bool),
) -> Result<(ConstrainedSpace, PathBuf, Budget), String> {
    let contents = read_to_string(args.0).or_else(|e| Err(e.to_string()))?;
    let space = if args.3 {
        parse_constrained(contents.as_str())?
    } else {
        ConstrainedSpace::wrap_space(parse_unconstrained(contents.as_str())?)
    };

    let budget = match args.2 {
        Some(limit) => Budget::timeout(limit),
        None => Budget::none(),
    };

    Ok((space, args.1, budget))
}

/// Parse the commandline arguments and return the [ConstrainedSpace], the output path, and the [Budget] of the run.
pub fn parse_arguments(mut app_name: &str, version: &str) -> Result<(ConstrainedSpace, PathBuf, Budget), String> {
    if app_name.ends_with(RUST_EXT) {
        app_name = &app_name[..app_name.len() - RUST_EXT.len()];
    }

    if app_name.starts_with(BIN_PREFIX) {
        app_name = &app_name[BIN_PREFIX.len()..];
    }

    let short_version = format!("v{} ({})", version, env!("GIT_HASH_SHORT"));
    let long_version = format!("v{} ({})", version, env!("GIT_HASH"));

    let matches = get_app(app_name, short_version.as_str(), long_version.as_str()).get_matches();

    load_space(validate_args(matches)?)
}

#[cfg(test)]
mod test_lib;
