// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This crate contains a binary which can check whether a generated suite covers all valid pairs.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use pairgen::common::{u_vec, UVec};
use pairgen::cover::CoverageMap;
use pairgen::greedy_single::Budget;
use pairgen::main;
use pairgen::pairs::{PairList, ValidPairs};
use pairgen::space::ConstrainedSpace;

/// Converts an [std::io::Error] to a [String].
fn ioe<V>(result: std::io::Result<V>) -> Result<V, String> {
    result.map_err(|e| e.to_string())
}

/// Does the actual checking of the suite.
fn check_suite(space: ConstrainedSpace, output_path: PathBuf, _budget: Budget) -> Result<(), String> {
    let mut lines = BufReader::new(ioe(File::open(output_path))?).lines().enumerate().skip_while(|(_, l)| match l {
        Ok(l) => l.starts_with("#"),
        Err(_) => false,
    });

    let header_line = ioe(lines.next().ok_or("No header line?")?.1)?;
    let expected = format!("Test Case #,{}", space.sub_space.parameter_names.unwrap_ref().join(","));
    if header_line != expected {
        return Err(format!("Header incorrect:\n{}\n{}", header_line, expected));
    }

    let pair_list = PairList::new(&space.sub_space.levels);
    let valid = ValidPairs::prune(&space, &pair_list);
    let mut map = CoverageMap::new(&valid);

    let parameter_count = space.sub_space.len();
    let mut row = u_vec![0; parameter_count];
    let mut row_count = 0;

    for (line_number, line) in lines {
        let line = ioe(line)?;
        let mut columns = 0;
        for (column, value) in line.split(",").enumerate() {
            if column == 0 {
                // The test case number.
                continue;
            }
            let parameter_id = column - 1;
            if parameter_count <= parameter_id {
                return Err(format!("Too many values on line {}: {}", line_number, line));
            }
            row[parameter_id] = match space.sub_space.value_to_id[parameter_id].get(value) {
                Some(&value_id) => value_id,
                None => return Err(format!("Unknown value on line {}: {}", line_number, value)),
            };
            columns = column;
        }
        if columns != parameter_count {
            return Err(format!("Missing values on line {}: {}", line_number, line));
        }
        if !space.check_row(row.as_slice()) {
            return Err(format!("Invalid row on line {}: {}", line_number, line));
        }
        map.set_covered_row(&pair_list, row.as_slice());
        row_count += 1;
    }

    if map.is_covered() {
        println!("The {} test cases cover all {} valid pairs.", row_count, valid.valid_count);
        return Ok(());
    }

    let missed = map.uncovered_pairs(&pair_list);
    for pair in missed.iter() {
        println!(
            "Not covered: ({}={}, {}={})",
            space.sub_space.parameter_names[pair.first_parameter],
            space.sub_space.values[pair.first_parameter][pair.first_value],
            space.sub_space.parameter_names[pair.second_parameter],
            space.sub_space.values[pair.second_parameter][pair.second_value],
        );
    }
    Err(format!("{} pairs are not covered!", missed.len()))
}

main!(
    /// This binary checks whether a generated suite covers every pair of values allowed by the constraints.
    check_suite
);
