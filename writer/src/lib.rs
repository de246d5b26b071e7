// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

//! This module contains the methods for writing a generated [TestSuite] to a file.

#![deny(missing_docs, rustdoc::missing_crate_level_docs, future_incompatible)]

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use space::Space;
use suite::TestSuite;

fn write_headers(space: &Space, suite: &TestSuite, file: &mut BufWriter<File>) -> std::io::Result<()> {
    file.write_all(format!("# Number of parameters: {}\n", space.len()).as_ref())?;
    file.write_all(format!("# Number of test cases: {}\n", suite.len()).as_ref())?;
    if let Some(shortfall) = &suite.shortfall {
        file.write_all(format!("# Incomplete: {}\n", shortfall.describe(space)).as_ref())?;
    }
    file.write_all(b"Test Case #")?;
    for parameter in space.parameter_names.iter() {
        file.write_all(b",")?;
        file.write_all(parameter.as_bytes())?;
    }
    file.write_all(b"\n")
}

fn write_values(space: &Space, suite: &TestSuite, file: &mut BufWriter<File>) -> std::io::Result<()> {
    for (row_id, row) in suite.rows.iter().enumerate() {
        file.write_all(format!("{}", row_id + 1).as_ref())?;
        for (index, &value) in row.iter().enumerate() {
            file.write_all(b",")?;
            file.write_all(space.value_text(index, value).as_bytes())?;
        }
        file.write_all(b"\n")?;
    }
    Ok(())
}

/// Write the given [TestSuite] to the given filename.
///
/// The file starts with `#` comment lines, followed by a header row naming the columns and one
/// numbered row per test case.
pub fn write_result(space: &Space, suite: &TestSuite, filename: PathBuf) -> std::io::Result<()> {
    println!("The resulting suite has {} tests", suite.len());
    let mut writer = BufWriter::new(File::create(filename)?);
    write_headers(space, suite, &mut writer)?;
    write_values(space, suite, &mut writer)?;
    writer.flush()
}
