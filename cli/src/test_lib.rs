// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use super::*;

#[test]
fn test_validate_args() {
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-c"])
    )
    .is_ok());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-n"])
    )
    .is_ok());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-c", "-t", "30"])
    )
    .is_ok());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-n", "-t", "0"])
    )
    .is_ok());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-c", "-t", "soon"])
    )
    .is_err());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-n", "-t", " "])
    )
    .is_err());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-c", "-t", "9.5"])
    )
    .is_err());
    assert!(validate_args(
        get_app("", "", "").get_matches_from(&["exe", "same.txt", "-o", "same.txt", "-n"])
    )
    .is_err());
}

#[test]
fn test_validated_values() {
    let (input, output, timeout, constraints) = validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-c", "-t", "30"]),
    )
    .unwrap();
    assert_eq!(input, PathBuf::from("space.txt"));
    assert_eq!(output, PathBuf::from("result.txt"));
    assert_eq!(timeout, Some(Duration::from_secs(30)));
    assert!(constraints);

    let (input, output, timeout, constraints) = validate_args(
        get_app("", "", "").get_matches_from(&["exe", "space.txt", "-n", "-o", "suite.csv"]),
    )
    .unwrap();
    assert_eq!(input, PathBuf::from("space.txt"));
    assert_eq!(output, PathBuf::from("suite.csv"));
    assert_eq!(timeout, None);
    assert!(!constraints);
}
