// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use std::fmt::Debug;

use nom::bytes::complete::{is_a, tag_no_case, take_while1};
use nom::combinator::opt;
use nom::error::{Error, ErrorKind};
use nom::IResult;

pub(crate) mod parameters;
pub(crate) mod constraints;

fn e2s<T: Debug>(e: T) -> String {
    format!("{:?}", e)
}

fn is_name_char(input: char) -> bool {
    matches!(input, 'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_')
}

fn is_bare_value_char(input: char) -> bool {
    is_name_char(input) || input == '.'
}

/// Reads a single parameter token, eating the whitespace around it.
fn read_name(input: &str) -> IResult<&str, &str> {
    let (input, _) = opt(is_a(" \t\r\n"))(input)?;
    let (input, result) = take_while1(is_name_char)(input)?;
    let (input, _) = opt(is_a(" \t\r\n"))(input)?;
    Ok((input, result))
}

/// Matches `word` case-insensitively, requiring a token boundary after it.
fn keyword(word: &'static str) -> impl Fn(&str) -> IResult<&str, ()> {
    move |text: &str| {
        let (rest, _) = tag_no_case(word)(text)?;
        if rest.chars().next().map_or(false, is_name_char) {
            return Err(nom::Err::Error(Error { input: text, code: ErrorKind::Tag }));
        }
        let (rest, _) = opt(is_a(" \t\r\n"))(rest)?;
        Ok((rest, ()))
    }
}

#[cfg(test)]
mod parser_tests {
    use super::{keyword, read_name};

    #[test]
    fn test_name_parse() {
        assert_eq!(read_name("a"), Ok(("", "a")));
        assert_eq!(read_name("-a"), Ok(("", "-a")));
        assert_eq!(read_name("test_this"), Ok(("", "test_this")));
        assert_eq!(read_name(" a b "), Ok(("b ", "a")));
        assert!(read_name(" ").is_err());
        assert!(read_name("").is_err());
    }

    #[test]
    fn test_keyword() {
        assert_eq!(keyword("if")("IF a"), Ok(("a", ())));
        assert_eq!(keyword("if")("if a"), Ok(("a", ())));
        assert_eq!(keyword("nil")("nil"), Ok(("", ())));
        assert!(keyword("nil")("nilpotent").is_err());
        assert!(keyword("if")("iffy = 1").is_err());
    }
}
