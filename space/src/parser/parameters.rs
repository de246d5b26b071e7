// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use nom::bytes::complete::{tag, take_till1};
use nom::error::{Error, ErrorKind};
use nom::IResult;
use nom::multi::{many1, separated_list1};

use crate::TemporaryParameter;

use super::{e2s, read_name};

/// Reads one domain entry: anything up to the next separator, trimmed.
///
/// Unlike the parameter tokens of the constraint grammar, domain values may
/// contain inner whitespace (`Desktop Stand Alone`). An entry that trims to
/// nothing is a parse error.
fn read_domain_value(text: &str) -> IResult<&str, &str> {
    let (rest, raw) = take_till1(|c| matches!(c, ',' | ';' | '\n'))(text)?;
    let value = raw.trim();
    if value.is_empty() {
        return Err(nom::Err::Error(Error { input: text, code: ErrorKind::TakeTill1 }));
    }
    Ok((rest, value))
}

fn parse_values(text: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(tag(","), read_domain_value)(text)
}

fn parse_parameter(text: &str) -> IResult<&str, TemporaryParameter> {
    let (text, parameter) = read_name(text)?;
    let (text, _) = tag(":")(text)?;
    let (text, values) = parse_values(text)?;
    let (text, _) = tag(";")(text)?;
    Ok((text, TemporaryParameter { name: parameter.to_string(), values: values.into_iter().map(|s| s.into()).collect() }))
}

pub(crate) fn parse(text: &str) -> Result<(&str, Vec<TemporaryParameter>), String> {
    many1(parse_parameter)(text).map_err(e2s)
}
