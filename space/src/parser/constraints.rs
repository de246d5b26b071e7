// Copyright 2021 A Veenstra.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0> or the
// MIT license <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your option. This file may not be copied,
// modified, or distributed except according to those terms.

use nom::branch::alt;
use nom::bytes::complete::{is_a, tag, take_till, take_while1};
use nom::character::complete::char;
use nom::combinator::{all_consuming, opt};
use nom::IResult;
use nom::sequence::delimited;

use crate::{Constraint, ConstraintError, Predicate};

use super::{is_bare_value_char, keyword, read_name};

enum Target {
    Nil,
    Literal(String),
}

fn quoted(quote: char) -> impl Fn(&str) -> IResult<&str, &str> {
    move |text: &str| delimited(char(quote), take_till(|c| c == quote), char(quote))(text)
}

/// Reads a value token: quoted (may contain spaces) or bare.
///
/// A bare `nil` is the keyword, so only the quoted forms can produce the
/// literal text `nil`.
fn read_target(text: &str) -> IResult<&str, Target> {
    let (text, _) = opt(is_a(" \t\r\n"))(text)?;
    let (text, target) = match alt((quoted('\''), quoted('"')))(text) {
        Ok((rest, value)) => (rest, Target::Literal(value.to_string())),
        Err(_) => {
            let (rest, value) = take_while1(is_bare_value_char)(text)?;
            if value.eq_ignore_ascii_case("nil") {
                (rest, Target::Nil)
            } else {
                (rest, Target::Literal(value.to_string()))
            }
        }
    };
    let (text, _) = opt(is_a(" \t\r\n"))(text)?;
    Ok((text, target))
}

fn read_literal(text: &str) -> IResult<&str, String> {
    let (text, target) = read_target(text)?;
    match target {
        // The comparison operators treat an unquoted nil as a plain word.
        Target::Nil => Ok((text, "nil".to_string())),
        Target::Literal(value) => Ok((text, value)),
    }
}

fn comparison(text: &str) -> IResult<&str, Predicate> {
    let (text, _) = opt(is_a(" \t\r\n"))(text)?;
    let (text, operator) = alt((tag("!="), tag("=")))(text)?;
    let (text, value) = read_literal(text)?;
    let predicate = if operator == "!=" { Predicate::NotEquals(value) } else { Predicate::Equals(value) };
    Ok((text, predicate))
}

fn nil_test(text: &str) -> IResult<&str, Predicate> {
    let (text, _) = keyword("is")(text)?;
    let (text, negated) = opt(keyword("not"))(text)?;
    let (text, _) = keyword("nil")(text)?;
    let predicate = if negated.is_some() { Predicate::IsNotEmpty } else { Predicate::IsEmpty };
    Ok((text, predicate))
}

fn condition(text: &str) -> IResult<&str, (String, Predicate)> {
    let (text, parameter) = read_name(text)?;
    let (text, predicate) = alt((comparison, nil_test))(text)?;
    Ok((text, (parameter.to_string(), predicate)))
}

fn action(text: &str) -> IResult<&str, (String, Predicate)> {
    let (text, parameter) = read_name(text)?;
    let (text, _) = keyword("must")(text)?;
    let (text, negated) = opt(keyword("not"))(text)?;
    let (text, _) = keyword("be")(text)?;
    let (text, target) = read_target(text)?;
    let predicate = match (negated, target) {
        (None, Target::Nil) => Predicate::IsEmpty,
        (Some(_), Target::Nil) => Predicate::IsNotEmpty,
        (None, Target::Literal(value)) => Predicate::Equals(value),
        (Some(_), Target::Literal(value)) => Predicate::NotEquals(value),
    };
    Ok((text, (parameter.to_string(), predicate)))
}

fn constraint_body(text: &str) -> IResult<&str, Constraint> {
    let (text, _) = opt(is_a(" \t\r\n"))(text)?;
    let (text, _) = keyword("if")(text)?;
    let (text, (condition_parameter, condition)) = condition(text)?;
    let (text, _) = keyword("then")(text)?;
    let (text, (action_parameter, action)) = action(text)?;
    Ok((text, Constraint { condition_parameter, condition, action_parameter, action, description: None }))
}

/// Parses a single constraint, rejecting any trailing input.
pub(crate) fn parse_one(text: &str) -> Result<Constraint, ConstraintError> {
    match all_consuming(constraint_body)(text) {
        Ok((_, constraint)) => Ok(constraint),
        Err(nom::Err::Error(error)) | Err(nom::Err::Failure(error)) => {
            let offending = if error.input.trim().is_empty() { text.trim() } else { error.input.trim() };
            Err(ConstraintError::Syntax { offending: offending.to_string() })
        }
        Err(nom::Err::Incomplete(_)) => Err(ConstraintError::Syntax { offending: text.trim().to_string() }),
    }
}

/// Parses the constraint section of a definition file, one constraint per line.
pub(crate) fn parse(text: &str) -> Result<Vec<Constraint>, String> {
    let mut result = Vec::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        result.push(parse_one(line).map_err(|e| e.to_string())?);
    }
    Ok(result)
}

#[cfg(test)]
mod constraint_tests {
    use super::*;

    fn parts(constraint: &Constraint) -> (&str, &Predicate, &str, &Predicate) {
        (
            constraint.condition_parameter.as_str(),
            &constraint.condition,
            constraint.action_parameter.as_str(),
            &constraint.action,
        )
    }

    #[test]
    fn test_equals_condition() {
        let c = parse_one("IF Format = 'DesktopStandAlone' THEN DAW must be nil").unwrap();
        assert_eq!(parts(&c), ("Format", &Predicate::Equals("DesktopStandAlone".into()), "DAW", &Predicate::IsEmpty));
    }

    #[test]
    fn test_not_equals_condition() {
        let c = parse_one("IF os != Linux THEN browser must not be 'Safari'").unwrap();
        assert_eq!(parts(&c), ("os", &Predicate::NotEquals("Linux".into()), "browser", &Predicate::NotEquals("Safari".into())));
    }

    #[test]
    fn test_nil_conditions() {
        let c = parse_one("IF DAW is nil THEN Format must be 'DesktopStandAlone'").unwrap();
        assert_eq!(parts(&c), ("DAW", &Predicate::IsEmpty, "Format", &Predicate::Equals("DesktopStandAlone".into())));

        let c = parse_one("IF DAW is not nil THEN Format must not be 'DesktopStandAlone'").unwrap();
        assert_eq!(parts(&c), ("DAW", &Predicate::IsNotEmpty, "Format", &Predicate::NotEquals("DesktopStandAlone".into())));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let c = parse_one("if Format = VST3 then DAW MUST NOT BE NIL").unwrap();
        assert_eq!(parts(&c), ("Format", &Predicate::Equals("VST3".into()), "DAW", &Predicate::IsNotEmpty));
    }

    #[test]
    fn test_whitespace_tolerance() {
        let c = parse_one("  IF   Format='AUv3'THEN   DAW   must be'Logic'  ").unwrap();
        assert_eq!(parts(&c), ("Format", &Predicate::Equals("AUv3".into()), "DAW", &Predicate::Equals("Logic".into())));
    }

    #[test]
    fn test_quoting_forms() {
        let c = parse_one("IF a = \"two words\" THEN b must be 'and more'").unwrap();
        assert_eq!(parts(&c), ("a", &Predicate::Equals("two words".into()), "b", &Predicate::Equals("and more".into())));

        // A quoted nil is a literal, not the keyword.
        let c = parse_one("IF a = 'nil' THEN b must be 'nil'").unwrap();
        assert_eq!(parts(&c), ("a", &Predicate::Equals("nil".into()), "b", &Predicate::Equals("nil".into())));
    }

    #[test]
    fn test_syntax_errors_carry_offending_text() {
        match parse_one("IF a = 1 THEN b must be nil AND c must be nil") {
            Err(ConstraintError::Syntax { offending }) => assert_eq!(offending, "AND c must be nil"),
            other => panic!("Expected a syntax error, got {:?}", other),
        }

        match parse_one("WHENEVER a = 1 THEN b must be nil") {
            Err(ConstraintError::Syntax { offending }) => assert!(offending.starts_with("WHENEVER")),
            other => panic!("Expected a syntax error, got {:?}", other),
        }

        assert!(parse_one("IF a = 1").is_err());
        assert!(parse_one("IF a is THEN b must be nil").is_err());
        assert!(parse_one("IF a = 1 THEN b should be nil").is_err());
        assert!(parse_one("").is_err());
    }

    #[test]
    fn test_section_parse() {
        let constraints = parse("\nIF a = 1 THEN b must be nil\n\n  IF b is nil THEN a must not be 2\n").unwrap();
        assert_eq!(constraints.len(), 2);
        assert!(parse("IF a = 1 THEN b must be nil\ngarbage\n").is_err());
        assert_eq!(parse("\n  \n").unwrap().len(), 0);
    }
}
